use crate::{AccelStruct, IntersectionRecord, Ray, Surface};

/// Tests every surface against every ray. Reference for the BVH, and fine for tiny scenes.
#[derive(Debug, Clone)]
pub struct NaiveAccel<S> {
    surfaces: Vec<S>,
}

impl<S> Default for NaiveAccel<S> {
    fn default() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }
}

impl<S> NaiveAccel<S>
where
    S: Surface,
{
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn build(&mut self, surfaces: Vec<S>) {
        self.surfaces = surfaces;
    }

    #[inline]
    pub fn surfaces(&self) -> &[S] {
        &self.surfaces
    }

    pub fn intersect(
        &self,
        mut record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> bool {
        let mut ray = *ray;
        let mut found = false;

        for surface in &self.surfaces {
            let Some(hit) = surface.intersect(&ray) else {
                continue;
            };
            if hit.t >= ray.end {
                continue;
            }
            if any_intersection {
                return true;
            }

            found = true;
            ray.end = hit.t;
            if let Some(record) = record.as_deref_mut() {
                record.set(&hit);
            }
        }

        found
    }
}

impl<S> AccelStruct<S> for NaiveAccel<S>
where
    S: Surface,
{
    #[inline]
    fn build(&mut self, surfaces: Vec<S>) {
        NaiveAccel::build(self, surfaces);
    }

    #[inline]
    fn intersect(
        &self,
        record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> bool {
        NaiveAccel::intersect(self, record, ray, any_intersection)
    }
}
