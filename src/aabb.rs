use crate::Surface;

/// Axis aligned bounding box. The default box is inverted (min = +inf, max = -inf) and acts as
/// the identity for [`AABB::grow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: glam::Vec3A,
    pub max: glam::Vec3A,
}

impl Default for AABB {
    fn default() -> Self {
        Self {
            min: glam::Vec3A::splat(f32::INFINITY),
            max: glam::Vec3A::splat(-f32::INFINITY),
        }
    }
}

impl AABB {
    #[inline]
    pub fn new(min: glam::Vec3A, max: glam::Vec3A) -> Self {
        Self { min, max }
    }

    /// Bounding box of all the surfaces in the slice. Inverted if the slice is empty.
    pub fn from_surfaces<S>(surfaces: &[S]) -> Self
    where
        S: Surface,
    {
        let mut aabb = AABB::default();
        for surface in surfaces {
            aabb.grow_surface(surface);
        }
        aabb
    }

    /// Grow the box to contain a new point
    #[inline]
    pub fn grow(&mut self, point: glam::Vec3A) {
        self.max = self.max.max(point);
        self.min = self.min.min(point);
    }

    /// Grow the box to contain another box
    #[inline]
    pub fn grow_aabb(&mut self, other: &AABB) {
        self.max = self.max.max(other.max);
        self.min = self.min.min(other.min);
    }

    #[inline]
    pub fn grow_surface<S>(&mut self, surface: &S)
    where
        S: Surface + ?Sized,
    {
        self.grow_aabb(&AABB::new(surface.min_bound(), surface.max_bound()));
    }

    /// If the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// If `other` lies completely inside this box (boundaries included)
    #[inline]
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    pub fn extent(&self) -> glam::Vec3A {
        self.max - self.min
    }

    pub fn center(&self) -> glam::Vec3A {
        (self.min + self.max) * 0.5
    }
}
