use crate::{IntersectionRecord, Ray, Surface};

/// Acceleration structure answering ray queries over a set of surfaces
pub trait AccelStruct<S>
where
    S: Surface,
{
    /// Take ownership of the surfaces and build the structure. Replaces any previous build.
    fn build(&mut self, surfaces: Vec<S>);

    /// Intersect the ray with the surfaces.
    ///
    /// Without `any_intersection` the closest hit in the ray's valid interval is written to
    /// `record`. With it, the search stops at the first hit found and `record` is unspecified.
    /// When nothing is hit `record` is left untouched.
    fn intersect(
        &self,
        record: Option<&mut IntersectionRecord>,
        ray: &Ray,
        any_intersection: bool,
    ) -> bool;
}
