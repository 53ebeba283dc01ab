use glam::Vec3A;

use crate::{IntersectionRecord, Ray};

/// A renderable primitive that can be stored in an acceleration structure
pub trait Surface {
    /// Intersect the surface with a ray. Only hits with `ray.start <= t < ray.end` are reported.
    fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord>;

    /// Minimum corner of the surface's bounding box
    fn min_bound(&self) -> Vec3A;

    /// Maximum corner of the surface's bounding box
    fn max_bound(&self) -> Vec3A;

    /// Representative position used to sort surfaces when building
    fn average_position(&self) -> Vec3A;
}

impl<S> Surface for Box<S>
where
    S: Surface + ?Sized,
{
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord> {
        (**self).intersect(ray)
    }

    #[inline]
    fn min_bound(&self) -> Vec3A {
        (**self).min_bound()
    }

    #[inline]
    fn max_bound(&self) -> Vec3A {
        (**self).max_bound()
    }

    #[inline]
    fn average_position(&self) -> Vec3A {
        (**self).average_position()
    }
}

/// Boxed surface usable from several threads, for heterogeneous scenes
pub type DynSurface = Box<dyn Surface + Send + Sync>;
