use crate::RAY_INTERSECT_EPSILON;

/// Ray object with a valid parameter interval `[start, end)`.
///
/// Intersections are only reported for `start <= t < end`. The interval is narrowed while
/// searching for the closest hit, so the ray is `Copy` and each traversal branch works on
/// its own copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: glam::Vec3A,
    pub direction: glam::Vec3A,
    pub start: f32,
    pub end: f32,
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Default::default(),
            direction: glam::Vec3A::new(1.0, 0.0, 0.0),
            start: RAY_INTERSECT_EPSILON,
            end: f32::INFINITY,
        }
    }
}

impl Ray {
    #[inline]
    pub fn new(origin: glam::Vec3A, direction: glam::Vec3A, start: f32, end: f32) -> Self {
        Self {
            origin,
            direction,
            start,
            end,
        }
    }

    /// Create a ray with infinite length (a proper ray), starting just off the origin
    #[inline]
    pub fn infinite_ray(origin: glam::Vec3A, direction: glam::Vec3A) -> Self {
        Self::new(origin, direction, RAY_INTERSECT_EPSILON, f32::INFINITY)
    }

    /// Point along the ray at parameter `t`
    #[inline]
    pub fn at(&self, t: f32) -> glam::Vec3A {
        self.origin + self.direction * t
    }

    /// If `t` lies in the valid interval
    #[inline]
    pub fn is_valid_t(&self, t: f32) -> bool {
        t >= self.start && t < self.end
    }
}
