use glam::{Vec2, Vec3A};

use crate::{ray_slab_interval, IntersectionRecord, Ray, Surface, AABB};

/// Axis aligned box surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub aabb: AABB,
}

impl Cuboid {
    /// Box spanning two opposite corners, given in any order
    #[inline]
    pub fn new(corner0: Vec3A, corner1: Vec3A) -> Self {
        let mut aabb = AABB::default();
        aabb.grow(corner0);
        aabb.grow(corner1);
        Self { aabb }
    }

    #[inline]
    pub fn from_center(center: Vec3A, half_extent: Vec3A) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }
}

impl Surface for Cuboid {
    fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord> {
        let interval = ray_slab_interval(&self.aabb, ray, -f32::INFINITY, f32::INFINITY)?;

        // Entering face first, the exit face when the ray starts inside
        let (t, axis, outward) = if ray.is_valid_t(interval.t_near) {
            (interval.t_near, interval.near_axis, -1.0)
        } else if ray.is_valid_t(interval.t_far) {
            (interval.t_far, interval.far_axis, 1.0)
        } else {
            return None;
        };

        let mut normal = Vec3A::ZERO;
        normal[axis] = outward * ray.direction[axis].signum();

        Some(IntersectionRecord::new(t, ray.at(t), normal, Vec2::ZERO))
    }

    #[inline]
    fn min_bound(&self) -> Vec3A {
        self.aabb.min
    }

    #[inline]
    fn max_bound(&self) -> Vec3A {
        self.aabb.max
    }

    #[inline]
    fn average_position(&self) -> Vec3A {
        self.aabb.center()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3A;

    use approx::*;

    use crate::*;

    #[test]
    fn hit_from_outside() {
        let cuboid = Cuboid::from_center(Vec3A::ZERO, Vec3A::splat(0.5));
        let ray = Ray::infinite_ray(Vec3A::new(-1.0, 0.0, 0.0), Vec3A::X);

        let record = cuboid.intersect(&ray).unwrap();

        assert_abs_diff_eq!(record.t, 0.5);
        assert_abs_diff_eq!(record.normal, -Vec3A::X);
        assert_abs_diff_eq!(record.location, Vec3A::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn hit_from_inside() {
        let cuboid = Cuboid::from_center(Vec3A::ZERO, Vec3A::ONE);
        let ray = Ray::infinite_ray(Vec3A::ZERO, -Vec3A::Y);

        let record = cuboid.intersect(&ray).unwrap();

        assert_abs_diff_eq!(record.t, 1.0);
        assert_abs_diff_eq!(record.normal, -Vec3A::Y);
    }

    #[test]
    fn corners_in_any_order() {
        let cuboid = Cuboid::new(Vec3A::new(1.0, -1.0, 2.0), Vec3A::new(-1.0, 1.0, 0.0));

        assert_eq!(cuboid.min_bound(), Vec3A::new(-1.0, -1.0, 0.0));
        assert_eq!(cuboid.max_bound(), Vec3A::new(1.0, 1.0, 2.0));
        assert_eq!(cuboid.average_position(), Vec3A::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn miss() {
        let cuboid = Cuboid::from_center(Vec3A::ZERO, Vec3A::ONE);

        let beside = Ray::infinite_ray(Vec3A::new(-3.0, 2.0, 0.0), Vec3A::X);
        assert!(cuboid.intersect(&beside).is_none());

        let too_short = Ray::new(Vec3A::new(-3.0, 0.0, 0.0), Vec3A::X, 0.0, 1.0);
        assert!(cuboid.intersect(&too_short).is_none());
    }
}
