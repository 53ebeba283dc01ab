use std::f32::consts::PI;

use glam::{Vec2, Vec3A};

use crate::{ray_sphere_intersect, IntersectionRecord, Ray, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3A,
    pub radius: f32,
}

impl Sphere {
    #[inline]
    pub fn new(center: Vec3A, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord> {
        let t = ray_sphere_intersect(self, ray)?;
        let location = ray.at(t);
        let normal = (location - self.center).normalize_or_zero();

        // Longitude/latitude parametrisation around +Y
        let tex_coords = Vec2::new(
            0.5 + normal.x.atan2(normal.z) / (2.0 * PI),
            normal.y.clamp(-1.0, 1.0).acos() / PI,
        );

        Some(IntersectionRecord::new(t, location, normal, tex_coords))
    }

    #[inline]
    fn min_bound(&self) -> Vec3A {
        self.center - Vec3A::splat(self.radius)
    }

    #[inline]
    fn max_bound(&self) -> Vec3A {
        self.center + Vec3A::splat(self.radius)
    }

    #[inline]
    fn average_position(&self) -> Vec3A {
        self.center
    }
}
