extern crate glam;

use glam::{Vec2, Vec3A};

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{ray_triangle_intersect, IntersectionRecord, Ray, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertex0: Vec3A,
    pub vertex1: Vec3A,
    pub vertex2: Vec3A,
    pub centroid: Vec3A,
}

impl Triangle {
    /// Zeroed Triangle
    pub const ZERO: Self = Triangle {
        vertex0: Vec3A::ZERO,
        vertex1: Vec3A::ZERO,
        vertex2: Vec3A::ZERO,
        centroid: Vec3A::ZERO,
    };

    #[inline]
    pub fn new(vertex0: Vec3A, vertex1: Vec3A, vertex2: Vec3A) -> Triangle {
        let mut tri = Triangle {
            vertex0,
            vertex1,
            vertex2,
            centroid: Vec3A::ZERO,
        };
        tri.compute_centroid();
        tri
    }

    #[inline]
    pub fn compute_centroid(&mut self) {
        self.centroid = (self.vertex0 + self.vertex1 + self.vertex2) / 3.0;
    }

    /// Unit geometric normal, following the vertex winding
    #[inline]
    pub fn normal(&self) -> Vec3A {
        (self.vertex1 - self.vertex0)
            .cross(self.vertex2 - self.vertex0)
            .normalize_or_zero()
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Surface for Triangle {
    #[inline]
    fn intersect(&self, ray: &Ray) -> Option<IntersectionRecord> {
        let (t, u, v) = ray_triangle_intersect(self, ray)?;
        Some(IntersectionRecord::new(
            t,
            ray.at(t),
            self.normal(),
            Vec2::new(u, v),
        ))
    }

    #[inline]
    fn min_bound(&self) -> Vec3A {
        self.vertex0.min(self.vertex1).min(self.vertex2)
    }

    #[inline]
    fn max_bound(&self) -> Vec3A {
        self.vertex0.max(self.vertex1).max(self.vertex2)
    }

    #[inline]
    fn average_position(&self) -> Vec3A {
        self.centroid
    }
}

impl Distribution<Triangle> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Triangle {
        Triangle::new(rng.gen(), rng.gen(), rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    use glam::Vec3A;

    use rand::{thread_rng, Rng};

    use approx::*;

    #[test]
    fn compute_centroid() {
        let mut rng = thread_rng();
        let tri: Triangle = rng.gen();
        assert_relative_eq!(
            tri.centroid,
            (tri.vertex0 + tri.vertex1 + tri.vertex2) / 3.0
        );
    }

    #[test]
    fn bounds_contain_vertices() {
        let mut rng = thread_rng();
        let tri: Triangle = rng.gen();
        let aabb = AABB::new(tri.min_bound(), tri.max_bound());
        for vertex in [tri.vertex0, tri.vertex1, tri.vertex2] {
            let mut point = AABB::default();
            point.grow(vertex);
            assert!(aabb.contains(&point));
        }
    }

    #[test]
    fn intersect_fills_record() {
        let tri = Triangle::new(
            Vec3A::new(-1.0, -1.0, 3.0),
            Vec3A::new(1.0, -1.0, 3.0),
            Vec3A::new(0.0, 1.0, 3.0),
        );
        let ray = Ray::infinite_ray(Vec3A::ZERO, Vec3A::Z);

        let record = tri.intersect(&ray).unwrap();

        assert_abs_diff_eq!(record.t, 3.0, epsilon = RAY_INTERSECT_EPSILON);
        assert_abs_diff_eq!(record.location, Vec3A::new(0.0, 0.0, 3.0), epsilon = RAY_INTERSECT_EPSILON);
        assert_abs_diff_eq!(record.normal.abs(), Vec3A::Z);
    }
}
