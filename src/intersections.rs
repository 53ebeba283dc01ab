use strum::IntoEnumIterator;

use crate::{Axis, Ray, Sphere, Triangle, AABB};

/// Objects that can cheaply tell if a ray's valid interval touches them
pub trait FastRayIntersect {
    fn fast_ray_intersect(&self, ray: &Ray) -> bool;
}

/// Epsilon used for ray intersections
pub const RAY_INTERSECT_EPSILON: f32 = 0.0001;

/// Parameter interval where a ray is inside a box, and the axes of the slabs bounding it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabInterval {
    pub t_near: f32,
    pub t_far: f32,
    pub near_axis: Axis,
    pub far_axis: Axis,
}

/// Slab test restricted to `[t_min, t_max]`.
///
/// Inverted boxes never intersect. Axes the ray runs parallel to only reject when the origin is
/// outside the slab, so zero volume boxes are still hit by rays going through them.
pub fn ray_slab_interval(aabb: &AABB, ray: &Ray, t_min: f32, t_max: f32) -> Option<SlabInterval> {
    if !aabb.is_valid() {
        return None;
    }

    let mut interval = SlabInterval {
        t_near: t_min,
        t_far: t_max,
        near_axis: Axis::X,
        far_axis: Axis::X,
    };

    for axis in Axis::iter() {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];
        let min = aabb.min[axis];
        let max = aabb.max[axis];

        if direction == 0.0 {
            if origin < min || origin > max {
                return None;
            }
            continue;
        }

        let inv_direction = 1.0 / direction;
        let mut t0 = (min - origin) * inv_direction;
        let mut t1 = (max - origin) * inv_direction;
        if t0 > t1 {
            (t0, t1) = (t1, t0);
        }

        // NaN never passes these comparisons, so it can't widen the interval
        if t0 > interval.t_near {
            interval.t_near = t0;
            interval.near_axis = axis;
        }
        if t1 < interval.t_far {
            interval.t_far = t1;
            interval.far_axis = axis;
        }

        if interval.t_far < interval.t_near {
            return None;
        }
    }

    Some(interval)
}

impl FastRayIntersect for AABB {
    #[inline]
    fn fast_ray_intersect(&self, ray: &Ray) -> bool {
        ray_slab_interval(self, ray, ray.start, ray.end).is_some()
    }
}

/// Intersect a triangle with a ray (Möller–Trumbore).
///
/// # Return
///
/// (t, u, v) with `u`, `v` the barycentric coordinates of vertex1 and vertex2
pub fn ray_triangle_intersect(tri: &Triangle, ray: &Ray) -> Option<(f32, f32, f32)> {
    let edge1 = tri.vertex1 - tri.vertex0;
    let edge2 = tri.vertex2 - tri.vertex0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);
    if approx::abs_diff_eq!(a, 0.0, epsilon = RAY_INTERSECT_EPSILON) {
        // ray parallel to triangle
        return None;
    }
    let f = 1.0 / a;
    let s = ray.origin - tri.vertex0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = f * edge2.dot(q);
    if ray.is_valid_t(t) {
        Some((t, u, v))
    } else {
        None
    }
}

/// Intersect a sphere with a ray, returning the closest `t` in the ray's valid interval
pub fn ray_sphere_intersect(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let oc = ray.origin - sphere.center;
    let a = ray.direction.length_squared();
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant.is_nan() || discriminant < 0.0 || a == 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let near = (-half_b - sqrt_d) / a;
    if ray.is_valid_t(near) {
        return Some(near);
    }

    let far = (-half_b + sqrt_d) / a;
    if ray.is_valid_t(far) {
        return Some(far);
    }

    None
}
