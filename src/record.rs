/// Result of a ray hitting a surface: the ray parameter plus the shading data at the hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    /// Ray parameter of the hit
    pub t: f32,
    /// World space hit position
    pub location: glam::Vec3A,
    /// Unit surface normal at the hit
    pub normal: glam::Vec3A,
    pub tex_coords: glam::Vec2,
}

impl Default for IntersectionRecord {
    fn default() -> Self {
        Self {
            t: f32::INFINITY,
            location: glam::Vec3A::ZERO,
            normal: glam::Vec3A::ZERO,
            tex_coords: glam::Vec2::ZERO,
        }
    }
}

impl IntersectionRecord {
    #[inline]
    pub fn new(
        t: f32,
        location: glam::Vec3A,
        normal: glam::Vec3A,
        tex_coords: glam::Vec2,
    ) -> Self {
        Self {
            t,
            location,
            normal,
            tex_coords,
        }
    }

    /// Copy every field of `other` into this record
    #[inline]
    pub fn set(&mut self, other: &IntersectionRecord) {
        *self = *other;
    }
}
