//! Bounding volume hierarchy for accelerating ray queries over a scene of surfaces.
//!
//! Surfaces are split at the median along the widest axis of their bounds until a range fits
//! in a leaf. Queries return either the closest hit or stop at the first one found.

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

pub mod axis;
pub use axis::*;

pub mod ray;
pub use ray::*;

pub mod record;
pub use record::*;

pub mod aabb;
pub use aabb::*;

pub mod intersections;
pub use intersections::*;

pub mod surface;
pub use surface::*;

pub mod triangle;
pub use triangle::*;

pub mod sphere;
pub use sphere::*;

pub mod cuboid;
pub use cuboid::*;

pub mod bvh;
pub use bvh::*;

pub mod bvh_strategy;
pub use bvh_strategy::*;

pub mod bvh_implementations;
pub use bvh_implementations::*;
