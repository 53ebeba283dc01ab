pub mod median_bvh;
pub use median_bvh::*;

pub mod naive;
pub use naive::*;
