use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BvhError {
    /// The BVH was queried before `build` was called
    #[error("BVH queried before build")]
    NotBuilt,

    /// Leaves must hold at least one surface, otherwise subdivision never stops
    #[error("invalid leaf size {0}, leaves must hold at least one surface")]
    InvalidLeafSize(usize),
}
