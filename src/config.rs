use crate::BvhError;

/// Tunables for building a [`crate::Bvh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BvhConfig {
    leaf_size: usize,
}

impl Default for BvhConfig {
    fn default() -> Self {
        Self {
            leaf_size: Self::DEFAULT_LEAF_SIZE,
        }
    }
}

impl BvhConfig {
    /// Max surfaces tested directly by a leaf, unless configured otherwise
    pub const DEFAULT_LEAF_SIZE: usize = 10;

    pub fn new(leaf_size: usize) -> Result<Self, BvhError> {
        Self::default().with_leaf_size(leaf_size)
    }

    pub fn with_leaf_size(mut self, leaf_size: usize) -> Result<Self, BvhError> {
        if leaf_size == 0 {
            return Err(BvhError::InvalidLeafSize(leaf_size));
        }
        self.leaf_size = leaf_size;
        Ok(self)
    }

    /// Ranges with at most this many surfaces become leaves
    #[inline]
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn default_leaf_size() {
        assert_eq!(BvhConfig::default().leaf_size(), 10);
    }

    #[test]
    fn zero_leaf_size_is_rejected() {
        assert_eq!(BvhConfig::new(0), Err(BvhError::InvalidLeafSize(0)));
        assert_eq!(
            BvhConfig::default().with_leaf_size(0).unwrap_err().to_string(),
            "invalid leaf size 0, leaves must hold at least one surface"
        );
    }

    #[test]
    fn custom_leaf_size() {
        assert_eq!(BvhConfig::new(1).unwrap().leaf_size(), 1);
        assert_eq!(BvhConfig::new(32).unwrap().leaf_size(), 32);
    }
}
