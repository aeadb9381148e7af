use crate::error::*;

/// Default maximum number of keys per node
pub const DEFAULT_ARITY: usize = 16;

/// How host bits in a prefix definition are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixMode {
    /// Host bits are masked off, `10.1.2.3/8` becomes `10.0.0.0/8`.
    Lenient,
    /// Host bits must be zero, `10.1.2.3/8` is rejected.
    Strict,
}

impl Default for PrefixMode {
    fn default() -> Self {
        PrefixMode::Lenient
    }
}

impl PrefixMode {
    #[inline(always)]
    pub fn is_strict(&self) -> bool {
        *self == PrefixMode::Strict
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    arity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            arity: DEFAULT_ARITY,
        }
    }
}

impl TreeConfig {
    pub fn new(arity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(PrefixTreeError::InvalidArity(arity));
        }
        Ok(TreeConfig { arity })
    }

    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of keys left in a node after it splits, the last of which
    /// is promoted into the parent.
    #[inline(always)]
    pub fn split_pos(&self) -> usize {
        (self.arity + 1) / 2
    }
}
