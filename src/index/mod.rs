pub mod tree;

use crate::data::Range;
use crate::error::*;

/// Operations of a longest-match index over address ranges
pub trait PrefixOps<T> {
    /// Stores `range` with its payload.
    ///
    /// If an equal range is already stored its payload is replaced and the
    /// previous one returned. Stored ranges must be nested or disjoint, as
    /// prefixes always are. A range that partially overlaps another is
    /// accepted but may be missed by later lookups.
    fn insert(&mut self, range: Range<T>) -> Result<Option<T>>;
    /// Returns the payload of a stored range that covers `point`
    ///
    /// `point` is either a single address or a wider query range.
    fn search<U>(&self, point: &Range<U>) -> Result<Option<&T>>;
}
