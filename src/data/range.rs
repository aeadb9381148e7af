use super::Family;
use crate::config::PrefixMode;
use crate::error::*;
use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;

/// An inclusive address range with an attached payload
///
/// Ranges are ordered by ascending `start` and, on equal starts, by
/// descending `end` so that the broader range sorts first. Identity is
/// structural on the bounds, the payload takes no part in it.
#[derive(Debug, Clone)]
pub struct Range<T> {
    start: u128,
    end: u128,
    family: Family,
    payload: T,
}

impl<T> Range<T> {
    /// Creates a Range from a prefix definition such as `10.0.0.0/8`.
    ///
    /// Host bits are masked off, see [PrefixMode::Lenient].
    #[inline]
    pub fn new(definition: &str, family: Family, payload: T) -> Result<Self> {
        Self::with_mode(definition, family, PrefixMode::default(), payload)
    }

    pub fn with_mode(
        definition: &str,
        family: Family,
        mode: PrefixMode,
        payload: T,
    ) -> Result<Self> {
        let (start, end) = family.parse_prefix(definition, mode)?;
        Ok(Range {
            start,
            end,
            family,
            payload,
        })
    }

    /// Creates a Range from raw inclusive bounds
    ///
    /// Unlike prefixes, arbitrary bounds may overlap another range without
    /// either covering the other. A [PrefixTree](crate::PrefixTree) treats
    /// such ranges as disjoint, so lookups are only guaranteed to find a
    /// covering range when all stored ranges are nested or disjoint.
    pub fn from_bounds(start: u128, end: u128, family: Family, payload: T) -> Result<Self> {
        if start > end || end > family.max_address() {
            return Err(PrefixTreeError::InvalidRange(format!(
                "{}-{} is not a valid {} range",
                start, end, family
            )));
        }
        Ok(Range {
            start,
            end,
            family,
            payload,
        })
    }

    /// Creates a single host Range for the given address
    #[inline]
    pub fn from_ip(addr: IpAddr, payload: T) -> Self {
        let ordinal = match addr {
            IpAddr::V4(v4) => u128::from(u32::from(v4)),
            IpAddr::V6(v6) => u128::from(v6),
        };
        Range {
            start: ordinal,
            end: ordinal,
            family: Family::of(&addr),
            payload,
        }
    }

    #[inline(always)]
    pub fn start(&self) -> u128 {
        self.start
    }
    #[inline(always)]
    pub fn end(&self) -> u128 {
        self.end
    }
    #[inline(always)]
    pub fn family(&self) -> Family {
        self.family
    }
    #[inline(always)]
    pub fn payload(&self) -> &T {
        &self.payload
    }
    #[inline(always)]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }
    #[inline]
    pub fn into_payload(self) -> T {
        self.payload
    }
    /// Returns true if the range spans a single address
    #[inline]
    pub fn is_host(&self) -> bool {
        self.start == self.end
    }

    /// Orders `self` against `other`, see the type level docs
    pub fn compare<U>(&self, other: &Range<U>) -> Result<Ordering> {
        self.check_family(other)?;
        Ok(self.order(other))
    }

    /// Checks whether `self` fully contains `other`, bounds inclusive
    pub fn covers<U>(&self, other: &Range<U>) -> Result<bool> {
        self.check_family(other)?;
        Ok(self.encloses(other))
    }

    #[inline]
    fn check_family<U>(&self, other: &Range<U>) -> Result<()> {
        if self.family != other.family {
            return Err(PrefixTreeError::FamilyMismatch {
                expected: self.family,
                found: other.family,
            });
        }
        Ok(())
    }

    /// Unchecked ordering, callers must have verified the family.
    #[inline]
    pub(crate) fn order<U>(&self, other: &Range<U>) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| other.end.cmp(&self.end))
    }

    /// Unchecked covers
    #[inline]
    pub(crate) fn encloses<U>(&self, other: &Range<U>) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    #[inline]
    pub(crate) fn same_bounds<U>(&self, other: &Range<U>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Range<()> {
    /// A single host query point, `ordinal` being the integer form of an address
    pub fn address(ordinal: u128, family: Family) -> Result<Self> {
        Self::from_bounds(ordinal, ordinal, family, ())
    }
}

impl From<IpAddr> for Range<()> {
    fn from(addr: IpAddr) -> Self {
        Range::from_ip(addr, ())
    }
}

impl<T, U> PartialEq<Range<U>> for Range<T> {
    fn eq(&self, other: &Range<U>) -> bool {
        self.family == other.family && self.same_bounds(other)
    }
}

impl<T> Eq for Range<T> {}

impl<T> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
