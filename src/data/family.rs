use crate::config::PrefixMode;
use crate::error::*;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family of a [Range](crate::Range)
///
/// Ranges of different families share the same ordinal space (`u128`)
/// but must never be compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    #[inline]
    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::Ipv4,
            IpAddr::V6(_) => Family::Ipv6,
        }
    }

    /// Address width in bits
    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            Family::Ipv4 => 32,
            Family::Ipv6 => 128,
        }
    }

    /// Largest ordinal an address of this family can take
    #[inline]
    pub fn max_address(self) -> u128 {
        self.host_mask(0)
    }

    #[inline]
    fn host_mask(self, prefix_len: u32) -> u128 {
        let host_bits = self.bits() - prefix_len;
        if host_bits >= 128 {
            u128::MAX
        } else {
            (1u128 << host_bits) - 1
        }
    }

    /// Normalizes a textual prefix into its inclusive `(start, end)` bounds.
    ///
    /// Accepts `addr/len`, `addr` (a single host) and, for IPv4 only,
    /// `addr/netmask` or `addr/hostmask`.
    pub(crate) fn parse_prefix(self, definition: &str, mode: PrefixMode) -> Result<(u128, u128)> {
        let invalid =
            || PrefixTreeError::InvalidRange(format!("{} is not a valid {} prefix", definition, self));

        let (addr_part, len_part) = match definition.find('/') {
            Some(pos) => (&definition[..pos], Some(&definition[pos + 1..])),
            None => (definition, None),
        };
        let addr = self.parse_address(addr_part.trim()).ok_or_else(invalid)?;
        let prefix_len = match len_part {
            Some(part) => self.parse_prefix_len(part.trim()).ok_or_else(invalid)?,
            None => self.bits(),
        };

        let host_mask = self.host_mask(prefix_len);
        let start = addr & !host_mask;
        if mode.is_strict() && start != addr {
            return Err(PrefixTreeError::InvalidRange(format!(
                "{} has host bits set",
                definition
            )));
        }
        Ok((start, start | host_mask))
    }

    fn parse_address(self, s: &str) -> Option<u128> {
        match self {
            Family::Ipv4 => s.parse::<Ipv4Addr>().ok().map(|a| u128::from(u32::from(a))),
            Family::Ipv6 => s.parse::<Ipv6Addr>().ok().map(u128::from),
        }
    }

    fn parse_prefix_len(self, s: &str) -> Option<u32> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s.parse::<u32>().ok().filter(|len| *len <= self.bits());
        }
        if self != Family::Ipv4 {
            return None;
        }
        // Netmask notation, else its inverse as a hostmask
        let mask = self.parse_address(s)?;
        self.netmask_len(mask)
            .or_else(|| self.netmask_len(!mask & self.max_address()))
    }

    /// Prefix length of `mask` if its set bits are contiguous from the top
    fn netmask_len(self, mask: u128) -> Option<u32> {
        let len = mask.count_ones();
        if !mask & self.max_address() == self.host_mask(len) {
            Some(len)
        } else {
            None
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => write!(f, "IPv4"),
            Family::Ipv6 => write!(f, "IPv6"),
        }
    }
}
