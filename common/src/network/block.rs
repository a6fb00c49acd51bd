//! # Address Block Model
//!
//! An [`AddressBlock`] is one IPv4 CIDR block: an aligned network address plus a prefix
//! length. Every descriptive field (masks, broadcast, usable hosts) is derived on demand.
//!
//! Construction is **non-strict**: host bits past the prefix are cleared, so `10.0.0.5/24`
//! becomes `10.0.0.0/24`. Use [`AddressBlock::new_strict`] or [`AddressBlock::parse_strict`]
//! to reject such input instead.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::network::cidr;
use crate::network::range::Ipv4Range;

pub const MAX_PREFIX: u8 = 32;

/// A CIDR-aligned IPv4 block.
///
/// Ordering is by network address first and prefix length second, so a larger block sorts
/// before the blocks it contains when they share a start address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct AddressBlock {
    start: u32,
    prefix: u8,
}

impl AddressBlock {
    /// Builds the block of length `prefix` that contains `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, ParseError> {
        if prefix > MAX_PREFIX {
            return Err(ParseError::PrefixOutOfRange(prefix.into()));
        }
        let start = u32::from(addr) & netmask_bits(prefix);
        Ok(Self { start, prefix })
    }

    /// Like [`AddressBlock::new`], but `addr` must already be the network address.
    pub fn new_strict(addr: Ipv4Addr, prefix: u8) -> Result<Self, ParseError> {
        let block = Self::new(addr, prefix)?;
        if block.start != u32::from(addr) {
            return Err(ParseError::HostBitsSet { addr, prefix });
        }
        Ok(block)
    }

    /// Builds a block from its inclusive integer bounds.
    ///
    /// The bounds must describe a power-of-two sized block whose start is aligned to its size.
    pub fn from_bounds(start: u32, end: u32) -> Result<Self, ParseError> {
        let span = end.wrapping_sub(start);
        let unaligned = ParseError::UnalignedRange {
            start: Ipv4Addr::from(start),
            end: Ipv4Addr::from(end),
        };

        // span + 1 must be a power of two (a full /0 wraps to zero)
        if end < start || span & span.wrapping_add(1) != 0 || start & span != 0 {
            return Err(unaligned);
        }

        Ok(Self {
            start,
            prefix: span.leading_zeros() as u8,
        })
    }

    /// Parses `a.b.c.d/n`, rejecting addresses with host bits set.
    pub fn parse_strict(s: &str) -> Result<Self, ParseError> {
        cidr::parse(s, true)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.start | !netmask_bits(self.prefix)
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses in the block, `2^(32 - prefix)`.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_PREFIX - self.prefix)
    }

    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start)
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end())
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(netmask_bits(self.prefix))
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!netmask_bits(self.prefix))
    }

    /// Addresses left once network and broadcast are reserved.
    ///
    /// `/31` and `/32` blocks have nothing to reserve and report their full size.
    pub fn usable_hosts(&self) -> u64 {
        let size = self.size();
        if size > 2 { size - 2 } else { size }
    }

    /// Inclusive range of usable host addresses.
    pub fn host_range(&self) -> Ipv4Range {
        let (start, end) = if self.size() > 2 {
            (self.start + 1, self.end() - 1)
        } else {
            (self.start, self.end())
        };
        Ipv4Range::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }

    /// True if every address of `other` lies inside this block.
    pub fn contains(&self, other: &AddressBlock) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    pub fn contains_addr(&self, addr: u32) -> bool {
        self.start <= addr && addr <= self.end()
    }

    /// Splits the block into its two buddy halves at `prefix + 1`.
    ///
    /// Returns `None` for a `/32`, which cannot be halved.
    pub fn halves(&self) -> Option<(AddressBlock, AddressBlock)> {
        if self.prefix >= MAX_PREFIX {
            return None;
        }
        let prefix = self.prefix + 1;
        let half_size = 1u32 << (MAX_PREFIX - prefix);
        let lower = Self {
            start: self.start,
            prefix,
        };
        let upper = Self {
            start: self.start + half_size,
            prefix,
        };
        Some((lower, upper))
    }
}

/// Leading `prefix` bits set.
fn netmask_bits(prefix: u8) -> u32 {
    if prefix == 0 {
        0
    } else {
        u32::MAX << (MAX_PREFIX - prefix)
    }
}

impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix)
    }
}

impl FromStr for AddressBlock {
    type Err = ParseError;

    /// Parses `a.b.c.d/n` (or `a.b.c.d/255.255.255.0`), normalizing host bits away.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        cidr::parse(s, false)
    }
}

impl From<AddressBlock> for String {
    fn from(block: AddressBlock) -> Self {
        block.to_string()
    }
}

impl TryFrom<String> for AddressBlock {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AddressBlock> for Ipv4Range {
    fn from(block: AddressBlock) -> Self {
        Ipv4Range::new(block.network(), block.broadcast())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
