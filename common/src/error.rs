//! Error types for subnet calculations

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::network::block::AddressBlock;

/// Reasons a CIDR block, an address range or a demand could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input is empty or not shaped like `a.b.c.d/n`.
    #[error("'{0}' is not in a.b.c.d/n notation")]
    Format(String),

    /// The address part does not have exactly four octets.
    #[error("'{input}' must have exactly 4 octets, found {found}")]
    OctetCount { input: String, found: usize },

    /// An octet is not a decimal number in 0-255.
    #[error("'{0}' is not a valid octet")]
    Octet(String),

    /// The prefix is neither a decimal length nor a contiguous netmask.
    #[error("'{0}' is not a valid prefix length")]
    Prefix(String),

    /// The prefix length is larger than 32.
    #[error("prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u32),

    /// Strict mode only: the address has bits set past the prefix.
    #[error("{addr}/{prefix} has host bits set")]
    HostBitsSet { addr: Ipv4Addr, prefix: u8 },

    /// A `(start, end)` pair that is not a power-of-two sized, aligned block.
    #[error("{start} - {end} is not an aligned CIDR block")]
    UnalignedRange { start: Ipv4Addr, end: Ipv4Addr },

    /// A planning demand not in `name:hosts` form.
    #[error("'{0}' is not a valid demand, expected name:hosts")]
    Demand(String),
}

/// Errors returned by the splitter and the planner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The child block does not lie inside the parent block.
    #[error("{child} is not a subnet of {parent}")]
    NotASubnet {
        parent: AddressBlock,
        child: AddressBlock,
    },

    /// No free block left in the plan is large enough for this demand.
    #[error("not enough free space to allocate a subnet for '{name}' ({hosts} hosts)")]
    InsufficientSpace { name: String, hosts: u32 },
}

/// Result type for subnet operations
pub type SubnetResult<T> = Result<T, SubnetError>;

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
