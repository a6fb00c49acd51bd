//! # CIDR Parsing
//!
//! Turns user input into [`AddressBlock`]s.
//!
//! Supported formats:
//! * **Prefix length**: `192.168.1.0/24`.
//! * **Netmask**: `192.168.1.0/255.255.255.0`, or the hostmask `192.168.1.0/0.0.0.255`.
//! * **Bare address**: `192.168.1.7`, read as a `/32`.
//!
//! Octets must be plain decimal numbers in `0-255` without sign or leading zeros.

use std::net::Ipv4Addr;

use crate::error::ParseError;
use crate::network::block::{AddressBlock, MAX_PREFIX};

/// Parses a CIDR string. With `strict`, host bits past the prefix are an error instead of
/// being cleared.
pub fn parse(s: &str, strict: bool) -> Result<AddressBlock, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Format(s.to_string()));
    }

    let (addr_str, prefix_str) = match s.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (s, None),
    };

    let addr = parse_address(addr_str)?;
    let prefix = match prefix_str {
        Some(p) => parse_prefix(p)?,
        None => MAX_PREFIX,
    };

    if strict {
        AddressBlock::new_strict(addr, prefix)
    } else {
        AddressBlock::new(addr, prefix)
    }
}

/// Reports whether `child` lies inside `parent`, both given as CIDR strings.
pub fn is_subnet_of(parent: &str, child: &str) -> Result<bool, ParseError> {
    let parent = parse(parent, false)?;
    let child = parse(child, false)?;
    Ok(parent.contains(&child))
}

/// Parses a dotted-quad address.
pub fn parse_address(s: &str) -> Result<Ipv4Addr, ParseError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(ParseError::OctetCount {
            input: s.to_string(),
            found: parts.len(),
        });
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        *slot = parse_octet(part)?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Parses one octet.
///
/// `u8::from_str` alone would accept `+5`, so digits are checked first.
fn parse_octet(s: &str) -> Result<u8, ParseError> {
    let invalid = || ParseError::Octet(s.to_string());

    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(invalid());
    }
    s.parse::<u8>().map_err(|_| invalid())
}

/// Parses the part after the slash: a decimal length or a dotted netmask.
fn parse_prefix(s: &str) -> Result<u8, ParseError> {
    if s.contains('.') {
        return parse_netmask(s);
    }

    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Prefix(s.to_string()));
    }
    let prefix = s
        .parse::<u32>()
        .map_err(|_| ParseError::Prefix(s.to_string()))?;
    if prefix > u32::from(MAX_PREFIX) {
        return Err(ParseError::PrefixOutOfRange(prefix));
    }
    Ok(prefix as u8)
}

/// A dotted mask is either a netmask (ones from the top) or a hostmask (ones from the
/// bottom, as in `0.0.0.255`). Netmask reading wins when both fit.
fn parse_netmask(s: &str) -> Result<u8, ParseError> {
    let mask = u32::from(parse_address(s).map_err(|_| ParseError::Prefix(s.to_string()))?);
    contiguous_prefix(mask)
        .or_else(|| contiguous_prefix(!mask))
        .ok_or_else(|| ParseError::Prefix(s.to_string()))
}

fn contiguous_prefix(mask: u32) -> Option<u8> {
    let ones = mask.leading_ones();
    match mask.checked_shl(ones).unwrap_or(0) {
        0 => u8::try_from(ones).ok(),
        _ => None,
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
