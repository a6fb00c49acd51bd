use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use subnetr_common::network::block::AddressBlock;
use subnetr_core::report::{AllocatedSubnet, BlockInfo};

/// Width the keys of aligned lines and tree details are padded to.
const KEY_WIDTH: usize = 10;

type Detail = (&'static str, ColoredString);

/// `address/prefix` with the two halves colored apart.
pub fn cidr(block: &AddressBlock) -> ColoredString {
    let address: ColoredString = block.network().to_string().color(colors::IPV4_ADDR);
    let prefix: ColoredString = block.prefix_len().to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn block_details(info: &BlockInfo) -> Vec<Detail> {
    vec![
        ("Network", info.network.to_string().color(colors::IPV4_ADDR)),
        ("Netmask", info.netmask.to_string().color(colors::MASK)),
        ("Wildcard", info.wildcard.to_string().color(colors::MASK)),
        ("Broadcast", info.broadcast.to_string().color(colors::IPV4_ADDR)),
        ("Prefix", format!("/{}", info.prefixlen).color(colors::IPV4_PREFIX)),
        ("Addresses", info.num_addresses.to_string().color(colors::COUNT)),
        ("Usable", info.usable_addresses.to_string().color(colors::COUNT)),
        host_range(info),
    ]
}

pub fn allocation_details(allocated: &AllocatedSubnet) -> Vec<Detail> {
    let info = &allocated.info;
    vec![
        ("CIDR", cidr(&allocated.cidr)),
        ("Requested", allocated.required_hosts.to_string().color(colors::COUNT)),
        ("Usable", allocated.available_hosts.to_string().color(colors::COUNT)),
        ("Netmask", info.netmask.to_string().color(colors::MASK)),
        ("Broadcast", info.broadcast.to_string().color(colors::IPV4_ADDR)),
        host_range(info),
    ]
}

fn host_range(info: &BlockInfo) -> Detail {
    let start: ColoredString = info.host_range_start.to_string().color(colors::IPV4_ADDR);
    let end: ColoredString = info.host_range_end.to_string().color(colors::IPV4_ADDR);
    let sep: ColoredString = "-".color(colors::SEPARATOR);
    ("Hosts", format!("{start} {sep} {end}").normal())
}

/// `> Key.......: value`
pub fn aligned(key: &str, value: impl Display) -> String {
    let dots: String = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    )
}

/// One branch per detail, the last one closing the tree.
pub fn branches(details: &[Detail]) -> Vec<String> {
    details
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
            let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
            format!(
                " {} {}{}{} {}",
                branch.color(colors::SEPARATOR),
                key.color(colors::TEXT_DEFAULT),
                dots.color(colors::SEPARATOR),
                ":".color(colors::SEPARATOR),
                value
            )
        })
        .collect()
}

/// `[idx] name` followed by its branches.
pub fn tree(idx: usize, name: &str, details: &[Detail]) -> Vec<String> {
    let head: String = format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    let mut lines: Vec<String> = vec![head];
    lines.extend(branches(details));
    lines
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
