//! # Exclusion Splitter
//!
//! Removes a child block from a parent block and returns what is left as the minimal
//! sequence of CIDR-aligned blocks.
//!
//! The parent is halved repeatedly. At each step the buddy half that does not hold the
//! child is final and becomes part of the result, while the other half is halved again
//! until it is the child itself. Each step therefore emits exactly one block, so a `/8`
//! minus a `/23` leaves 15 blocks.

use subnetr_common::error::{SubnetError, SubnetResult};
use subnetr_common::network::block::AddressBlock;
use tracing::{debug, trace};

/// Returns `parent` minus `child`, sorted by ascending start address.
///
/// Fails with [`SubnetError::NotASubnet`] when `child` is not inside `parent`. Splitting a
/// block from itself leaves nothing.
pub fn split(parent: &AddressBlock, child: &AddressBlock) -> SubnetResult<Vec<AddressBlock>> {
    if !parent.contains(child) {
        return Err(SubnetError::NotASubnet {
            parent: *parent,
            child: *child,
        });
    }
    if parent == child {
        return Ok(Vec::new());
    }

    // halves below the child come out in ascending order, halves above it in descending order
    let mut below: Vec<AddressBlock> = Vec::new();
    let mut above: Vec<AddressBlock> = Vec::new();
    let mut current: AddressBlock = *parent;

    while current.prefix_len() < child.prefix_len() {
        let Some((lower, upper)) = current.halves() else {
            break;
        };

        if upper.contains_addr(child.start()) {
            trace!(kept = %lower, descend = %upper, "halving");
            below.push(lower);
            current = upper;
        } else {
            trace!(kept = %upper, descend = %lower, "halving");
            above.push(upper);
            current = lower;
        }
    }

    below.extend(above.into_iter().rev());
    debug!(%parent, %child, remaining = below.len(), "split complete");
    Ok(below)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
