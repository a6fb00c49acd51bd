//! # Subnet Planner
//!
//! Allocates one block per [`Demand`] out of a parent block.
//!
//! Demands are served largest first. Each one takes the first free block (lowest address)
//! that is big enough, carves its block from the start of it, and puts the remainder back
//! into the free pool through the [exclusion splitter](crate::splitter). Planning is
//! all-or-nothing: if any demand cannot be placed the whole plan fails and no partial
//! allocation is returned.

use std::collections::BTreeSet;

use subnetr_common::error::{SubnetError, SubnetResult};
use subnetr_common::network::block::{AddressBlock, MAX_PREFIX};
use subnetr_common::network::demand::Demand;
use tracing::debug;

use crate::splitter;

/// One demand together with the block assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub name: String,
    pub block: AddressBlock,
    pub required_hosts: u32,
}

impl Allocation {
    pub fn available_hosts(&self) -> u64 {
        self.block.usable_hosts()
    }
}

/// A successful plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// In the order the demands were given.
    pub allocations: Vec<Allocation>,
    /// Space left over, ascending by address.
    pub free_blocks: Vec<AddressBlock>,
}

/// Smallest prefix whose block holds `hosts` plus network and broadcast addresses.
///
/// Returns `None` when even a `/0` is too small.
pub fn required_prefix(hosts: u32) -> Option<u8> {
    let addresses = u64::from(hosts) + 2;
    let bits = u64::BITS - (addresses - 1).leading_zeros();
    u8::try_from(bits)
        .ok()
        .and_then(|bits| MAX_PREFIX.checked_sub(bits))
}

/// Plans one block per demand inside `parent`.
pub fn plan(parent: &AddressBlock, demands: &[Demand]) -> SubnetResult<Plan> {
    // (input index, prefix); a stable sort on prefix keeps input order among equal sizes
    let mut order: Vec<(usize, u8)> = Vec::with_capacity(demands.len());
    for (idx, demand) in demands.iter().enumerate() {
        let prefix = required_prefix(demand.hosts)
            .filter(|prefix| *prefix >= parent.prefix_len())
            .ok_or_else(|| insufficient(demand))?;
        order.push((idx, prefix));
    }
    order.sort_by_key(|&(_, prefix)| prefix);

    let mut free: BTreeSet<AddressBlock> = BTreeSet::from([*parent]);
    let mut assigned: Vec<Option<AddressBlock>> = vec![None; demands.len()];

    for (idx, prefix) in order {
        let demand = &demands[idx];
        let block = allocate(&mut free, prefix).ok_or_else(|| insufficient(demand))?;
        debug!(name = %demand.name, hosts = demand.hosts, %block, "allocated");
        assigned[idx] = Some(block);
    }

    let allocations = demands
        .iter()
        .zip(assigned)
        .filter_map(|(demand, block)| {
            block.map(|block| Allocation {
                name: demand.name.clone(),
                block,
                required_hosts: demand.hosts,
            })
        })
        .collect();

    Ok(Plan {
        allocations,
        free_blocks: free.into_iter().collect(),
    })
}

/// Carves a `/prefix` block from the first free block large enough to hold it.
fn allocate(free: &mut BTreeSet<AddressBlock>, prefix: u8) -> Option<AddressBlock> {
    let host = free
        .iter()
        .find(|candidate| candidate.prefix_len() <= prefix)
        .copied()?;

    // host.start is aligned for any prefix at least as long as its own
    let block = AddressBlock::new(host.network(), prefix).ok()?;
    free.remove(&host);

    // block lies inside host by construction
    let remainder = splitter::split(&host, &block).ok()?;
    free.extend(remainder);
    Some(block)
}

fn insufficient(demand: &Demand) -> SubnetError {
    SubnetError::InsufficientSpace {
        name: demand.name.clone(),
        hosts: demand.hosts,
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
