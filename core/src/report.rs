//! # Report Model
//!
//! Serializable results handed to printers and exporters. Field names are part of the
//! output contract: JSON consumers key off them, so renaming one is a breaking change.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use subnetr_common::error::{SubnetError, SubnetResult};
use subnetr_common::network::block::AddressBlock;
use subnetr_common::network::demand::Demand;

use crate::planner::{self, Allocation};
use crate::splitter;

/// Descriptive fields of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub network: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub cidr: AddressBlock,
    pub prefixlen: u8,
    pub num_addresses: u64,
    pub usable_addresses: u64,
    pub host_range_start: Ipv4Addr,
    pub host_range_end: Ipv4Addr,
}

impl From<&AddressBlock> for BlockInfo {
    fn from(block: &AddressBlock) -> Self {
        let hosts = block.host_range();
        Self {
            network: block.network(),
            netmask: block.netmask(),
            wildcard: block.wildcard(),
            broadcast: block.broadcast(),
            cidr: *block,
            prefixlen: block.prefix_len(),
            num_addresses: block.size(),
            usable_addresses: block.usable_hosts(),
            host_range_start: hosts.start_addr,
            host_range_end: hosts.end_addr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub parent: AddressBlock,
    pub split: AddressBlock,
    pub split_info: BlockInfo,
    pub remaining_subnets: Vec<AddressBlock>,
    pub remaining_subnets_info: Vec<BlockInfo>,
}

impl SplitReport {
    /// Splits `child` out of `parent` and describes every block involved.
    pub fn new(parent: &AddressBlock, child: &AddressBlock) -> SubnetResult<Self> {
        let remaining = splitter::split(parent, child)?;
        Ok(Self {
            parent: *parent,
            split: *child,
            split_info: BlockInfo::from(child),
            remaining_subnets_info: remaining.iter().map(BlockInfo::from).collect(),
            remaining_subnets: remaining,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedSubnet {
    pub name: String,
    pub cidr: AddressBlock,
    pub required_hosts: u32,
    pub available_hosts: u64,
    pub info: BlockInfo,
}

impl From<&Allocation> for AllocatedSubnet {
    fn from(allocation: &Allocation) -> Self {
        Self {
            name: allocation.name.clone(),
            cidr: allocation.block,
            required_hosts: allocation.required_hosts,
            available_hosts: allocation.available_hosts(),
            info: BlockInfo::from(&allocation.block),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub parent_cidr: AddressBlock,
    /// The demands exactly as given.
    pub required_subnets: Vec<Demand>,
    pub allocated_subnets: Vec<AllocatedSubnet>,
    pub remaining_subnets: Vec<AddressBlock>,
    pub remaining_subnets_info: Vec<BlockInfo>,
}

impl PlanReport {
    pub fn new(parent: &AddressBlock, demands: Vec<Demand>) -> SubnetResult<Self> {
        let plan = planner::plan(parent, &demands)?;
        Ok(Self {
            parent_cidr: *parent,
            required_subnets: demands,
            allocated_subnets: plan.allocations.iter().map(AllocatedSubnet::from).collect(),
            remaining_subnets_info: plan.free_blocks.iter().map(BlockInfo::from).collect(),
            remaining_subnets: plan.free_blocks,
        })
    }
}

/// Stands in for a report when the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&SubnetError> for ErrorReport {
    fn from(err: &SubnetError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Anything that can be flattened into a table of block descriptors.
pub trait BlockTable {
    fn rows(&self) -> Vec<&BlockInfo>;
}

impl BlockTable for BlockInfo {
    fn rows(&self) -> Vec<&BlockInfo> {
        vec![self]
    }
}

impl BlockTable for SplitReport {
    /// The split block first, then the remainder.
    fn rows(&self) -> Vec<&BlockInfo> {
        std::iter::once(&self.split_info)
            .chain(&self.remaining_subnets_info)
            .collect()
    }
}

impl BlockTable for PlanReport {
    /// Allocations in demand order, then the free blocks.
    fn rows(&self) -> Vec<&BlockInfo> {
        self.allocated_subnets
            .iter()
            .map(|allocated| &allocated.info)
            .chain(&self.remaining_subnets_info)
            .collect()
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
