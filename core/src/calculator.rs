//! # Subnet Calculator Service
//!
//! The entry point for callers that hold raw user input. It parses CIDR text according to
//! the configured strictness and delegates to the splitter and the planner.

use subnetr_common::error::SubnetResult;
use subnetr_common::network::block::AddressBlock;
use subnetr_common::network::cidr;
use subnetr_common::network::demand::Demand;
use tracing::debug;

use crate::report::{BlockInfo, PlanReport, SplitReport};

#[derive(Debug, Clone, Copy, Default)]
pub struct SubnetCalculator {
    strict: bool,
}

impl SubnetCalculator {
    /// With `strict`, CIDR input with host bits set is rejected instead of normalized.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn parse(&self, cidr: &str) -> SubnetResult<AddressBlock> {
        Ok(cidr::parse(cidr, self.strict)?)
    }

    /// Describes a single block.
    pub fn info(&self, cidr: &str) -> SubnetResult<BlockInfo> {
        let block = self.parse(cidr)?;
        Ok(BlockInfo::from(&block))
    }

    /// Splits `child` out of `parent`.
    pub fn split(&self, parent: &str, child: &str) -> SubnetResult<SplitReport> {
        let parent = self.parse(parent)?;
        let child = self.parse(child)?;
        debug!(%parent, %child, "splitting");
        SplitReport::new(&parent, &child)
    }

    /// Plans one subnet per demand inside `parent`.
    pub fn plan(&self, parent: &str, demands: Vec<Demand>) -> SubnetResult<PlanReport> {
        let parent = self.parse(parent)?;
        debug!(%parent, demands = demands.len(), "planning");
        PlanReport::new(&parent, demands)
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
