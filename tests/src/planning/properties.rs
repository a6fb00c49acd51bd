#![cfg(test)]
//! Property tests for the greedy planner.

use std::net::Ipv4Addr;

use proptest::prelude::*;
use subnetr_common::error::SubnetError;
use subnetr_common::network::block::AddressBlock;
use subnetr_common::network::demand::Demand;
use subnetr_core::planner::{self, required_prefix};

use crate::util::{assert_exact_cover, is_aligned};

fn parent_block() -> impl Strategy<Value = AddressBlock> {
    (any::<u32>(), 8u8..=30)
        .prop_map(|(addr, prefix)| AddressBlock::new(Ipv4Addr::from(addr), prefix).unwrap())
}

fn demands() -> impl Strategy<Value = Vec<Demand>> {
    prop::collection::vec(0u32..5000, 0..8).prop_map(|hosts| {
        hosts
            .into_iter()
            .enumerate()
            .map(|(idx, hosts)| Demand::new(format!("net{idx}"), hosts))
            .collect()
    })
}

fn block_size(hosts: u32) -> u64 {
    required_prefix(hosts).map_or(u64::MAX, |prefix| 1u64 << (32 - prefix))
}

proptest! {
    #[test]
    fn successful_plans_tile_the_parent(parent in parent_block(), demands in demands()) {
        let Ok(plan) = planner::plan(&parent, &demands) else {
            return Ok(());
        };

        prop_assert_eq!(plan.allocations.len(), demands.len());
        for (allocation, demand) in plan.allocations.iter().zip(&demands) {
            prop_assert_eq!(&allocation.name, &demand.name);
            prop_assert!(allocation.available_hosts() >= u64::from(demand.hosts));
            prop_assert_eq!(Some(allocation.block.prefix_len()), required_prefix(demand.hosts));
            prop_assert!(is_aligned(&allocation.block));
        }

        prop_assert!(plan.free_blocks.windows(2).all(|pair| pair[0] < pair[1]));

        let mut pieces: Vec<AddressBlock> = plan.allocations.iter().map(|a| a.block).collect();
        pieces.extend(plan.free_blocks.iter().copied());
        assert_exact_cover(&parent, &pieces);
    }

    #[test]
    fn fitting_demands_always_succeed(parent in parent_block(), mut demands in demands()) {
        let mut total: u64 = 0;
        let fitting = demands
            .iter()
            .take_while(|d| {
                total = total.saturating_add(block_size(d.hosts));
                total <= parent.size()
            })
            .count();
        demands.truncate(fitting);

        let plan = planner::plan(&parent, &demands);
        prop_assert!(plan.is_ok(), "{:?} should fit in {}", demands, parent);
    }

    #[test]
    fn oversized_demand_always_fails(parent in parent_block(), extra in 1u32..1_000_000) {
        let hosts = u32::try_from(parent.usable_hosts()).unwrap().saturating_add(extra);
        let demands = vec![Demand::new("too-big", hosts)];

        let is_insufficient = matches!(
            planner::plan(&parent, &demands),
            Err(SubnetError::InsufficientSpace { .. })
        );
        prop_assert!(is_insufficient);
    }

    #[test]
    fn planning_is_deterministic(parent in parent_block(), demands in demands()) {
        prop_assert_eq!(planner::plan(&parent, &demands), planner::plan(&parent, &demands));
    }
}
