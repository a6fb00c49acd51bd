#![cfg(test)]
//! Property tests for the exclusion splitter.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;
use proptest::prelude::*;
use subnetr_common::error::SubnetError;
use subnetr_common::network::block::AddressBlock;
use subnetr_core::splitter;

use crate::util::{assert_exact_cover, is_aligned};

/// A parent block and a child block somewhere inside it.
fn nested_blocks() -> impl Strategy<Value = (AddressBlock, AddressBlock)> {
    (any::<u32>(), 0u8..=32)
        .prop_flat_map(|(addr, parent_prefix)| {
            (Just(addr), Just(parent_prefix), parent_prefix..=32, any::<u32>())
        })
        .prop_map(|(addr, parent_prefix, child_prefix, offset)| {
            let parent = AddressBlock::new(Ipv4Addr::from(addr), parent_prefix).unwrap();
            let host_bits = parent.end() - parent.start();
            let child_addr = parent.start() | (offset & host_bits);
            let child = AddressBlock::new(Ipv4Addr::from(child_addr), child_prefix).unwrap();
            (parent, child)
        })
}

fn any_block() -> impl Strategy<Value = AddressBlock> {
    (any::<u32>(), 0u8..=32)
        .prop_map(|(addr, prefix)| AddressBlock::new(Ipv4Addr::from(addr), prefix).unwrap())
}

proptest! {
    #[test]
    fn remainder_and_child_cover_parent((parent, child) in nested_blocks()) {
        let mut pieces = splitter::split(&parent, &child).unwrap();
        pieces.push(child);
        assert_exact_cover(&parent, &pieces);
    }

    #[test]
    fn remainder_is_sorted_and_aligned((parent, child) in nested_blocks()) {
        let rest = splitter::split(&parent, &child).unwrap();
        prop_assert!(rest.iter().all(is_aligned));
        prop_assert!(rest.windows(2).all(|pair| pair[0].end() < pair[1].start()));
        prop_assert!(rest.iter().all(|b| parent.contains(b) && !b.contains(&child)));
    }

    #[test]
    fn remainder_length_is_bounded((parent, child) in nested_blocks()) {
        let rest = splitter::split(&parent, &child).unwrap();
        prop_assert_eq!(rest.len(), usize::from(child.prefix_len() - parent.prefix_len()));
        prop_assert!(rest.len() <= usize::from(32 - parent.prefix_len()));
    }

    #[test]
    fn split_is_deterministic((parent, child) in nested_blocks()) {
        prop_assert_eq!(splitter::split(&parent, &child), splitter::split(&parent, &child));
    }

    #[test]
    fn split_from_itself_is_empty(parent in any_block()) {
        prop_assert_eq!(splitter::split(&parent, &parent), Ok(Vec::new()));
    }

    #[test]
    fn outside_child_is_rejected(parent in any_block(), child in any_block()) {
        prop_assume!(!parent.contains(&child));
        prop_assert_eq!(
            splitter::split(&parent, &child),
            Err(SubnetError::NotASubnet { parent, child })
        );
    }

    #[test]
    fn derived_fields_match_pnet(addr in any::<u32>(), prefix in 0u8..=32) {
        let ip = Ipv4Addr::from(addr);
        let ours = AddressBlock::new(ip, prefix).unwrap();
        let theirs = Ipv4Network::new(ip, prefix).unwrap();

        prop_assert_eq!(ours.network(), theirs.network());
        prop_assert_eq!(ours.broadcast(), theirs.broadcast());
        prop_assert_eq!(ours.netmask(), theirs.mask());
        prop_assert_eq!(ours.prefix_len(), theirs.prefix());
        prop_assert!(theirs.contains(ours.host_range().start_addr));
        prop_assert!(theirs.contains(ours.host_range().end_addr));
    }
}
