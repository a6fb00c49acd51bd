#![cfg(test)]
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::net::Ipv4Addr;
use subnetr_common::error::SubnetError;
use subnetr_core::calculator::SubnetCalculator;
use subnetr_core::export;
use subnetr_core::splitter;

use crate::util::{assert_exact_cover, block, cidrs};

#[test]
fn split_slash_8_around_slash_23() {
    let report = SubnetCalculator::default()
        .split("10.0.0.0/8", "10.21.60.0/23")
        .unwrap();

    assert_eq!(report.split_info.network, Ipv4Addr::new(10, 21, 60, 0));
    assert_eq!(report.split_info.broadcast, Ipv4Addr::new(10, 21, 61, 255));
    assert_eq!(report.split_info.usable_addresses, 510);
    assert_eq!(report.remaining_subnets.len(), 15);
    assert_eq!(report.remaining_subnets_info.len(), 15);

    let child = block("10.21.60.0/23");
    assert!(report.remaining_subnets.iter().all(|b| !b.contains(&child) && !child.contains(b)));

    let mut pieces = report.remaining_subnets.clone();
    pieces.push(child);
    assert_exact_cover(&block("10.0.0.0/8"), &pieces);
}

#[test]
fn split_block_from_itself() {
    let report = SubnetCalculator::default()
        .split("192.168.1.0/24", "192.168.1.0/24")
        .unwrap();
    assert!(report.remaining_subnets.is_empty());
    assert!(report.remaining_subnets_info.is_empty());
    assert_eq!(report.split_info.usable_addresses, 254);
}

#[test]
fn split_foreign_block_is_rejected() {
    let result = SubnetCalculator::default().split("192.168.0.0/24", "10.0.0.0/8");
    assert_eq!(
        result,
        Err(SubnetError::NotASubnet {
            parent: block("192.168.0.0/24"),
            child: block("10.0.0.0/8"),
        })
    );
}

#[test]
fn split_normalizes_host_bits() {
    let rest = splitter::split(&block("172.16.3.9/16"), &block("172.16.200.1/17")).unwrap();
    assert_eq!(cidrs(&rest), vec!["172.16.0.0/17"]);
}

#[test]
fn split_report_json_shape() {
    let report = SubnetCalculator::default()
        .split("192.168.0.0/24", "192.168.0.64/26")
        .unwrap();
    let value: Value = serde_json::from_str(&export::to_json(&report).unwrap()).unwrap();

    assert_eq!(value["parent"], "192.168.0.0/24");
    assert_eq!(value["split"], "192.168.0.64/26");
    assert_eq!(value["split_info"]["usable_addresses"], 62);
    assert_eq!(
        value["remaining_subnets"],
        serde_json::json!(["192.168.0.0/26", "192.168.0.128/25"])
    );
    assert_eq!(value["remaining_subnets_info"][1]["broadcast"], "192.168.0.255");
}

#[test]
fn split_csv_lists_child_then_remainder() {
    let report = SubnetCalculator::default()
        .split("192.168.0.0/24", "192.168.0.64/26")
        .unwrap();
    let csv = export::to_csv(&report, ',').unwrap();
    let cidr_column: Vec<&str> = csv
        .lines()
        .skip(1)
        .filter_map(|line| line.rsplit(',').next())
        .collect();
    assert_eq!(
        cidr_column,
        vec!["192.168.0.64/26", "192.168.0.0/26", "192.168.0.128/25"]
    );
}
