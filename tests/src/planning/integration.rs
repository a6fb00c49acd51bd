#![cfg(test)]
use pretty_assertions::assert_eq;
use serde_json::Value;
use subnetr_common::error::SubnetError;
use subnetr_common::network::demand::{Demand, parse_demands};
use subnetr_core::calculator::SubnetCalculator;
use subnetr_core::export;

use crate::util::{assert_exact_cover, block, cidrs};

#[test]
fn plan_two_equal_demands() {
    let demands = vec![Demand::new("A", 50), Demand::new("B", 50)];
    let report = SubnetCalculator::default()
        .plan("192.168.0.0/24", demands)
        .unwrap();

    let allocated: Vec<_> = report.allocated_subnets.iter().map(|a| a.cidr).collect();
    assert_eq!(cidrs(&allocated), vec!["192.168.0.0/26", "192.168.0.64/26"]);
    assert!(report
        .allocated_subnets
        .iter()
        .all(|a| a.cidr.prefix_len() == 26 && a.available_hosts == 62));
    assert_eq!(cidrs(&report.remaining_subnets), vec!["192.168.0.128/25"]);

    let mut pieces = allocated.clone();
    pieces.extend(report.remaining_subnets.iter().copied());
    assert_exact_cover(&block("192.168.0.0/24"), &pieces);
}

#[test]
fn plan_demand_too_large_for_parent() {
    let result = SubnetCalculator::default().plan("192.168.0.0/30", vec![Demand::new("X", 100)]);
    assert_eq!(
        result,
        Err(SubnetError::InsufficientSpace {
            name: "X".to_string(),
            hosts: 100
        })
    );
}

#[test]
fn plan_failure_discards_earlier_allocations() {
    let demands = parse_demands("first:60, second:60, third:60, fourth:60, fifth:60").unwrap();
    let result = SubnetCalculator::default().plan("10.0.0.0/24", demands);
    assert!(matches!(
        result,
        Err(SubnetError::InsufficientSpace { ref name, hosts: 60 }) if name == "fifth"
    ));
}

#[test]
fn plan_mixed_sizes_from_comma_list() {
    let demands = parse_demands("office:200, servers:50, rnd:100, test:30").unwrap();
    let report = SubnetCalculator::default()
        .plan("192.168.0.0/16", demands)
        .unwrap();

    let names: Vec<&str> = report
        .allocated_subnets
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["office", "servers", "rnd", "test"]);
    assert!(report
        .allocated_subnets
        .iter()
        .all(|a| a.available_hosts >= u64::from(a.required_hosts)));
    assert_eq!(report.remaining_subnets.len(), 8);
}

#[test]
fn plan_report_json_shape() {
    let demands = vec![Demand::new("A", 50), Demand::new("B", 50)];
    let report = SubnetCalculator::default()
        .plan("192.168.0.0/24", demands)
        .unwrap();
    let value: Value = serde_json::from_str(&export::to_json(&report).unwrap()).unwrap();

    assert_eq!(value["parent_cidr"], "192.168.0.0/24");
    assert_eq!(value["required_subnets"][0]["name"], "A");
    assert_eq!(value["required_subnets"][0]["hosts"], 50);
    assert_eq!(value["allocated_subnets"][1]["cidr"], "192.168.0.64/26");
    assert_eq!(value["allocated_subnets"][1]["required_hosts"], 50);
    assert_eq!(value["allocated_subnets"][1]["available_hosts"], 62);
    assert_eq!(value["allocated_subnets"][1]["info"]["netmask"], "255.255.255.192");
    assert_eq!(value["remaining_subnets"][0], "192.168.0.128/25");
    assert_eq!(value["remaining_subnets_info"][0]["usable_addresses"], 126);
}
