use colored::*;
use subnetr_common::config::Config;
use subnetr_common::network::demand::{self, Demand};
use subnetr_core::calculator::SubnetCalculator;
use subnetr_core::report::PlanReport;

use crate::commands;
use crate::sprint;
use crate::terminal::{colors, format, print};

pub fn plan(parent: &str, raw_demands: &[String], cfg: &Config) -> anyhow::Result<()> {
    let mut demands: Vec<Demand> = Vec::new();
    for raw in raw_demands {
        match demand::parse_demands(raw) {
            Ok(parsed) => demands.extend(parsed),
            Err(err) => return commands::fail(err.into(), cfg),
        }
    }

    let report: PlanReport = match SubnetCalculator::new(cfg.strict).plan(parent, demands) {
        Ok(report) => report,
        Err(err) => return commands::fail(err, cfg),
    };

    if !cfg.renders_to_terminal() {
        return commands::emit(&report, cfg);
    }

    if cfg.quiet > 1 {
        for allocated in &report.allocated_subnets {
            print::print(&format!("{} {}", allocated.name, allocated.cidr));
        }
        return Ok(());
    }

    sprint!(&format::aligned("Parent", format::cidr(&report.parent_cidr)));

    print::header("allocated subnets", cfg);
    let allocated_count: usize = report.allocated_subnets.len();
    for (idx, allocated) in report.allocated_subnets.iter().enumerate() {
        print::lines(&format::tree(idx, &allocated.name, &format::allocation_details(allocated)));
        if idx + 1 != allocated_count {
            sprint!();
        }
    }

    let free_count: usize = report.remaining_subnets.len();
    print::header(&format!("free blocks ({free_count})"), cfg);
    for (idx, info) in report.remaining_subnets_info.iter().enumerate() {
        let usable: ColoredString = format!("{} usable", info.usable_addresses).color(colors::COUNT);
        sprint!(&format::aligned(&format!("#{idx}"), format!("{} {usable}", format::cidr(&info.cidr))));
    }

    plan_ends(allocated_count, free_count, cfg);
    Ok(())
}

fn plan_ends(allocated: usize, free: usize, cfg: &Config) {
    let allocated: ColoredString = format!("{allocated} subnets").bold().green();
    let free: ColoredString = format!("{free} free blocks").bold().yellow();
    let output: ColoredString =
        format!("Plan complete: {allocated} allocated, {free} left").color(colors::TEXT_DEFAULT);

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&output.to_string());
    } else {
        print::print_status(&output.to_string());
    }
    print::end_of_program(cfg);
}
