use colored::*;
use subnetr_common::config::Config;
use subnetr_core::calculator::SubnetCalculator;
use subnetr_core::report::SplitReport;

use crate::commands;
use crate::sprint;
use crate::terminal::{colors, format, print};

pub fn split(parent: &str, child: &str, cfg: &Config) -> anyhow::Result<()> {
    let report: SplitReport = match SubnetCalculator::new(cfg.strict).split(parent, child) {
        Ok(report) => report,
        Err(err) => return commands::fail(err, cfg),
    };

    if !cfg.renders_to_terminal() {
        return commands::emit(&report, cfg);
    }

    if cfg.quiet > 1 {
        for block in &report.remaining_subnets {
            print::print(&block.to_string());
        }
        return Ok(());
    }

    sprint!(&format::aligned("Parent", format::cidr(&report.parent)));
    sprint!(&format::aligned("Split", format::cidr(&report.split)));

    print::header("split block", cfg);
    print::lines(&format::branches(&format::block_details(&report.split_info)));

    let count: usize = report.remaining_subnets.len();
    print::header(&format!("remaining blocks ({count})"), cfg);
    for (idx, info) in report.remaining_subnets_info.iter().enumerate() {
        print::lines(&format::tree(idx, &info.cidr.to_string(), &format::block_details(info)));
        if idx + 1 != count {
            sprint!();
        }
    }

    split_ends(count, cfg);
    Ok(())
}

fn split_ends(count: usize, cfg: &Config) {
    let remaining: ColoredString = format!("{count} blocks").bold().green();
    let output: ColoredString =
        format!("Split complete: {remaining} remaining").color(colors::TEXT_DEFAULT);

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&output.to_string());
    } else {
        print::print_status(&output.to_string());
    }
    print::end_of_program(cfg);
}
