use subnetr_common::config::Config;
use subnetr_core::calculator::SubnetCalculator;
use subnetr_core::report::BlockInfo;

use crate::commands;
use crate::terminal::{format, print};

pub fn info(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    let info: BlockInfo = match SubnetCalculator::new(cfg.strict).info(cidr) {
        Ok(info) => info,
        Err(err) => return commands::fail(err, cfg),
    };

    if !cfg.renders_to_terminal() {
        return commands::emit(&info, cfg);
    }

    if cfg.quiet > 1 {
        print::print(&info.cidr.to_string());
        return Ok(());
    }

    print::lines(&format::tree(0, &info.cidr.to_string(), &format::block_details(&info)));
    print::end_of_program(cfg);
    Ok(())
}
