mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, info, plan, split};
use subnetr_common::config::Config;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.config();
    print::banner(&cfg);

    let result = match &commands.command {
        Commands::Info { cidr } => {
            print::header("block details", &cfg);
            info::info(cidr, &cfg)
        }
        Commands::Split { parent, child } => {
            print::header("splitting block", &cfg);
            split::split(parent, child, &cfg)
        }
        Commands::Plan { parent, demands } => {
            print::header("planning subnets", &cfg);
            plan::plan(parent, demands, &cfg)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
