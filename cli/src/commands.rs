pub mod info;
pub mod plan;
pub mod split;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use subnetr_common::config::{Config, OutputFormat};
use subnetr_common::error::SubnetError;
use subnetr_core::export;
use subnetr_core::report::{BlockTable, ErrorReport};
use tracing::info;

#[derive(Parser)]
#[command(name = "subnetr")]
#[command(version, about = "Split IPv4 blocks and plan subnet allocations.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to print only the results (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reject CIDR input with host bits set instead of normalizing it
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format: text, json or csv
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Field delimiter for csv output
    #[arg(short, long, global = true, default_value_t = ',')]
    pub delimiter: char,

    /// Write the export to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the details of one CIDR block
    #[command(alias = "i")]
    Info { cidr: String },
    /// Remove a child block from a parent block
    #[command(alias = "s")]
    Split { parent: String, child: String },
    /// Allocate named subnets (name:hosts) inside a parent block
    #[command(alias = "p")]
    Plan {
        parent: String,
        /// Demands such as office:200 lab:50, or comma separated
        #[arg(required = true)]
        demands: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
            strict: self.strict,
            format: self.format,
            delimiter: self.delimiter,
            output: self.output.clone(),
        }
    }
}

/// Renders `report` in the configured export format and writes it out.
pub fn emit<T>(report: &T, cfg: &Config) -> anyhow::Result<()>
where
    T: Serialize + BlockTable,
{
    let rendered: String = match cfg.format {
        OutputFormat::Json => export::to_json(report)?,
        OutputFormat::Csv => export::to_csv(report, cfg.delimiter)?,
        OutputFormat::Text => export::to_text(report),
    };
    write_out(&rendered, cfg)
}

/// Reports a failed calculation. JSON consumers get an `{"error": ...}` document.
pub fn fail(err: SubnetError, cfg: &Config) -> anyhow::Result<()> {
    if cfg.format == OutputFormat::Json {
        write_out(&export::to_json(&ErrorReport::from(&err))?, cfg)?;
    }
    Err(err.into())
}

fn write_out(rendered: &str, cfg: &Config) -> anyhow::Result<()> {
    match &cfg.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Results written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
