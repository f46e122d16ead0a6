//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod formatters;
pub mod output;

/// vskill - Explore how Verified Skills transfer across roles and industries
#[derive(Parser, Debug)]
#[command(name = "vskill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors, no Unicode)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output; command output and errors are still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/vskill/config.toml, then ./.vskill.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load the skill catalog from a YAML or JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format requested on the command line, if any.
    ///
    /// Priority order:
    /// 1. `--plain` → Plain format
    /// 2. `--output-format` → Explicit format
    /// 3. `--machine` → JSON format (shorthand)
    ///
    /// `None` leaves the choice to configuration.
    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.plain {
            return Some(OutputFormat::Plain);
        }
        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }
        if self.machine {
            return Some(OutputFormat::Json);
        }
        None
    }

    /// Whether logs should be emitted as JSON.
    #[must_use]
    pub fn json_logs(&self) -> bool {
        self.output_format().is_some_and(|fmt| fmt.is_json())
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every skill in the catalog
    List(commands::list::ListArgs),

    /// Show one skill with its roles, contexts and industries
    Show(commands::show::ShowArgs),

    /// Resolve a skill's position in the 4-level hierarchy
    Hierarchy(commands::hierarchy::HierarchyArgs),

    /// Compare a skill between a source and a target role
    Transfer(commands::transfer::TransferArgs),

    /// Compare a skill across industries
    Context(commands::context::ContextArgs),

    /// Show the industry annotation table
    Industries(commands::industries::IndustriesArgs),

    /// Explain the expression layers and the skill naming formula
    Anatomy(commands::anatomy::AnatomyArgs),

    /// Validate the active catalog or a catalog file
    Validate(commands::validate::ValidateArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}
