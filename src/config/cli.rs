//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Inspect Valkey cluster routes and the directives they produce
#[derive(Parser, Debug, Clone)]
#[command(name = "valkey-route")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Routes to convert, e.g. `random`, `slot-id:replica:100`, `address:10.0.0.5:6379`
    #[arg(value_name = "ROUTE")]
    pub routes: Vec<String>,

    /// Routing config file (JSON) used to resolve --command
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Command name(s) to resolve through the routing config
    #[arg(short = 'c', long = "command", action = clap::ArgAction::Append)]
    pub commands: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Output format for directives
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Table,
}

impl CliArgs {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.routes.is_empty() && self.commands.is_empty() {
            return Err("Provide at least one ROUTE or --command".to_string());
        }

        if self.verbose && self.quiet {
            return Err("--verbose and --quiet are mutually exclusive".to_string());
        }

        Ok(())
    }
}
