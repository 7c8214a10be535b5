//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for an interactive session.
#[derive(Debug, Clone, Default, Args)]
pub struct RunCommand {
    /// Start with an empty roster instead of the demo teams
    #[arg(long)]
    pub empty: bool,

    /// Override the inactivity timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub idle_timeout_ms: Option<u64>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
