//! Command-line interface for teamroster.
//!
//! This module provides the CLI structure for the `roster` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, RunCommand};

use crate::logging::Verbosity;

/// roster - Manage football teams from the terminal
///
/// Add, edit and delete teams in a single session and watch the squad
/// statistics update. Nothing is saved when the session ends.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start an interactive roster session
    Run(RunCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The requested command, with a bare invocation meaning `run`.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Run(RunCommand::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "roster");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(parse(&["roster", "-q"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["roster"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["roster", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["roster", "-vv"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_bare_invocation_runs() {
        let command = parse(&["roster"]).into_command();
        match command {
            Command::Run(run) => {
                assert!(!run.empty);
                assert_eq!(run.idle_timeout_ms, None);
            }
            Command::Config(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_run_flags() {
        let command = parse(&["roster", "run", "--empty", "--idle-timeout-ms", "5000"]).into_command();
        match command {
            Command::Run(run) => {
                assert!(run.empty);
                assert_eq!(run.idle_timeout_ms, Some(5000));
            }
            Command::Config(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let command = parse(&["roster", "config", "show", "--json"]).into_command();
        assert!(matches!(
            command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_parse_config_validate_file() {
        let command = parse(&["roster", "config", "validate", "-f", "/tmp/roster.toml"]).into_command();
        match command {
            Command::Config(ConfigCommand::Validate { file }) => {
                assert_eq!(file, Some(PathBuf::from("/tmp/roster.toml")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["roster", "-c", "/custom/config.toml", "config", "path"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["roster", "daemon"]).is_err());
    }
}
