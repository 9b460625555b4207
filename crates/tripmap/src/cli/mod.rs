//! Command-line interface for tripmap.
//!
//! This module provides the CLI structure and command definitions for the
//! `tripmap` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, DatesCommand, RenderCommand};

/// tripmap - Explore your location history on a map
///
/// Reads a location-history export, filters position samples by calendar
/// date, and renders them as weekday-colored markers on a web map.
#[derive(Debug, Parser)]
#[command(name = "tripmap")]
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

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web interface
    Serve,

    /// Render the map once and exit
    Render(RenderCommand),

    /// List the dates present in the location history
    Dates(DatesCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "tripmap");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["tripmap", "-q", "serve"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli::try_parse_from(["tripmap", "serve"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli::try_parse_from(["tripmap", "-v", "serve"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli::try_parse_from(["tripmap", "-vv", "serve"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["tripmap", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_render_with_filters() {
        let cli = Cli::try_parse_from([
            "tripmap", "render", "--year", "2022", "--day", "5", "-o", "out.html",
        ])
        .unwrap();
        match cli.command {
            Command::Render(cmd) => {
                assert_eq!(cmd.year, Some(2022));
                assert_eq!(cmd.month, None);
                assert_eq!(cmd.day, Some(5));
                assert_eq!(cmd.output, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_dates_json() {
        let cli = Cli::try_parse_from(["tripmap", "dates", "--json"]).unwrap();
        match cli.command {
            Command::Dates(cmd) => assert!(cmd.json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["tripmap", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["tripmap", "-c", "/custom/config.toml", "serve"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
