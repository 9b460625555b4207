//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Only include samples from this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Only include samples from this month of the year (1-12)
    #[arg(long)]
    pub month: Option<u32>,

    /// Only include samples from this day of the month (1-31)
    #[arg(long)]
    pub day: Option<u32>,

    /// Write the map here instead of the configured artifact path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Dates command arguments.
#[derive(Debug, Args)]
pub struct DatesCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_debug() {
        let cmd = RenderCommand {
            year: Some(2022),
            month: None,
            day: None,
            output: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("year"));
        assert!(debug_str.contains("2022"));
    }

    #[test]
    fn test_dates_command_debug() {
        let cmd = DatesCommand { json: true };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
