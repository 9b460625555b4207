//! `tripmap` - CLI for the location-history map explorer
//!
//! This binary provides the command-line interface for serving the web map,
//! rendering one-shot artifacts, and inspecting the history and configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use tripmap::cli::{Cli, Command, ConfigCommand, DatesCommand, RenderCommand};
use tripmap::filter::DateFilter;
use tripmap::pipeline::{self, RenderOutcome};
use tripmap::{init_logging, options, server, Config, TimelineDocument};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config =
        Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    // Execute the command
    match cli.command {
        Command::Serve => {
            server::run(&config).context("web server failed")?;
            Ok(())
        }
        Command::Render(render_cmd) => handle_render(&config, &render_cmd),
        Command::Dates(dates_cmd) => handle_dates(&config, &dates_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> anyhow::Result<()> {
    let criteria = DateFilter::new(cmd.year, cmd.month, cmd.day);
    let artifact_path = cmd
        .output
        .clone()
        .unwrap_or_else(|| config.artifact_path());

    let (_, outcome) = pipeline::run(&config.history_path(), &artifact_path, &criteria)
        .context("render failed")?;

    match outcome {
        RenderOutcome::Rendered { marker_count } => {
            println!(
                "Rendered {marker_count} markers to {}",
                artifact_path.display()
            );
        }
        RenderOutcome::NoData => {
            println!("No locations match the given filter; nothing rendered.");
        }
    }
    Ok(())
}

fn handle_dates(config: &Config, cmd: &DatesCommand) -> anyhow::Result<()> {
    let document = TimelineDocument::load(config.history_path())
        .context("failed to load location history")?;
    let samples = document.extract_samples();
    let date_options = options::date_options(&samples).context("failed to index dates")?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&date_options)?);
    } else if date_options.is_empty() {
        println!("No dated locations in the history.");
    } else {
        println!("Years:");
        for year in &date_options.years {
            println!("  {year}");
        }
        println!("Months:");
        for (year, month) in &date_options.months {
            println!("  {year}-{month}");
        }
        println!("Days:");
        for (year, month, day) in &date_options.days {
            println!("  {year}-{month}-{day}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[source]");
                println!("  History path:   {}", config.history_path().display());
                println!();
                println!("[map]");
                println!("  Artifact path:  {}", config.artifact_path().display());
                println!();
                println!("[server]");
                println!("  Host:           {}", config.server.host);
                println!("  Port:           {}", config.server.port);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
