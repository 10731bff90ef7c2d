//! Folio CLI
//!
//! Template lookup, portfolio seeding, content conversion, and template
//! migration against the Folio template API.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

mod cli;
mod commands;
mod config;
mod config_handlers;

use cli::{Args, Command};
use config::FolioConfig;

fn init_logging(config: &FolioConfig, verbose: bool) {
    let default_filter = if verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(config: &FolioConfig, command: Command) -> Result<Value> {
    match command {
        Command::Templates { action } => commands::templates(config, action).await,
        Command::Portfolio { action } => commands::portfolio(action),
        Command::Content { action } => commands::content(config, action).await,
        Command::Admin { action } => commands::admin(config, action).await,
        Command::Config { .. } => Ok(Value::Null),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        // Config commands must work even when the current file does not parse
        Command::Config { action } => {
            init_logging(&FolioConfig::default(), args.verbose);
            config_handlers::handle_config_command(args.config.as_deref(), action)?;
            Ok(())
        }
        command => {
            let config = FolioConfig::load(args.config.as_deref())?;
            init_logging(&config, args.verbose);
            tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

            let output = run(&config, command).await?;
            print_json(&output)
        }
    }
}
