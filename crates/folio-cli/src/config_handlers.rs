//! Handler functions for `folio config` subcommands.

use std::path::PathBuf;

use folio_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

/// Dispatch a config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Show => cmd_config_show(config_path),
        ConfigAction::Init { force } => cmd_config_init(config_path, force).map(|_| ()),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `folio config init` to create it)");
    }
    Ok(())
}

/// Print the effective configuration, environment overrides included.
///
/// A file that does not load is reported on stderr and the defaults are
/// printed instead.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<()> {
    let (config, problem) = effective_config(config_path);
    if let Some(e) = problem {
        eprintln!("warning: {e}; showing defaults");
    }
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn effective_config(config_path: Option<&str>) -> (FolioConfig, Option<Error>) {
    match FolioConfig::load(config_path) {
        Ok(config) => (config, None),
        Err(e) => (FolioConfig::default(), Some(e)),
    }
}

/// Write a default configuration file and return its path.
pub fn cmd_config_init(config_path: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, FolioConfig::default().to_toml_string()?)?;

    println!("Config file created at {}", path.display());
    Ok(path)
}
