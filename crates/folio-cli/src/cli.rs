//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - portfolio templates and schema adapter
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
#[command(about = "Folio portfolio template tool", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log at debug level (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Template lookup
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },
    /// Portfolio seeding
    Portfolio {
        #[command(subcommand)]
        action: PortfolioAction,
    },
    /// Content conversion
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Template migration against the backend
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplatesAction {
    /// List available templates
    List {
        /// Use the built-in catalog without contacting the backend
        #[arg(long)]
        offline: bool,
    },
    /// Show one template with its component
    Show {
        /// Template id (legacy ids accepted)
        id: String,
        /// Use the built-in catalog without contacting the backend
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PortfolioAction {
    /// Seed a new portfolio from a template
    New {
        /// Template id (legacy ids accepted)
        id: String,
        /// JSON file with customizations to merge over the defaults
        #[arg(long)]
        customizations: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContentAction {
    /// Reduce editor content to the fields a template's schema declares
    Convert {
        /// JSON file with portfolio content
        content: PathBuf,
        /// Template id whose schema to apply
        template_id: String,
        /// Derive the schema from the built-in catalog
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Push catalog templates to the backend (all when no id is given)
    Migrate {
        /// Template id
        id: Option<String>,
    },
    /// Compare catalog templates with the backend
    Resync,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
