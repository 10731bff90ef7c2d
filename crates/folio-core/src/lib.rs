//! Folio Core: template catalog, registry, and merge utilities.
//!
//! This crate has no network or async dependencies (dependency level 0).
//! The schema adapter in `folio-client` builds on it; nothing here depends
//! on the adapter.
//!
//! # Modules
//!
//! - [`catalog`]: The compiled-in template definitions
//! - [`registry`]: Lookup, id normalization, and portfolio seeding
//! - [`merge`]: Deep-merge of JSON values
//! - [`styling`]: Typography, spacing, and styling config types
//! - [`template`]: Template definition types
//! - [`component`]: Presentational component references
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod component;
pub mod error;
pub mod merge;
pub mod registry;
pub mod styling;
pub mod template;

// Re-export key types at crate root for convenience
pub use catalog::PRIMARY_TEMPLATE_ID;
pub use component::ComponentRef;
pub use error::{Error, Result};
pub use merge::{deep_merge, merged};
pub use registry::{
    PortfolioMetadata, PortfolioSeed, TemplateRegistry, create_portfolio_from_template,
    get_all_templates, get_template, get_template_component, normalize_template_id,
};
pub use styling::{SpacingConfig, StylingConfig, TypographyScale};
pub use template::{SectionStructure, Structure, TemplateDefinition};
