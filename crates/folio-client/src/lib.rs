//! Folio Client: backend template schemas and the schema adapter.
//!
//! Builds on `folio-core`: templates are fetched from the template API,
//! converted for the editor, and replaced by catalog entries whenever the
//! backend is unavailable.
//!
//! # Modules
//!
//! - [`adapter`]: Backend-first lookup with catalog fallback
//! - [`admin`]: Template migration and resync
//! - [`convert`]: Backend ↔ front-end conversion
//! - [`envelope`]: Response envelope unwrapping
//! - [`schema`]: Backend schema types
//! - [`seed`]: Sample content for converted templates
//! - [`source`]: The `TemplateSource` seam and its HTTP implementation
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod admin;
pub mod convert;
pub mod envelope;
pub mod error;
pub mod schema;
pub mod seed;
pub mod source;

// Re-export key types at crate root for convenience
pub use adapter::TemplateSchemaAdapter;
pub use admin::{
    AdminOperations, MigrationFailure, MigrationReport, ResyncReport, template_to_backend_schema,
};
pub use convert::{
    FrontendTemplate, TemplateWithComponent, convert_backend_to_frontend,
    convert_backend_to_frontend_with, convert_content_for_backend, convert_styling,
    get_layout_for_section, get_spacing_config, get_typography_scale,
};
pub use envelope::unwrap_envelope;
pub use error::{Error, Result};
pub use schema::{
    BackendStyling, BackendTemplateSchema, BackendTypography, FieldSchema, FieldType,
    SectionSchema, TemplateSchema,
};
pub use seed::{SeedOverrides, SeedRule};
pub use source::{ClientConfig, HttpTemplateSource, TemplateSource};
