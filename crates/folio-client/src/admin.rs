//! Administrative template operations.
//!
//! Pushes catalog templates to the backend and compares the two. These are
//! maintenance tasks run from the command line; unlike the adapter they
//! return every error to the caller.

use std::sync::Arc;

use folio_core::registry::TEMPLATE_VERSION;
use folio_core::{SpacingConfig, StylingConfig, TemplateDefinition, TemplateRegistry, TypographyScale};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::schema::{
    BackendStyling, BackendTemplateSchema, BackendTypography, FieldSchema, FieldType,
    SectionSchema, TemplateSchema,
};
use crate::source::TemplateSource;

/// Sections the backend must always render.
const REQUIRED_SECTIONS: &[&str] = &["hero", "navigation"];

/// Outcome of pushing many templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Ids pushed successfully
    pub migrated: Vec<String>,
    /// Ids that failed, with the error message
    pub failed: Vec<MigrationFailure>,
}

impl MigrationReport {
    /// Whether every template was pushed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// One failed push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationFailure {
    /// Template id
    pub id: String,
    /// Error message
    pub error: String,
}

/// Differences between the catalog and the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResyncReport {
    /// Ids the backend reported, in its order
    pub remote: Vec<String>,
    /// Catalog ids the backend does not have
    pub missing_remote: Vec<String>,
    /// Backend ids the catalog does not know
    pub unknown_local: Vec<String>,
}

impl ResyncReport {
    /// Whether catalog and backend agree.
    pub fn is_in_sync(&self) -> bool {
        self.missing_remote.is_empty() && self.unknown_local.is_empty()
    }
}

/// Template migration and resync against a [`TemplateSource`].
#[derive(Clone)]
pub struct AdminOperations {
    source: Arc<dyn TemplateSource>,
    registry: Arc<TemplateRegistry>,
}

impl AdminOperations {
    /// Operations over the built-in registry.
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self {
            source,
            registry: TemplateRegistry::shared(),
        }
    }

    /// Use a different registry as the local side.
    pub fn with_registry(mut self, registry: Arc<TemplateRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Push one catalog template to the backend.
    ///
    /// # Errors
    ///
    /// `TemplateNotFound` if the id is not in the catalog, otherwise any
    /// transport or backend error from the push.
    pub async fn migrate_template(&self, template_id: &str) -> Result<BackendTemplateSchema> {
        let definition = self
            .registry
            .get(Some(template_id))
            .ok_or_else(|| folio_core::Error::template_not_found(template_id))?;
        let schema = template_to_backend_schema(definition);
        self.source.push_template(&schema).await?;
        log::info!("Migrated template '{}'", definition.id);
        Ok(schema)
    }

    /// Push every catalog template, continuing past failures.
    pub async fn migrate_all(&self) -> MigrationReport {
        let mut report = MigrationReport::default();
        for definition in self.registry.all() {
            match self.migrate_template(&definition.id).await {
                Ok(_) => report.migrated.push(definition.id.clone()),
                Err(e) => {
                    log::warn!("Failed to migrate template '{}': {e}", definition.id);
                    report.failed.push(MigrationFailure {
                        id: definition.id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }
        report
    }

    /// Compare catalog ids with the ids the backend lists.
    ///
    /// # Errors
    ///
    /// Any error from listing the backend templates.
    pub async fn resync_templates(&self) -> Result<ResyncReport> {
        let remote: Vec<String> = self
            .source
            .fetch_templates()
            .await?
            .iter()
            .filter_map(|schema| schema.id().map(str::to_string))
            .collect();

        let missing_remote = self
            .registry
            .all()
            .iter()
            .filter(|t| !remote.contains(&t.id))
            .map(|t| t.id.clone())
            .collect();
        let unknown_local = remote
            .iter()
            .filter(|id| self.registry.get(Some(id.as_str())).is_none())
            .cloned()
            .collect();

        let report = ResyncReport {
            remote,
            missing_remote,
            unknown_local,
        };
        log::info!(
            "Resync: {} remote, {} missing remotely, {} unknown locally",
            report.remote.len(),
            report.missing_remote.len(),
            report.unknown_local.len()
        );
        Ok(report)
    }
}

// ============================================================================
// Catalog → backend mapping
// ============================================================================

fn infer_field(id: &str, default: Option<&Value>) -> FieldSchema {
    let kind = match default {
        Some(Value::Array(_)) => FieldType::Array,
        Some(Value::Object(_)) => FieldType::Object,
        _ => FieldType::String,
    };
    let mut field = FieldSchema::new(id, kind);
    field.placeholder = match default {
        Some(Value::String(text)) if !text.is_empty() => Some(Value::String(text.clone())),
        _ => None,
    };
    field
}

fn scale_name(scale: &TypographyScale) -> &'static str {
    ["large", "small"]
        .into_iter()
        .find(|name| TypographyScale::for_name(Some(*name)) == *scale)
        .unwrap_or("medium")
}

fn spacing_name(spacing: &SpacingConfig) -> &'static str {
    ["compact", "loose"]
        .into_iter()
        .find(|name| SpacingConfig::for_name(Some(*name)) == *spacing)
        .unwrap_or("medium")
}

fn backend_styling(styling: &Value) -> Option<BackendStyling> {
    let styling: StylingConfig = serde_json::from_value(styling.clone()).ok()?;
    Some(BackendStyling {
        color_scheme: Some(styling.colors),
        typography: Some(BackendTypography {
            heading_font: Some(styling.fonts.heading),
            body_font: Some(styling.fonts.body),
            scale: Some(scale_name(&styling.typography.scale).to_string()),
        }),
        spacing: Some(spacing_name(&styling.spacing).to_string()),
    })
}

/// Describe a catalog template as a backend schema.
///
/// Sections follow `structure` order with `order` set to the position.
/// Field types are inferred from the default content; non-empty default
/// strings become placeholders.
pub fn template_to_backend_schema(definition: &TemplateDefinition) -> BackendTemplateSchema {
    let sections = definition
        .structure
        .iter()
        .enumerate()
        .map(|(position, (section_id, section))| {
            let defaults = definition.default_content.get(section_id);
            let fields = section
                .editable
                .iter()
                .map(|field| infer_field(field, defaults.and_then(|d| d.get(field))))
                .collect();
            SectionSchema {
                id: section_id.clone(),
                required: REQUIRED_SECTIONS.contains(&section_id.as_str()),
                order: i64::try_from(position).ok(),
                fields,
            }
        })
        .collect();

    BackendTemplateSchema {
        template_id: Some(definition.id.clone()),
        name: definition.name.clone(),
        description: definition.description.clone(),
        category: definition.category.clone(),
        slug: Some(definition.id.clone()),
        thumbnail: definition.preview.clone(),
        version: Some(Value::String(TEMPLATE_VERSION.to_string())),
        is_active: Some(true),
        is_premium: Some(false),
        schema: Some(TemplateSchema::new(
            sections,
            backend_styling(&definition.styling),
        )),
        ..BackendTemplateSchema::default()
    }
}
