//! Command handlers.
//!
//! Handlers return serializable values; `main` prints them as JSON.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use folio_client::{
    AdminOperations, FrontendTemplate, HttpTemplateSource, MigrationReport, ResyncReport,
    TemplateSchemaAdapter, TemplateSource, TemplateWithComponent, convert_content_for_backend,
    template_to_backend_schema,
};
use folio_core::{ComponentRef, PortfolioSeed, TemplateRegistry};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{AdminAction, ContentAction, PortfolioAction, TemplatesAction};
use crate::config::FolioConfig;

/// One row of `folio templates list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSummary {
    /// Template id
    pub id: String,
    /// Display name
    pub name: String,
    /// Showcase category
    pub category: String,
    /// Rendering component
    pub component: ComponentRef,
}

impl From<&FrontendTemplate> for TemplateSummary {
    fn from(template: &FrontendTemplate) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            category: template.category.clone(),
            component: ComponentRef::for_template_id(&template.id),
        }
    }
}

fn http_source(config: &FolioConfig) -> Result<Arc<HttpTemplateSource>> {
    let source = HttpTemplateSource::new(config.client_config())
        .context("Failed to build template API client")?;
    Ok(Arc::new(source))
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

// ============================================================================
// templates
// ============================================================================

/// Handle `folio templates ...`.
pub async fn templates(config: &FolioConfig, action: TemplatesAction) -> Result<Value> {
    match action {
        TemplatesAction::List { offline } => {
            let templates = if offline {
                offline_templates()
            } else {
                TemplateSchemaAdapter::new(http_source(config)?)
                    .get_all_templates()
                    .await
            };
            let summaries: Vec<TemplateSummary> =
                templates.iter().map(TemplateSummary::from).collect();
            Ok(serde_json::to_value(summaries)?)
        }
        TemplatesAction::Show { id, offline } => {
            let bundle = if offline {
                offline_template(&id)?
            } else {
                TemplateSchemaAdapter::new(http_source(config)?)
                    .get_template_with_component(&id)
                    .await
            };
            Ok(serde_json::to_value(bundle)?)
        }
    }
}

/// The built-in catalog as front-end templates.
pub fn offline_templates() -> Vec<FrontendTemplate> {
    folio_core::get_all_templates()
        .iter()
        .map(FrontendTemplate::from)
        .collect()
}

/// A built-in template with its component; unknown ids are an error.
pub fn offline_template(id: &str) -> Result<TemplateWithComponent> {
    let definition = folio_core::get_template(Some(id))
        .ok_or_else(|| folio_core::Error::template_not_found(id))?;
    Ok(TemplateWithComponent {
        template: FrontendTemplate::from(definition),
        component: definition.component,
    })
}

// ============================================================================
// portfolio
// ============================================================================

/// Handle `folio portfolio ...`.
pub fn portfolio(action: PortfolioAction) -> Result<Value> {
    match action {
        PortfolioAction::New { id, customizations } => {
            let seed = new_portfolio(&id, customizations.as_deref())?;
            Ok(serde_json::to_value(seed)?)
        }
    }
}

/// Seed a portfolio, merging customizations from a JSON file if given.
pub fn new_portfolio(id: &str, customizations: Option<&Path>) -> Result<PortfolioSeed> {
    let customizations = match customizations {
        Some(path) => match read_json(path)? {
            Value::Object(map) => map,
            _ => bail!("Customizations in {} must be a JSON object", path.display()),
        },
        None => Map::new(),
    };
    Ok(folio_core::create_portfolio_from_template(Some(id), &customizations)?)
}

// ============================================================================
// content
// ============================================================================

/// Handle `folio content ...`.
pub async fn content(config: &FolioConfig, action: ContentAction) -> Result<Value> {
    match action {
        ContentAction::Convert {
            content,
            template_id,
            offline,
        } => {
            let content = read_json(&content)?;
            let source = if offline {
                None
            } else {
                Some(http_source(config)? as Arc<dyn TemplateSource>)
            };
            convert_content(&content, &template_id, source.as_deref()).await
        }
    }
}

/// Reduce `content` to the schema of `template_id`.
///
/// The schema comes from `source` when given and reachable, otherwise it
/// is derived from the catalog entry (or the primary template).
pub async fn convert_content(
    content: &Value,
    template_id: &str,
    source: Option<&dyn TemplateSource>,
) -> Result<Value> {
    let remote = match source {
        Some(source) => match source.fetch_template(template_id).await {
            Ok(schema) => schema.schema,
            Err(e) => {
                log::warn!("Failed to fetch schema for '{template_id}', using catalog: {e}");
                None
            }
        },
        None => None,
    };

    let schema = match remote {
        Some(schema) => schema,
        None => {
            let registry = TemplateRegistry::builtin();
            let definition = registry
                .get(Some(template_id))
                .unwrap_or_else(|| registry.primary());
            template_to_backend_schema(definition)
                .schema
                .unwrap_or_default()
        }
    };

    Ok(convert_content_for_backend(content, &schema))
}

// ============================================================================
// admin
// ============================================================================

/// Handle `folio admin ...`.
pub async fn admin(config: &FolioConfig, action: AdminAction) -> Result<Value> {
    let admin = AdminOperations::new(http_source(config)?);
    match action {
        AdminAction::Migrate { id: Some(id) } => {
            let schema = admin.migrate_template(&id).await?;
            let report = MigrationReport {
                migrated: schema.template_id.into_iter().collect(),
                failed: Vec::new(),
            };
            Ok(serde_json::to_value(report)?)
        }
        AdminAction::Migrate { id: None } => {
            let report = admin.migrate_all().await;
            if !report.is_complete() {
                println!("{}", serde_json::to_string_pretty(&report)?);
                bail!("{} template(s) failed to migrate", report.failed.len());
            }
            Ok(serde_json::to_value(report)?)
        }
        AdminAction::Resync => {
            let report: ResyncReport = admin.resync_templates().await?;
            Ok(serde_json::to_value(report)?)
        }
    }
}
