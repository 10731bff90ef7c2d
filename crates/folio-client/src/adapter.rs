//! Template schema adapter.
//!
//! Resolves templates from the backend and converts them for the editor.
//! Backend failures never reach the caller: each one is logged at `warn`
//! and answered from the built-in registry instead.

use std::sync::Arc;

use folio_core::{ComponentRef, TemplateDefinition, TemplateRegistry};
use serde_json::Value;

use crate::convert::{
    FrontendTemplate, TemplateWithComponent, convert_backend_to_frontend_with,
    convert_content_for_backend, with_component,
};
use crate::schema::TemplateSchema;
use crate::seed::SeedOverrides;
use crate::source::TemplateSource;

/// Backend-first template lookup with catalog fallback.
#[derive(Clone)]
pub struct TemplateSchemaAdapter {
    source: Arc<dyn TemplateSource>,
    registry: Arc<TemplateRegistry>,
    seeds: SeedOverrides,
}

impl std::fmt::Debug for TemplateSchemaAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateSchemaAdapter")
            .field("templates", &self.registry.all().len())
            .field("seeds", &self.seeds)
            .finish_non_exhaustive()
    }
}

impl TemplateSchemaAdapter {
    /// Adapter over `source` with the built-in registry and standard seeds.
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self {
            source,
            registry: TemplateRegistry::shared(),
            seeds: SeedOverrides::standard(),
        }
    }

    /// Use a different fallback registry.
    pub fn with_registry(mut self, registry: Arc<TemplateRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Use different seed overrides for converted templates.
    pub fn with_seeds(mut self, seeds: SeedOverrides) -> Self {
        self.seeds = seeds;
        self
    }

    /// Fetch a template and pair it with its component.
    ///
    /// On any backend failure the catalog entry for `template_id` (or the
    /// primary template) is returned with the catalog's component.
    pub async fn get_template_with_component(&self, template_id: &str) -> TemplateWithComponent {
        match self.source.fetch_template(template_id).await {
            Ok(backend) => {
                let template = convert_backend_to_frontend_with(&backend, &self.seeds);
                with_component(template, template_id)
            }
            Err(e) => {
                log::warn!("Failed to fetch template '{template_id}' from backend, using fallback: {e}");
                let definition = self.get_fallback_template(template_id);
                TemplateWithComponent {
                    template: FrontendTemplate::from(definition),
                    component: definition.component,
                }
            }
        }
    }

    /// Catalog entry for `template_id`, or the primary template on a miss.
    pub fn get_fallback_template(&self, template_id: &str) -> &TemplateDefinition {
        let id = if template_id == "echelon" {
            "echolon"
        } else {
            template_id
        };
        self.registry
            .get(Some(id))
            .unwrap_or_else(|| self.registry.primary())
    }

    /// Every template the backend offers, or the full catalog on failure.
    pub async fn get_all_templates(&self) -> Vec<FrontendTemplate> {
        match self.source.fetch_templates().await {
            Ok(schemas) => schemas
                .iter()
                .map(|schema| convert_backend_to_frontend_with(schema, &self.seeds))
                .collect(),
            Err(e) => {
                log::warn!("Failed to fetch templates from backend, using catalog: {e}");
                self.registry.all().iter().map(FrontendTemplate::from).collect()
            }
        }
    }

    /// Component for a template id via the fixed id table.
    pub fn component_for(&self, template_id: &str) -> ComponentRef {
        ComponentRef::for_template_id(template_id)
    }

    /// Reduce editor content to what `schema` declares.
    pub fn convert_content_for_backend(&self, content: &Value, schema: &TemplateSchema) -> Value {
        convert_content_for_backend(content, schema)
    }
}
