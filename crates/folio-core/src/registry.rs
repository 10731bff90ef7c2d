//! Template registry: lookup, id normalization, and portfolio seeding.
//!
//! The registry is the offline source of truth for templates. It is used
//! directly when seeding a new portfolio and as the fallback whenever the
//! template backend cannot be reached.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::registry::TemplateRegistry;
//! use serde_json::{Map, json};
//!
//! let registry = TemplateRegistry::builtin();
//!
//! // Legacy ids resolve to their canonical entry
//! let echelon = registry.get(Some("echelon")).unwrap();
//! assert_eq!(echelon.id, "echolon");
//!
//! let mut customizations = Map::new();
//! customizations.insert("about".into(), json!({"bio": "Hello"}));
//! let seed = registry.create_portfolio(Some("serene"), &customizations).unwrap();
//! assert_eq!(seed.content["about"]["bio"], "Hello");
//! ```

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{PRIMARY_TEMPLATE_ID, builtin_templates};
use crate::component::ComponentRef;
use crate::error::{Error, Result};
use crate::merge::merged;
use crate::template::{Structure, TemplateDefinition};

/// Version stamped into every seeded portfolio's metadata.
pub const TEMPLATE_VERSION: &str = "1.0.0";

/// Legacy template ids and the canonical ids they stand for.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("echelon", "echolon"),
    ("swiss", "echolon"),
    ("swiss-minimal", "echolon"),
    ("minimal", "echolon"),
    ("serene-gallery", "serene"),
    ("gallery", "serene"),
    ("chic-portfolio", "chic"),
    ("bold-folio", "boldfolio"),
    ("bold_folio", "boldfolio"),
    ("bold", "boldfolio"),
];

static BUILTIN: LazyLock<Arc<TemplateRegistry>> = LazyLock::new(|| {
    Arc::new(TemplateRegistry {
        templates: builtin_templates(),
    })
});

/// Normalize a requested template id.
///
/// Missing or empty ids become the primary template id; known legacy
/// aliases become their canonical id; anything else is returned unchanged.
pub fn normalize_template_id(template_id: Option<&str>) -> &str {
    let id = match template_id {
        None | Some("") => return PRIMARY_TEMPLATE_ID,
        Some(id) => id,
    };

    match LEGACY_ALIASES.iter().find(|(alias, _)| *alias == id) {
        Some(&(alias, canonical)) => {
            log::debug!("Template id '{alias}' normalized to '{canonical}'");
            canonical
        }
        None => id,
    }
}

// ============================================================================
// PortfolioSeed
// ============================================================================

/// Bookkeeping stamped onto a newly seeded portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetadata {
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time (equal to `created_at` on creation)
    pub updated_at: DateTime<Utc>,
    /// Version of the template format
    pub template_version: String,
}

/// Initial state of a portfolio created from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSeed {
    /// Canonical id of the template the portfolio was created from
    pub template_id: String,
    /// Template defaults with user customizations merged over them
    pub content: Value,
    /// Template styling, with `customizations.styling` merged over it if given
    pub styling: Value,
    /// Template structure, copied unchanged
    pub structure: Structure,
    /// Timestamps and template version
    pub metadata: PortfolioMetadata,
}

// ============================================================================
// TemplateRegistry
// ============================================================================

/// An immutable catalog of template definitions.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDefinition>,
}

impl TemplateRegistry {
    /// The compiled-in catalog.
    pub fn builtin() -> &'static TemplateRegistry {
        &BUILTIN
    }

    /// A shared handle to the compiled-in catalog.
    pub fn shared() -> Arc<TemplateRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Build a registry from custom definitions.
    ///
    /// Fails if `templates` is empty, since every lookup must be able to
    /// fall back to a primary template.
    pub fn new(templates: Vec<TemplateDefinition>) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::config("template registry needs at least one template"));
        }
        Ok(Self { templates })
    }

    /// Look up a template by id, after normalization.
    ///
    /// Returns `None` for ids that are not in the catalog; never errors.
    pub fn get(&self, template_id: Option<&str>) -> Option<&TemplateDefinition> {
        let id = normalize_template_id(template_id);
        self.templates.iter().find(|t| t.id == id)
    }

    /// Every template in declaration order.
    pub fn all(&self) -> &[TemplateDefinition] {
        &self.templates
    }

    /// The primary template: the entry with the primary id, or the first entry.
    pub fn primary(&self) -> &TemplateDefinition {
        self.get(None).unwrap_or(&self.templates[0])
    }

    /// Look up only the component for a template id.
    pub fn component(&self, template_id: Option<&str>) -> Option<ComponentRef> {
        self.get(template_id).map(|t| t.component)
    }

    /// Seed a new portfolio from a template.
    ///
    /// `content` is the template's default content with `customizations`
    /// deep-merged over it. `styling` is the template styling with
    /// `customizations["styling"]` merged over it, or the template styling
    /// verbatim when no styling customization is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateNotFound`] if the id is not in the catalog
    /// after normalization. No partial result is produced.
    pub fn create_portfolio(
        &self,
        template_id: Option<&str>,
        customizations: &Map<String, Value>,
    ) -> Result<PortfolioSeed> {
        let template = self.get(template_id).ok_or_else(|| {
            Error::template_not_found(template_id.unwrap_or(PRIMARY_TEMPLATE_ID))
        })?;

        let customizations = Value::Object(customizations.clone());
        let content = merged(&template.default_content, &customizations);
        let styling = match customizations.get("styling") {
            Some(styling) => merged(&template.styling, styling),
            None => template.styling.clone(),
        };

        let now = Utc::now();
        log::debug!("Seeded portfolio from template '{}'", template.id);

        Ok(PortfolioSeed {
            template_id: template.id.clone(),
            content,
            styling,
            structure: template.structure.clone(),
            metadata: PortfolioMetadata {
                created_at: now,
                updated_at: now,
                template_version: TEMPLATE_VERSION.to_string(),
            },
        })
    }
}

// ============================================================================
// Free functions over the built-in catalog
// ============================================================================

/// Look up a template in the built-in catalog.
pub fn get_template(template_id: Option<&str>) -> Option<&'static TemplateDefinition> {
    TemplateRegistry::builtin().get(template_id)
}

/// Every template in the built-in catalog, in declaration order.
pub fn get_all_templates() -> &'static [TemplateDefinition] {
    TemplateRegistry::builtin().all()
}

/// Look up a template's component in the built-in catalog.
pub fn get_template_component(template_id: Option<&str>) -> Option<ComponentRef> {
    TemplateRegistry::builtin().component(template_id)
}

/// Seed a new portfolio from a built-in template.
pub fn create_portfolio_from_template(
    template_id: Option<&str>,
    customizations: &Map<String, Value>,
) -> Result<PortfolioSeed> {
    TemplateRegistry::builtin().create_portfolio(template_id, customizations)
}
