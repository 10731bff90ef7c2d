//! Seed overrides: sample content injected into converted backend templates.
//!
//! Backend schemas only declare field types, so list fields arrive empty.
//! Seed rules fill a few well-known lists with sample items so a fresh
//! portfolio renders something. Rules are keyed by section id and fire
//! whenever that section exists in the converted content, regardless of
//! what the backend declared for the field.
//!
//! A [`SeedOverrides`] holds default rules for every template plus
//! per-template rules that replace a default or disable it with
//! [`SeedRule::Skip`].

use std::collections::HashMap;

use serde_json::{Value, json};

/// Produces a fresh seed value.
pub type SeedFn = fn() -> Value;

/// What to do for one section.
#[derive(Debug, Clone, Copy)]
pub enum SeedRule {
    /// Overwrite `field` of the section with the output of `seed`
    Seed {
        /// Field id inside the section
        field: &'static str,
        /// Seed generator
        seed: SeedFn,
    },
    /// Leave the section untouched
    Skip,
}

impl SeedRule {
    /// Shorthand for [`SeedRule::Seed`].
    pub fn seed(field: &'static str, seed: SeedFn) -> Self {
        SeedRule::Seed { field, seed }
    }
}

/// Default and per-template seed rules.
#[derive(Debug, Clone, Default)]
pub struct SeedOverrides {
    defaults: HashMap<String, SeedRule>,
    per_template: HashMap<String, HashMap<String, SeedRule>>,
}

impl SeedOverrides {
    /// No rules at all; converted content keeps the backend shape.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stock rules: a sample project for `work`, a six-image grid for
    /// `gallery` (three shop items for Serene), and a Home/About/Gallery
    /// menu for `navigation`.
    pub fn standard() -> Self {
        Self::empty()
            .with_default("work", SeedRule::seed("projects", sample_projects))
            .with_default("gallery", SeedRule::seed("images", grid_images))
            .with_default("navigation", SeedRule::seed("menuItems", menu_items))
            .with_template_rule("serene", "gallery", SeedRule::seed("images", shop_images))
    }

    /// Add or replace the default rule for a section.
    pub fn with_default(mut self, section: impl Into<String>, rule: SeedRule) -> Self {
        self.defaults.insert(section.into(), rule);
        self
    }

    /// Add or replace a template-specific rule for a section.
    pub fn with_template_rule(
        mut self,
        template_id: impl Into<String>,
        section: impl Into<String>,
        rule: SeedRule,
    ) -> Self {
        self.per_template
            .entry(template_id.into())
            .or_default()
            .insert(section.into(), rule);
        self
    }

    /// The rule in effect for a section of a template.
    ///
    /// A template-specific rule wins over the default.
    pub fn rule_for(&self, template_id: Option<&str>, section: &str) -> Option<SeedRule> {
        template_id
            .and_then(|id| self.per_template.get(id))
            .and_then(|rules| rules.get(section))
            .or_else(|| self.defaults.get(section))
            .copied()
    }

    /// Apply every matching rule to `content` in place.
    ///
    /// Only sections already present as objects in `content` are touched.
    pub fn apply(&self, template_id: Option<&str>, content: &mut Value) {
        let Some(sections) = content.as_object_mut() else {
            return;
        };

        for (section_id, section) in sections.iter_mut() {
            let Some(fields) = section.as_object_mut() else {
                continue;
            };
            match self.rule_for(template_id, section_id) {
                Some(SeedRule::Seed { field, seed }) => {
                    log::debug!("Seeding {section_id}.{field}");
                    fields.insert(field.to_string(), seed());
                }
                Some(SeedRule::Skip) | None => {}
            }
        }
    }
}

// ============================================================================
// Stock seeds
// ============================================================================

fn sample_projects() -> Value {
    json!([{
        "id": "project-1",
        "title": "Sample Project",
        "description": "A short description of the project, the brief, and the outcome.",
        "image": "",
        "meta": "2024 · Client Name",
        "category": "Design"
    }])
}

fn grid_images() -> Value {
    let images: Vec<Value> = (1..=6)
        .map(|n| {
            json!({
                "src": "",
                "caption": format!("Image {n}"),
                "meta": "Photography"
            })
        })
        .collect();
    Value::Array(images)
}

fn shop_images() -> Value {
    json!([
        {
            "image": "",
            "title": "Artwork One",
            "description": "Original piece, mixed media",
            "price": "$120",
            "caption": "Available"
        },
        {
            "image": "",
            "title": "Artwork Two",
            "description": "Limited edition print",
            "price": "$85",
            "caption": "Edition of 50"
        },
        {
            "image": "",
            "title": "Artwork Three",
            "description": "Study on paper",
            "price": "$60",
            "caption": "Signed"
        }
    ])
}

fn menu_items() -> Value {
    json!([
        {"label": "Home", "link": "#home"},
        {"label": "About", "link": "#about"},
        {"label": "Gallery", "link": "#gallery"}
    ])
}
