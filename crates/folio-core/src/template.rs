//! Template definition types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::ComponentRef;

/// Section name → section descriptor, in declaration order.
pub type Structure = IndexMap<String, SectionStructure>;

/// Describes one section of a template: its kind, which layout variant the
/// presentational component should use, and which fields users may edit.
///
/// `required` and `order` are only known for templates delivered by the
/// backend; static catalog entries leave them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStructure {
    /// Section kind (usually the section id).
    #[serde(rename = "type")]
    pub kind: String,
    /// Layout variant name.
    pub layout: String,
    /// Field ids the user may edit in place.
    #[serde(default)]
    pub editable: Vec<String>,
    /// Whether the backend marks this section as required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Declared display order (carried through, never used to sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl SectionStructure {
    /// Create a section descriptor with the given kind, layout, and editable fields.
    pub fn new(kind: &str, layout: &str, editable: &[&str]) -> Self {
        Self {
            kind: kind.to_string(),
            layout: layout.to_string(),
            editable: editable.iter().map(|f| (*f).to_string()).collect(),
            required: None,
            order: None,
        }
    }
}

/// A statically bundled template.
///
/// `default_content` and `styling` are JSON objects so they can be
/// deep-merged with arbitrary user customizations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    /// Canonical template id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Showcase category.
    pub category: String,
    /// Thumbnail path, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Section descriptors.
    pub structure: Structure,
    /// Seed content: section → field → value.
    pub default_content: Value,
    /// Colors, fonts, typography scale, spacing.
    pub styling: Value,
    /// Presentational implementation for this template.
    pub component: ComponentRef,
}

impl TemplateDefinition {
    /// Section names declared in `structure` that have no seed content.
    ///
    /// Such sections render empty; this is tolerated, not rejected.
    pub fn sections_without_content(&self) -> Vec<&str> {
        self.structure
            .keys()
            .filter(|section| self.default_content.get(section.as_str()).is_none())
            .map(String::as_str)
            .collect()
    }
}
