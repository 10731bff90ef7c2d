//! Conversion between backend schemas and front-end template bundles.
//!
//! Conversion is pure and total: any deserialized [`BackendTemplateSchema`]
//! converts, including one without sections (the result then has an empty
//! structure and empty content).

use std::sync::LazyLock;

use folio_core::styling::{Fonts, Typography};
use folio_core::{
    ComponentRef, SectionStructure, SpacingConfig, Structure, StylingConfig, TemplateDefinition,
    TypographyScale,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{BackendStyling, BackendTemplateSchema, FieldSchema, FieldType, TemplateSchema};
use crate::seed::SeedOverrides;

static STANDARD_SEEDS: LazyLock<SeedOverrides> = LazyLock::new(SeedOverrides::standard);

/// Section id → layout variant for converted templates.
const SECTION_LAYOUTS: &[(&str, &str)] = &[
    ("navigation", "sticky_nav"),
    ("hero", "swiss_minimal"),
    ("about", "two_column_swiss"),
    ("work", "project_list_swiss"),
    ("gallery", "image_grid_swiss"),
    ("contact", "minimal_swiss"),
];

/// Layout used for sections without a table entry.
pub const DEFAULT_LAYOUT: &str = "default";

// ============================================================================
// Front-end template types
// ============================================================================

/// A template in the shape the editor consumes.
///
/// Built either from a static [`TemplateDefinition`] or from a backend
/// schema. Backend-only metadata is carried in the optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendTemplate {
    /// Template id
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Showcase category
    pub category: String,
    /// Preview image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    /// Preview image (duplicate key kept for older editor builds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Section descriptors in declaration order
    pub structure: Structure,
    /// Seed content: section → field → value
    pub default_content: Value,
    /// Styling object
    pub styling: Value,
    /// Backend version, if converted from a backend schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    /// Backend active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Backend premium flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    /// The backend `schema` block this template was converted from
    #[serde(
        rename = "_backendSchema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub backend_schema: Option<Value>,
}

impl From<&TemplateDefinition> for FrontendTemplate {
    fn from(definition: &TemplateDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            description: definition.description.clone(),
            category: definition.category.clone(),
            preview: definition.preview.clone(),
            preview_url: definition.preview.clone(),
            structure: definition.structure.clone(),
            default_content: definition.default_content.clone(),
            styling: definition.styling.clone(),
            version: None,
            is_active: None,
            is_premium: None,
            backend_schema: None,
        }
    }
}

/// A front-end template paired with the component that renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateWithComponent {
    /// The template
    #[serde(flatten)]
    pub template: FrontendTemplate,
    /// Presentational component
    pub component: ComponentRef,
}

// ============================================================================
// Backend → front end
// ============================================================================

/// Layout variant for a section id; [`DEFAULT_LAYOUT`] when unknown.
pub fn get_layout_for_section(section_id: &str) -> &'static str {
    SECTION_LAYOUTS
        .iter()
        .find(|(id, _)| *id == section_id)
        .map_or(DEFAULT_LAYOUT, |&(_, layout)| layout)
}

/// Typography scale for a backend scale name.
pub fn get_typography_scale(scale: Option<&str>) -> TypographyScale {
    TypographyScale::for_name(scale)
}

/// Spacing values for a backend spacing name.
pub fn get_spacing_config(spacing: Option<&str>) -> SpacingConfig {
    SpacingConfig::for_name(spacing)
}

/// Convert backend styling into a full styling config.
///
/// With no backend styling the complete Echelon default is returned,
/// including grid and border radius. With backend styling only what the
/// backend can express is produced; grid and border radius are omitted.
pub fn convert_styling(styling: Option<&BackendStyling>) -> StylingConfig {
    let Some(styling) = styling else {
        return StylingConfig::echelon();
    };

    let typography = styling.typography.as_ref();
    let font = |name: Option<&String>| name.cloned().unwrap_or_else(|| "Inter".to_string());

    StylingConfig {
        colors: styling.color_scheme.clone().unwrap_or_default(),
        fonts: Fonts {
            heading: font(typography.and_then(|t| t.heading_font.as_ref())),
            body: font(typography.and_then(|t| t.body_font.as_ref())),
            mono: "monospace".to_string(),
        },
        typography: Typography::with_scale(typography.and_then(|t| t.scale.as_deref())),
        grid: None,
        spacing: get_spacing_config(styling.spacing.as_deref()),
        border_radius: None,
    }
}

/// Seed value for one field of a converted section.
fn field_default(field: &FieldSchema) -> Value {
    match field.kind {
        FieldType::Array => Value::Array(Vec::new()),
        FieldType::Object => Value::Object(Map::new()),
        _ => match &field.placeholder {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(placeholder) => placeholder.clone(),
        },
    }
}

/// Convert a backend schema using the standard seed overrides.
pub fn convert_backend_to_frontend(backend: &BackendTemplateSchema) -> FrontendTemplate {
    convert_backend_to_frontend_with(backend, &STANDARD_SEEDS)
}

/// Convert a backend schema, seeding content from `seeds`.
///
/// Sections are taken in array order. The declared `order` is carried into
/// the structure but never used for sorting.
pub fn convert_backend_to_frontend_with(
    backend: &BackendTemplateSchema,
    seeds: &SeedOverrides,
) -> FrontendTemplate {
    let mut structure = Structure::new();
    let mut content = Map::new();

    for section in backend.sections() {
        structure.insert(
            section.id.clone(),
            SectionStructure {
                kind: section.id.clone(),
                layout: get_layout_for_section(&section.id).to_string(),
                editable: section.fields.iter().map(|f| f.id.clone()).collect(),
                required: Some(section.required),
                order: section.order,
            },
        );

        let fields: Map<String, Value> = section
            .fields
            .iter()
            .map(|f| (f.id.clone(), field_default(f)))
            .collect();
        content.insert(section.id.clone(), Value::Object(fields));
    }

    let mut default_content = Value::Object(content);
    seeds.apply(backend.template_id.as_deref(), &mut default_content);

    let id = backend.id().unwrap_or_default().to_string();
    log::debug!(
        "Converted backend template '{id}' ({} sections)",
        structure.len()
    );

    FrontendTemplate {
        id,
        name: backend.name.clone(),
        description: backend.description.clone(),
        category: backend.category.clone(),
        preview: backend.thumbnail.clone(),
        preview_url: backend.thumbnail.clone(),
        structure,
        default_content,
        styling: convert_styling(backend.styling()).into_value(),
        version: backend.version.clone(),
        is_active: backend.is_active,
        is_premium: backend.is_premium,
        backend_schema: backend.schema.as_ref().map(TemplateSchema::to_value),
    }
}

/// Pair a converted template with the component for `template_id`.
pub fn with_component(template: FrontendTemplate, template_id: &str) -> TemplateWithComponent {
    TemplateWithComponent {
        template,
        component: ComponentRef::for_template_id(template_id),
    }
}

// ============================================================================
// Front end → backend
// ============================================================================

/// Reduce editor content to what the backend schema declares.
///
/// Only sections that are both declared and present in `content` appear in
/// the result. Within them only declared fields survive: array fields are
/// coerced to `[]` unless already arrays, object fields to `{}` unless
/// already objects, and other fields are copied when present.
pub fn convert_content_for_backend(content: &Value, schema: &TemplateSchema) -> Value {
    let mut out = Map::new();

    for section in &schema.sections {
        let Some(section_content) = content.get(&section.id) else {
            continue;
        };

        let mut fields = Map::new();
        for field in &section.fields {
            let value = section_content.get(&field.id);
            let converted = match field.kind {
                FieldType::Array => match value {
                    Some(v @ Value::Array(_)) => v.clone(),
                    _ => Value::Array(Vec::new()),
                },
                FieldType::Object => match value {
                    Some(v @ Value::Object(_)) => v.clone(),
                    _ => Value::Object(Map::new()),
                },
                _ => match value {
                    Some(v) => v.clone(),
                    None => continue,
                },
            };
            fields.insert(field.id.clone(), converted);
        }
        out.insert(section.id.clone(), Value::Object(fields));
    }

    Value::Object(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn backend(value: Value) -> BackendTemplateSchema {
        serde_json::from_value(value).unwrap()
    }

    fn gallery_schema(template_id: &str) -> BackendTemplateSchema {
        backend(json!({
            "templateId": template_id,
            "schema": {"sections": [{"id": "gallery", "fields": [{"id": "images", "type": "array"}]}]}
        }))
    }

    fn sorted_keys(item: &Value) -> Vec<String> {
        let mut keys: Vec<String> = item.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    // -------------------------------------------------------------------------
    // Backend → front end
    // -------------------------------------------------------------------------

    #[test]
    fn test_gallery_seed_serene_vs_echolon() {
        let serene = convert_backend_to_frontend(&gallery_schema("serene"));
        let images = serene.default_content["gallery"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(
            sorted_keys(&images[0]),
            ["caption", "description", "image", "price", "title"]
        );

        let echolon = convert_backend_to_frontend(&gallery_schema("echolon"));
        let images = echolon.default_content["gallery"]["images"].as_array().unwrap();
        assert_eq!(images.len(), 6);
        assert_eq!(sorted_keys(&images[0]), ["caption", "meta", "src"]);
    }

    #[test]
    fn test_structure_from_sections() {
        let template = convert_backend_to_frontend(&backend(json!({
            "templateId": "chic",
            "name": "Chic",
            "thumbnail": "/t/chic.png",
            "isPremium": true,
            "schema": {"sections": [
                {"id": "hero", "required": true, "order": {"$numberInt": "1"},
                 "fields": [{"id": "title", "placeholder": "Hello"}, {"id": "subtitle"}]},
                {"id": "testimonials", "order": 0,
                 "fields": [{"id": "quotes", "type": "array"}, {"id": "meta", "type": "object"}]}
            ]}
        })));

        assert_eq!(template.id, "chic");
        assert_eq!(template.preview.as_deref(), Some("/t/chic.png"));
        assert_eq!(template.preview_url, template.preview);
        assert_eq!(template.is_premium, Some(true));

        let ids: Vec<&str> = template.structure.keys().map(String::as_str).collect();
        assert_eq!(ids, ["hero", "testimonials"]);

        let hero = &template.structure["hero"];
        assert_eq!(hero.kind, "hero");
        assert_eq!(hero.layout, "swiss_minimal");
        assert_eq!(hero.editable, ["title", "subtitle"]);
        assert_eq!(hero.required, Some(true));
        assert_eq!(hero.order, Some(1));
        assert_eq!(template.structure["testimonials"].layout, "default");

        assert_eq!(
            template.default_content,
            json!({
                "hero": {"title": "Hello", "subtitle": ""},
                "testimonials": {"quotes": [], "meta": {}}
            })
        );
    }

    #[test]
    fn test_empty_placeholder_becomes_empty_string() {
        let template = convert_backend_to_frontend(&backend(json!({
            "schema": {"sections": [{"id": "contact", "fields": [
                {"id": "email", "placeholder": null},
                {"id": "phone", "placeholder": ""}
            ]}]}
        })));
        assert_eq!(template.default_content["contact"], json!({"email": "", "phone": ""}));
    }

    #[test]
    fn test_absent_sections_empty_but_valid() {
        let template = convert_backend_to_frontend(&backend(json!({"templateId": "x"})));
        assert!(template.structure.is_empty());
        assert_eq!(template.default_content, json!({}));
        assert!(template.backend_schema.is_none());

        let template =
            convert_backend_to_frontend(&backend(json!({"schema": {"sections": []}})));
        assert!(template.structure.is_empty());
        assert_eq!(template.id, "");
    }

    #[test]
    fn test_custom_seeds_are_used() {
        let template =
            convert_backend_to_frontend_with(&gallery_schema("echolon"), &SeedOverrides::empty());
        assert_eq!(template.default_content["gallery"]["images"], json!([]));
    }

    #[test]
    fn test_backend_schema_is_attached() {
        let template = convert_backend_to_frontend(&gallery_schema("serene"));
        let attached = template.backend_schema.unwrap();
        assert_eq!(attached["sections"][0]["id"], "gallery");
    }

    #[test]
    fn test_backend_schema_is_attached_verbatim() {
        let raw = json!({
            "sections": [{"id": "hero", "label": "Hero banner", "order": {"$numberInt": "2"},
                          "fields": [{"id": "title", "label": "Headline", "maxLength": 80}]}],
            "layoutHints": {"x": 1}
        });
        let template = convert_backend_to_frontend(&backend(json!({
            "templateId": "echolon",
            "schema": raw.clone()
        })));
        assert_eq!(template.backend_schema, Some(raw));
        assert_eq!(template.structure["hero"].order, Some(2));
    }

    #[test]
    fn test_null_valued_fields_still_convert() {
        let template = convert_backend_to_frontend(&backend(json!({
            "templateId": "chic",
            "name": "Chic",
            "description": null,
            "schema": {"sections": [
                {"id": "about", "required": null, "fields": [
                    {"id": "bio", "type": null, "required": null, "placeholder": "Hello"}
                ]}
            ]}
        })));
        assert_eq!(template.id, "chic");
        assert_eq!(template.description, "");
        assert_eq!(template.structure["about"].required, Some(false));
        assert_eq!(template.default_content["about"]["bio"], "Hello");
    }

    #[test]
    fn test_with_component_table() {
        let template = convert_backend_to_frontend(&gallery_schema("echelon"));
        assert_eq!(with_component(template.clone(), "echelon").component, ComponentRef::Echelon);
        assert_eq!(with_component(template.clone(), "serene").component, ComponentRef::Serene);
        assert_eq!(with_component(template, "retro").component, ComponentRef::PRIMARY);
    }

    #[test]
    fn test_bundle_serializes_flat() {
        let bundle = with_component(convert_backend_to_frontend(&gallery_schema("chic")), "chic");
        let json = serde_json::to_value(&bundle).unwrap();
        assert_eq!(json["id"], "chic");
        assert_eq!(json["component"], "ChicTemplate");
        assert!(json.get("template").is_none());
        assert!(json["_backendSchema"].is_object());
    }

    #[test]
    fn test_from_definition() {
        let definition = folio_core::get_template(Some("serene")).unwrap();
        let template = FrontendTemplate::from(definition);
        assert_eq!(template.id, "serene");
        assert_eq!(template.preview_url, definition.preview);
        assert_eq!(template.default_content, definition.default_content);
        assert!(template.backend_schema.is_none());
    }

    // -------------------------------------------------------------------------
    // Styling
    // -------------------------------------------------------------------------

    #[test]
    fn test_styling_absent_is_full_default() {
        let styling = convert_styling(None).into_value();
        for key in ["colors", "fonts", "typography", "grid", "spacing", "borderRadius"] {
            assert!(styling.get(key).is_some(), "{key}");
        }
        assert!(!styling["colors"].as_object().unwrap().is_empty());
        assert_eq!(convert_styling(None), StylingConfig::echelon());
    }

    #[test]
    fn test_styling_present_is_partial() {
        let backend_styling: BackendStyling =
            serde_json::from_value(json!({"colorScheme": {"primary": "#111"}})).unwrap();
        let styling = convert_styling(Some(&backend_styling)).into_value();
        assert_eq!(styling["colors"]["primary"], "#111");
        assert!(styling.get("grid").is_none());
        assert!(styling.get("borderRadius").is_none());
        assert_eq!(styling["fonts"], json!({"heading": "Inter", "body": "Inter", "mono": "monospace"}));
        assert_eq!(styling["typography"]["scale"]["h1"], "72px");
        assert_eq!(styling["spacing"]["section"], "120px");
    }

    #[test]
    fn test_styling_named_scales() {
        let backend_styling: BackendStyling = serde_json::from_value(json!({
            "typography": {"headingFont": "Playfair", "scale": "large"},
            "spacing": "compact"
        }))
        .unwrap();
        let styling = convert_styling(Some(&backend_styling));
        assert!(styling.colors.is_empty());
        assert_eq!(styling.fonts.heading, "Playfair");
        assert_eq!(styling.fonts.body, "Inter");
        assert_eq!(styling.typography.scale, get_typography_scale(Some("large")));
        assert_eq!(styling.spacing, get_spacing_config(Some("compact")));
        assert_eq!(styling.typography.line_height.normal, 1.5);
    }

    #[test]
    fn test_layout_table() {
        assert_eq!(get_layout_for_section("navigation"), "sticky_nav");
        assert_eq!(get_layout_for_section("contact"), "minimal_swiss");
        assert_eq!(get_layout_for_section("services"), DEFAULT_LAYOUT);
    }

    // -------------------------------------------------------------------------
    // Front end → backend
    // -------------------------------------------------------------------------

    fn work_schema() -> TemplateSchema {
        serde_json::from_value(json!({
            "sections": [{"id": "work", "fields": [{"id": "projects", "type": "array"}]}]
        }))
        .unwrap()
    }

    #[test]
    fn test_content_allow_list() {
        let content = json!({"work": {"projects": [1, 2], "extra": "drop-me"}});
        assert_eq!(
            convert_content_for_backend(&content, &work_schema()),
            json!({"work": {"projects": [1, 2]}})
        );
    }

    #[test]
    fn test_content_undeclared_section_dropped() {
        let content = json!({"work": {"projects": []}, "blog": {"posts": []}});
        let out = convert_content_for_backend(&content, &work_schema());
        assert!(out.get("blog").is_none());
    }

    #[test]
    fn test_content_coercion() {
        let schema: TemplateSchema = serde_json::from_value(json!({
            "sections": [
                {"id": "about", "fields": [
                    {"id": "tags", "type": "array"},
                    {"id": "social", "type": "object"},
                    {"id": "bio"},
                    {"id": "title", "type": "string"}
                ]},
                {"id": "contact", "fields": [{"id": "email"}]}
            ]
        }))
        .unwrap();
        let content = json!({"about": {"tags": "design", "social": [1], "bio": 42}});
        assert_eq!(
            convert_content_for_backend(&content, &schema),
            json!({"about": {"tags": [], "social": {}, "bio": 42}})
        );
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
            Just(json!([1])),
            Just(json!({"k": 1})),
        ]
    }

    proptest! {
        #[test]
        fn test_converted_content_only_has_declared_fields(
            declared in proptest::collection::vec("[a-d]", 0..4),
            fields in proptest::collection::btree_map("[a-f]", scalar(), 0..6),
        ) {
            let schema = TemplateSchema::new(
                vec![crate::schema::SectionSchema::new(
                    "work",
                    declared.iter().map(|id| FieldSchema::new(id.clone(), FieldType::String)).collect(),
                )],
                None,
            );
            let content = json!({"work": fields.clone(), "other": {"a": 1}});
            let out = convert_content_for_backend(&content, &schema);

            prop_assert!(out.get("other").is_none());
            for (key, value) in out["work"].as_object().unwrap() {
                prop_assert!(declared.contains(key));
                prop_assert_eq!(Some(value), fields.get(key));
            }
        }
    }
}
