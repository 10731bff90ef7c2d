//! Backend template schema types.
//!
//! These mirror the JSON documents served by `GET /api/templates[/{id}]`.
//! Deserialization is lenient: unknown keys are kept in `extra`, a section
//! `order` may be a plain integer or a MongoDB extended-JSON wrapper
//! (`{"$numberInt": "3"}`), and any field `type` outside
//! `string`/`array`/`object` is kept as an opaque name. A `null` is read as
//! the field's default wherever a missing key would be.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// FieldType
// ============================================================================

/// Declared type of a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Plain text (also the default when no type is declared)
    #[default]
    String,
    /// List value; seeded as `[]`
    Array,
    /// Nested map value; seeded as `{}`
    Object,
    /// Any other declared type, e.g. `"image"` or `"richtext"`
    Other(String),
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => FieldType::String,
            "array" => FieldType::Array,
            "object" => FieldType::Object,
            _ => FieldType::Other(value),
        }
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Array => f.write_str("array"),
            FieldType::Object => f.write_str("object"),
            FieldType::Other(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// Sections and fields
// ============================================================================

/// One editable field of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field id (key in the section's content map)
    pub id: String,
    /// Declared type
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: FieldType,
    /// Seed value for non-collection fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<Value>,
    /// Whether the field must be filled in
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
}

impl FieldSchema {
    /// Create a field with the given id and type.
    pub fn new(id: impl Into<String>, kind: FieldType) -> Self {
        Self {
            id: id.into(),
            kind,
            placeholder: None,
            required: false,
        }
    }
}

/// One section of a template schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSchema {
    /// Section id (key in the content map)
    pub id: String,
    /// Whether the section must be present
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    /// Declared display order
    #[serde(
        default,
        deserialize_with = "deserialize_order",
        skip_serializing_if = "Option::is_none"
    )]
    pub order: Option<i64>,
    /// Fields in declaration order
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<FieldSchema>,
}

impl SectionSchema {
    /// Create a section with the given id and fields.
    pub fn new(id: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            id: id.into(),
            required: false,
            order: None,
            fields,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrder {
    Int(i64),
    Wrapped {
        #[serde(rename = "$numberInt")]
        number_int: IntOrString,
    },
}

fn deserialize_order<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawOrder>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawOrder::Int(n)) => Ok(Some(n)),
        Some(RawOrder::Wrapped { number_int }) => match number_int {
            IntOrString::Int(n) => Ok(Some(n)),
            IntOrString::Str(s) => s.trim().parse().map(Some).map_err(|e| {
                serde::de::Error::custom(format!("invalid $numberInt '{s}': {e}"))
            }),
        },
    }
}

// ============================================================================
// Styling
// ============================================================================

/// Font choices and scale name from the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendTypography {
    /// Heading font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    /// Body font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    /// `"large"`, `"small"`, or anything else for medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,
}

/// Styling block of a backend schema.
///
/// Keys beyond these (border radius, grid columns) are accepted and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendStyling {
    /// Named colors, used verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<Map<String, Value>>,
    /// Fonts and scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<BackendTypography>,
    /// `"compact"`, `"loose"`, or anything else for medium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
}

// ============================================================================
// Template schema
// ============================================================================

/// The `schema` block: sections and optional styling.
///
/// A deserialized block also keeps the document exactly as received, see
/// [`TemplateSchema::original`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct TemplateSchema {
    /// Sections in array order
    pub sections: Vec<SectionSchema>,
    /// Styling, if the backend supplies any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styling: Option<BackendStyling>,
    #[serde(skip)]
    original: Option<Value>,
}

#[derive(Deserialize)]
struct TemplateSchemaFields {
    #[serde(default, deserialize_with = "null_as_default")]
    sections: Vec<SectionSchema>,
    #[serde(default)]
    styling: Option<BackendStyling>,
}

impl TryFrom<Value> for TemplateSchema {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = TemplateSchemaFields::deserialize(&raw)?;
        Ok(Self {
            sections: fields.sections,
            styling: fields.styling,
            original: Some(raw),
        })
    }
}

impl TemplateSchema {
    /// Create a schema block from typed parts.
    pub fn new(sections: Vec<SectionSchema>, styling: Option<BackendStyling>) -> Self {
        Self {
            sections,
            styling,
            original: None,
        }
    }

    /// The block as the backend sent it, including keys not modeled here.
    ///
    /// `None` for blocks built in code. Edits to the typed fields are not
    /// reflected.
    pub fn original(&self) -> Option<&Value> {
        self.original.as_ref()
    }

    /// [`original`](Self::original) when present, else the typed fields.
    pub fn to_value(&self) -> Value {
        match &self.original {
            Some(raw) => raw.clone(),
            None => serde_json::to_value(self).unwrap_or(Value::Null),
        }
    }
}

/// A template document as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendTemplateSchema {
    /// Stable template id (`"echolon"`, `"serene"`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Database id: a string or `{"$oid": "..."}`
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Showcase category
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// URL slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Preview image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Template version, as the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    /// Whether the template is offered to users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Whether the template requires a paid plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    /// Sections and styling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<TemplateSchema>,
    /// Keys not modeled above, kept for round-tripping
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BackendTemplateSchema {
    /// Best available id: `templateId`, else `_id` as a string or `$oid`.
    pub fn id(&self) -> Option<&str> {
        if let Some(id) = self.template_id.as_deref() {
            return Some(id);
        }
        match self.object_id.as_ref()? {
            Value::String(id) => Some(id.as_str()),
            Value::Object(map) => map.get("$oid").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Declared sections; empty when the schema block is absent.
    pub fn sections(&self) -> &[SectionSchema] {
        self.schema
            .as_ref()
            .map(|s| s.sections.as_slice())
            .unwrap_or_default()
    }

    /// Declared styling, if any.
    pub fn styling(&self) -> Option<&BackendStyling> {
        self.schema.as_ref()?.styling.as_ref()
    }
}
