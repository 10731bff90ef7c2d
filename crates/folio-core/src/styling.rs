//! Styling vocabulary shared by the catalog and the schema adapter.
//!
//! Typography scales and spacing configs are fixed lookup tables keyed by
//! the names the backend uses (`"large"`, `"small"`, `"compact"`,
//! `"loose"`). Any other name, including none at all, selects the medium
//! table, so both lookups are total.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

// ============================================================================
// Typography
// ============================================================================

/// Font sizes per text role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographyScale {
    /// Display heading
    pub h1: String,
    /// Section heading
    pub h2: String,
    /// Sub-heading
    pub h3: String,
    /// Card / item heading
    pub h4: String,
    /// Body copy
    pub body: String,
    /// Secondary copy
    pub small: String,
    /// Captions, dates, labels
    pub meta: String,
}

impl TypographyScale {
    fn from_sizes(sizes: [&str; 7]) -> Self {
        let [h1, h2, h3, h4, body, small, meta] = sizes.map(String::from);
        Self {
            h1,
            h2,
            h3,
            h4,
            body,
            small,
            meta,
        }
    }

    /// Look up a scale by name: `"large"`, `"small"`, anything else is medium.
    pub fn for_name(scale: Option<&str>) -> Self {
        match scale {
            Some("large") => {
                Self::from_sizes(["96px", "64px", "40px", "28px", "20px", "16px", "14px"])
            }
            Some("small") => {
                Self::from_sizes(["48px", "32px", "24px", "18px", "15px", "13px", "11px"])
            }
            _ => Self::from_sizes(["72px", "48px", "32px", "24px", "18px", "14px", "12px"]),
        }
    }
}

/// Line heights; fixed regardless of backend input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeight {
    /// Headings
    pub tight: f64,
    /// Body copy
    pub normal: f64,
    /// Long-form text
    pub relaxed: f64,
}

impl Default for LineHeight {
    fn default() -> Self {
        Self {
            tight: 1.1,
            normal: 1.5,
            relaxed: 1.75,
        }
    }
}

/// Font weights; fixed regardless of backend input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeight {
    /// Light
    pub light: u16,
    /// Regular
    pub regular: u16,
    /// Medium
    pub medium: u16,
    /// Bold
    pub bold: u16,
}

impl Default for FontWeight {
    fn default() -> Self {
        Self {
            light: 300,
            regular: 400,
            medium: 500,
            bold: 700,
        }
    }
}

/// Typography block of a styling config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    /// Font sizes
    pub scale: TypographyScale,
    /// Line heights
    pub line_height: LineHeight,
    /// Font weights
    pub font_weight: FontWeight,
}

impl Typography {
    /// Typography with the named scale and the fixed line height / weight tables.
    pub fn with_scale(scale: Option<&str>) -> Self {
        Self {
            scale: TypographyScale::for_name(scale),
            line_height: LineHeight::default(),
            font_weight: FontWeight::default(),
        }
    }
}

// ============================================================================
// Spacing
// ============================================================================

/// Vertical rhythm values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingConfig {
    /// Between page sections
    pub section: String,
    /// Between elements inside a section
    pub element: String,
    /// Between tightly related elements
    pub tight: String,
    /// Baseline grid unit
    pub baseline: String,
}

impl SpacingConfig {
    fn from_values(section: &str, element: &str, tight: &str, baseline: &str) -> Self {
        Self {
            section: section.to_string(),
            element: element.to_string(),
            tight: tight.to_string(),
            baseline: baseline.to_string(),
        }
    }

    /// Look up spacing by name: `"compact"`, `"loose"`, anything else is medium.
    pub fn for_name(spacing: Option<&str>) -> Self {
        match spacing {
            Some("compact") => Self::from_values("64px", "16px", "8px", "8px"),
            Some("loose") => Self::from_values("160px", "40px", "16px", "8px"),
            _ => Self::from_values("120px", "32px", "12px", "8px"),
        }
    }
}

// ============================================================================
// Full styling config
// ============================================================================

/// Heading / body / monospace font stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    /// Headings
    pub heading: String,
    /// Body copy
    pub body: String,
    /// Code and meta text
    pub mono: String,
}

/// Column grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Column count
    pub columns: u32,
    /// Gap between columns
    pub gutter: String,
    /// Maximum content width
    pub max_width: String,
}

/// Corner radii.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderRadius {
    /// Square corners
    pub none: String,
    /// Subtle rounding
    pub small: String,
    /// Cards and images
    pub medium: String,
}

/// A template's complete styling.
///
/// `grid` and `border_radius` are only present on fully specified
/// defaults; when omitted they are absent from the serialized form rather
/// than `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylingConfig {
    /// Named colors (`primary`, `background`, ...)
    pub colors: Map<String, Value>,
    /// Font stacks
    pub fonts: Fonts,
    /// Sizes, line heights, weights
    pub typography: Typography,
    /// Column grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridConfig>,
    /// Vertical rhythm
    pub spacing: SpacingConfig,
    /// Corner radii
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
}

impl StylingConfig {
    /// The fully specified Echelon (Swiss minimal) styling.
    ///
    /// This is also what the schema adapter returns when the backend
    /// supplies no styling at all.
    pub fn echelon() -> Self {
        Self {
            colors: color_map(json!({
                "primary": "#000000",
                "secondary": "#666666",
                "accent": "#FF3B30",
                "background": "#FFFFFF",
                "surface": "#F5F5F5",
                "text": "#000000",
                "textSecondary": "#666666",
                "border": "#E5E5E5"
            })),
            fonts: Fonts {
                heading: "'Neue Haas Grotesk Display', 'Helvetica Neue', Helvetica, Arial, sans-serif"
                    .to_string(),
                body: "'Inter', 'Helvetica Neue', Helvetica, Arial, sans-serif".to_string(),
                mono: "'IBM Plex Mono', 'SF Mono', monospace".to_string(),
            },
            typography: Typography::with_scale(None),
            grid: Some(GridConfig {
                columns: 12,
                gutter: "24px".to_string(),
                max_width: "1440px".to_string(),
            }),
            spacing: SpacingConfig::for_name(None),
            border_radius: Some(BorderRadius {
                none: "0".to_string(),
                small: "2px".to_string(),
                medium: "4px".to_string(),
            }),
        }
    }

    /// Convert into a JSON object for merging and serialization.
    pub fn into_value(self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

/// Unwrap a `json!` object literal into a color map.
pub(crate) fn color_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
