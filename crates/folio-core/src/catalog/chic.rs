//! Chic: editorial fashion lookbook.

use serde_json::json;

use super::structure;
use crate::component::ComponentRef;
use crate::styling::{Fonts, GridConfig, SpacingConfig, StylingConfig, Typography, color_map};
use crate::template::TemplateDefinition;

pub(super) fn definition() -> TemplateDefinition {
    TemplateDefinition {
        id: "chic".to_string(),
        name: "Chic".to_string(),
        description: "Editorial lookbook layout for fashion, styling, and photography.".to_string(),
        category: "fashion".to_string(),
        preview: Some("/templates/chic-preview.jpg".to_string()),
        structure: structure(&[
            ("hero", "editorial_cover", &["name", "tagline", "coverImage"]),
            ("about", "offset_portrait", &["heading", "bio", "portrait"]),
            ("work", "lookbook_spread", &["heading", "projects"]),
            ("contact", "inline_links", &["heading", "email", "agency"]),
        ]),
        default_content: json!({
            "hero": {
                "name": "Maison Studio",
                "tagline": "Styling · Creative Direction · Photography",
                "coverImage": ""
            },
            "about": {
                "heading": "Behind the lens",
                "bio": "Creative direction for independent labels and magazines, from concept to final frame.",
                "portrait": ""
            },
            "work": {
                "heading": "Lookbook",
                "projects": [
                    {
                        "id": 1,
                        "title": "Resort Collection",
                        "description": "Campaign styling on location in Lisbon.",
                        "image": "",
                        "meta": "SS25",
                        "category": "Campaign"
                    }
                ]
            },
            "contact": {
                "heading": "Bookings",
                "email": "bookings@example.com",
                "agency": ""
            }
        }),
        styling: StylingConfig {
            colors: color_map(json!({
                "primary": "#1C1C1C",
                "secondary": "#B8A99A",
                "accent": "#C9A96E",
                "background": "#F7F3EE",
                "text": "#1C1C1C",
                "textSecondary": "#6E6259"
            })),
            fonts: Fonts {
                heading: "'Playfair Display', Didot, serif".to_string(),
                body: "'Montserrat', Arial, sans-serif".to_string(),
                mono: "monospace".to_string(),
            },
            typography: Typography::with_scale(Some("large")),
            grid: Some(GridConfig {
                columns: 8,
                gutter: "32px".to_string(),
                max_width: "1280px".to_string(),
            }),
            spacing: SpacingConfig::for_name(None),
            border_radius: None,
        }
        .into_value(),
        component: ComponentRef::Chic,
    }
}
