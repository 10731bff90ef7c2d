//! Serene: soft, airy gallery with a small shop.

use serde_json::json;

use super::structure;
use crate::component::ComponentRef;
use crate::styling::{BorderRadius, Fonts, SpacingConfig, StylingConfig, Typography, color_map};
use crate::template::TemplateDefinition;

pub(super) fn definition() -> TemplateDefinition {
    TemplateDefinition {
        id: "serene".to_string(),
        name: "Serene".to_string(),
        description: "Calm, light-filled gallery for illustrators and fine artists who sell prints."
            .to_string(),
        category: "gallery".to_string(),
        preview: Some("/templates/serene-preview.jpg".to_string()),
        structure: structure(&[
            ("navigation", "centered_nav", &["logo", "menuItems"]),
            ("hero", "soft_fullbleed", &["title", "subtitle", "backgroundImage"]),
            ("about", "centered_story", &["title", "bio", "image"]),
            ("gallery", "masonry_shop", &["title", "images"]),
            ("contact", "soft_form", &["title", "email", "instagram"]),
        ]),
        default_content: json!({
            "navigation": {
                "logo": "Serene",
                "menuItems": [
                    {"label": "Home", "link": "#home"},
                    {"label": "About", "link": "#about"},
                    {"label": "Gallery", "link": "#gallery"}
                ]
            },
            "hero": {
                "title": "Quiet moments, painted slowly",
                "subtitle": "Watercolor & ink studies",
                "backgroundImage": ""
            },
            "about": {
                "title": "The Studio",
                "bio": "Working from a small studio by the sea, I paint the light and stillness of everyday places.",
                "image": ""
            },
            "gallery": {
                "title": "Collection",
                "images": [
                    {
                        "image": "",
                        "title": "Morning Tide",
                        "description": "Watercolor on cotton paper",
                        "price": "$120",
                        "caption": "Limited edition of 50"
                    },
                    {
                        "image": "",
                        "title": "Harbor Fog",
                        "description": "Ink and wash",
                        "price": "$95",
                        "caption": "Signed print"
                    }
                ]
            },
            "contact": {
                "title": "Say hello",
                "email": "studio@example.com",
                "instagram": ""
            }
        }),
        styling: StylingConfig {
            colors: color_map(json!({
                "primary": "#4A5D5E",
                "secondary": "#8FA3A4",
                "accent": "#D9B89C",
                "background": "#FAF8F5",
                "surface": "#FFFFFF",
                "text": "#3A3A3A",
                "textSecondary": "#7A7A7A",
                "border": "#ECE7E1"
            })),
            fonts: Fonts {
                heading: "'Cormorant Garamond', Georgia, serif".to_string(),
                body: "'Lato', 'Helvetica Neue', Arial, sans-serif".to_string(),
                mono: "monospace".to_string(),
            },
            typography: Typography::with_scale(Some("small")),
            grid: None,
            spacing: SpacingConfig::for_name(Some("loose")),
            border_radius: Some(BorderRadius {
                none: "0".to_string(),
                small: "8px".to_string(),
                medium: "16px".to_string(),
            }),
        }
        .into_value(),
        component: ComponentRef::Serene,
    }
}
