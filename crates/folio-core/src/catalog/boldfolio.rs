//! BoldFolio: loud type, big blocks of color.

use serde_json::json;

use super::structure;
use crate::component::ComponentRef;
use crate::styling::{BorderRadius, Fonts, SpacingConfig, StylingConfig, Typography, color_map};
use crate::template::TemplateDefinition;

pub(super) fn definition() -> TemplateDefinition {
    TemplateDefinition {
        id: "boldfolio".to_string(),
        name: "BoldFolio".to_string(),
        description: "High-contrast, type-driven portfolio for developers and product designers."
            .to_string(),
        category: "bold".to_string(),
        preview: Some("/templates/boldfolio-preview.jpg".to_string()),
        structure: structure(&[
            ("hero", "oversized_type", &["headline", "subheadline", "cta"]),
            ("about", "split_block", &["title", "bio", "skills"]),
            ("work", "case_study_cards", &["title", "projects"]),
            ("services", "numbered_list", &["title", "items"]),
            ("contact", "big_cta", &["title", "email", "cta"]),
        ]),
        default_content: json!({
            "hero": {
                "headline": "I BUILD THINGS PEOPLE USE.",
                "subheadline": "Product designer and front-end engineer",
                "cta": {"label": "See the work", "link": "#work"}
            },
            "about": {
                "title": "Hi.",
                "bio": "Ten years shipping products at startups and agencies. I care about speed, clarity, and details nobody notices until they are missing.",
                "skills": ["Product Design", "Design Systems", "React", "Prototyping"]
            },
            "work": {
                "title": "Case Studies",
                "projects": [
                    {
                        "id": 1,
                        "title": "Checkout Redesign",
                        "description": "Cut checkout drop-off by a third for a retail platform.",
                        "image": "",
                        "meta": "2024 · Product",
                        "category": "Product"
                    },
                    {
                        "id": 2,
                        "title": "Atlas Design System",
                        "description": "Component library shared by six product teams.",
                        "image": "",
                        "meta": "2023 · Systems",
                        "category": "Systems"
                    }
                ]
            },
            "services": {
                "title": "What I do",
                "items": [
                    {"title": "Product Design", "description": "From discovery to shipped UI."},
                    {"title": "Design Systems", "description": "Tokens, components, documentation."},
                    {"title": "Prototyping", "description": "Code prototypes to test ideas fast."}
                ]
            },
            "contact": {
                "title": "LET'S TALK.",
                "email": "me@example.com",
                "cta": {"label": "Start a project", "link": "mailto:me@example.com"}
            }
        }),
        styling: StylingConfig {
            colors: color_map(json!({
                "primary": "#111111",
                "secondary": "#FFE600",
                "accent": "#FF4D00",
                "background": "#FFFFFF",
                "text": "#111111",
                "textSecondary": "#444444",
                "border": "#111111"
            })),
            fonts: Fonts {
                heading: "'Archivo Black', 'Arial Black', sans-serif".to_string(),
                body: "'Space Grotesk', Arial, sans-serif".to_string(),
                mono: "'JetBrains Mono', monospace".to_string(),
            },
            typography: Typography::with_scale(Some("large")),
            grid: None,
            spacing: SpacingConfig::for_name(Some("compact")),
            border_radius: Some(BorderRadius {
                none: "0".to_string(),
                small: "0".to_string(),
                medium: "0".to_string(),
            }),
        }
        .into_value(),
        component: ComponentRef::BoldFolio,
    }
}
