//! Echelon: Swiss-style minimal portfolio, the primary template.

use serde_json::json;

use super::{PRIMARY_TEMPLATE_ID, structure};
use crate::component::ComponentRef;
use crate::styling::StylingConfig;
use crate::template::TemplateDefinition;

pub(super) fn definition() -> TemplateDefinition {
    TemplateDefinition {
        id: PRIMARY_TEMPLATE_ID.to_string(),
        name: "Echelon".to_string(),
        description: "Swiss-inspired minimal grid for designers who let the work speak."
            .to_string(),
        category: "minimal".to_string(),
        preview: Some("/templates/echelon-preview.jpg".to_string()),
        structure: structure(&[
            ("navigation", "sticky_nav", &["logo", "menuItems"]),
            ("hero", "swiss_minimal", &["title", "subtitle", "description"]),
            ("about", "two_column_swiss", &["title", "bio", "image", "skills"]),
            ("work", "project_list_swiss", &["title", "projects"]),
            ("gallery", "image_grid_swiss", &["title", "images"]),
            ("contact", "minimal_swiss", &["title", "email", "phone", "social"]),
        ]),
        default_content: json!({
            "navigation": {
                "logo": "ECHELON",
                "menuItems": [
                    {"label": "Work", "link": "#work"},
                    {"label": "About", "link": "#about"},
                    {"label": "Contact", "link": "#contact"}
                ]
            },
            "hero": {
                "title": "Design is thinking made visual",
                "subtitle": "Graphic Designer & Art Director",
                "description": "Independent studio practice focused on identity systems, editorial design, and typography."
            },
            "about": {
                "title": "About",
                "bio": "I design clear, functional visual systems rooted in the International Typographic Style. Grids, hierarchy, and restraint guide every project.",
                "image": "",
                "skills": ["Brand Identity", "Editorial Design", "Typography", "Art Direction"]
            },
            "work": {
                "title": "Selected Work",
                "projects": [
                    {
                        "id": 1,
                        "title": "Kunsthalle Identity",
                        "description": "Visual identity for a contemporary art space.",
                        "image": "",
                        "meta": "2024 · Identity",
                        "category": "Branding"
                    },
                    {
                        "id": 2,
                        "title": "Raster Magazine",
                        "description": "Editorial system for a quarterly architecture magazine.",
                        "image": "",
                        "meta": "2023 · Editorial",
                        "category": "Editorial"
                    }
                ]
            },
            "gallery": {
                "title": "Archive",
                "images": [
                    {"src": "", "caption": "Poster series", "meta": "2024"},
                    {"src": "", "caption": "Type specimen", "meta": "2023"},
                    {"src": "", "caption": "Exhibition signage", "meta": "2023"}
                ]
            },
            "contact": {
                "title": "Contact",
                "email": "hello@example.com",
                "phone": "",
                "social": {
                    "instagram": "",
                    "linkedin": "",
                    "behance": ""
                }
            }
        }),
        styling: StylingConfig::echelon().into_value(),
        component: ComponentRef::Echelon,
    }
}
