//! The statically bundled template catalog.
//!
//! Declaration order here is the order templates appear on the showcase
//! page and in [`TemplateRegistry::all`](crate::TemplateRegistry::all).

mod boldfolio;
mod chic;
mod echelon;
mod serene;

use indexmap::IndexMap;

use crate::template::{SectionStructure, Structure, TemplateDefinition};

/// Canonical id of the primary template.
///
/// Historical spelling; `echelon` is accepted as an alias.
pub const PRIMARY_TEMPLATE_ID: &str = "echolon";

/// Build every catalog entry in declaration order.
pub fn builtin_templates() -> Vec<TemplateDefinition> {
    vec![
        echelon::definition(),
        serene::definition(),
        chic::definition(),
        boldfolio::definition(),
    ]
}

/// Build a [`Structure`] from `(section, layout, editable fields)` rows.
///
/// The section id doubles as the section kind.
fn structure(rows: &[(&str, &str, &[&str])]) -> Structure {
    rows.iter()
        .map(|(section, layout, editable)| {
            (
                (*section).to_string(),
                SectionStructure::new(section, layout, editable),
            )
        })
        .collect::<IndexMap<_, _>>()
}
