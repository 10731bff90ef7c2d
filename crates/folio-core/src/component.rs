//! References to the presentational template implementations.
//!
//! The core never renders; it only names which component a front end
//! should mount for a given template.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A renderable template implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentRef {
    /// Swiss-style minimal layout (the primary template).
    #[serde(rename = "EchelonTemplate")]
    Echelon,
    /// Soft gallery/shop layout.
    #[serde(rename = "SereneTemplate")]
    Serene,
    /// Editorial fashion layout.
    #[serde(rename = "ChicTemplate")]
    Chic,
    /// High-contrast bold typography layout.
    #[serde(rename = "BoldFolioTemplate")]
    BoldFolio,
}

impl ComponentRef {
    /// All components, in catalog order.
    pub const ALL: [ComponentRef; 4] = [
        ComponentRef::Echelon,
        ComponentRef::Serene,
        ComponentRef::Chic,
        ComponentRef::BoldFolio,
    ];

    /// Component used when a template id is not recognized.
    pub const PRIMARY: ComponentRef = ComponentRef::Echelon;

    /// Stable component name as exported by the front end.
    pub fn name(self) -> &'static str {
        match self {
            ComponentRef::Echelon => "EchelonTemplate",
            ComponentRef::Serene => "SereneTemplate",
            ComponentRef::Chic => "ChicTemplate",
            ComponentRef::BoldFolio => "BoldFolioTemplate",
        }
    }

    /// Resolve a template id through the fixed id → component table.
    ///
    /// Both spellings `echolon` and `echelon` resolve to [`ComponentRef::Echelon`].
    /// Unrecognized ids resolve to [`ComponentRef::PRIMARY`], never to nothing.
    pub fn for_template_id(template_id: &str) -> ComponentRef {
        match template_id {
            "echolon" | "echelon" => ComponentRef::Echelon,
            "serene" => ComponentRef::Serene,
            "chic" => ComponentRef::Chic,
            "boldfolio" => ComponentRef::BoldFolio,
            _ => ComponentRef::PRIMARY,
        }
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
