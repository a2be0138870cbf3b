//! Tab selector configuration

use serde::{Deserialize, Serialize};

/// Markup hooks the tab controller binds against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSelectors {
    /// Attribute on a trigger naming the panel it activates.
    pub target_attr: String,
    /// Class projected onto active triggers.
    pub active_class: String,
    /// Expanded-state attribute kept in sync on triggers that carry it.
    pub expanded_attr: String,
    /// Selected-state attribute kept in sync on triggers that carry it.
    pub selected_attr: String,
}

impl Default for TabSelectors {
    fn default() -> Self {
        Self {
            target_attr: "data-target".to_string(),
            active_class: "active".to_string(),
            expanded_attr: "aria-expanded".to_string(),
            selected_attr: "aria-selected".to_string(),
        }
    }
}
