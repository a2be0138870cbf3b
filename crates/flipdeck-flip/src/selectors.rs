//! Flip selector configuration

use serde::{Deserialize, Serialize};

/// Markup hooks the flip controller binds against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipSelectors {
    /// Class marking a flip trigger.
    pub trigger_class: String,
    /// Attribute alternative to the trigger class.
    pub trigger_attr: String,
    /// Class projected onto the root while flipped.
    pub flipped_class: String,
    /// Pressed-state attribute mirrored on triggers that carry it.
    pub pressed_attr: String,
}

impl Default for FlipSelectors {
    fn default() -> Self {
        Self {
            trigger_class: "flipToggle".to_string(),
            trigger_attr: "data-flip-toggle".to_string(),
            flipped_class: "flipped".to_string(),
            pressed_attr: "aria-pressed".to_string(),
        }
    }
}
