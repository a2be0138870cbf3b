//! Widget configuration
//!
//! The markup contract is configurable; defaults match the catalog
//! renderer's class and attribute names.

use flipdeck_flip::FlipSelectors;
use flipdeck_tabs::TabSelectors;
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class marking a widget instance root.
    pub marker_class: String,
    /// Attribute alternative to the marker class.
    pub marker_attr: String,
    /// Flip controller hooks.
    pub flip: FlipSelectors,
    /// Tab controller hooks.
    pub tabs: TabSelectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_class: "flipBox".to_string(),
            marker_attr: "data-flip-container".to_string(),
            flip: FlipSelectors::default(),
            tabs: TabSelectors::default(),
        }
    }
}

impl Config {
    /// Load overrides from a JSON document; omitted fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
