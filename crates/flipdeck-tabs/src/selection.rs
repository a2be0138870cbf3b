//! Tab selection state

use serde::{Deserialize, Serialize};

/// The per-instance selection record.
///
/// `None` is a valid terminal state, not an error: it covers both "no
/// trigger resolved a panel at initialization" and "an unresolved
/// identifier was activated", and leaves nothing visible and nothing
/// marked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// No panel visible, no trigger marked active.
    None,
    /// The panel with this identifier is visible; triggers targeting it
    /// are marked active.
    Active(String),
}

impl Selection {
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Active(id) => Some(id),
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::None => write!(f, "none"),
            Selection::Active(id) => write!(f, "{}", id),
        }
    }
}
