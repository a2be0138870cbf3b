//! Serializable state snapshots
//!
//! Read from the controllers' state records, not from the document; the
//! document is the projection, the controllers are the source of truth.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::page::WidgetInstance;

#[derive(Debug, Serialize)]
pub struct PageSnapshot {
    pub instances: Vec<InstanceSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct InstanceSnapshot {
    pub flipped: bool,
    pub flip_triggers: usize,
    /// Absent when the instance markup has no tab triggers at all.
    pub tab_group: Option<TabGroupSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct TabGroupSnapshot {
    /// Identifier of the active panel, if any.
    pub active: Option<String>,
    /// Resolved panel identifiers and whether each is shown.
    pub panels: BTreeMap<String, bool>,
}

impl PageSnapshot {
    pub(crate) fn capture(instances: &[WidgetInstance]) -> Self {
        let instances = instances
            .iter()
            .map(|instance| InstanceSnapshot {
                flipped: instance.flip().is_flipped(),
                flip_triggers: instance.flip().trigger_count(),
                tab_group: instance.tabs().map(|tabs| TabGroupSnapshot {
                    active: tabs.active_id().map(str::to_string),
                    panels: tabs
                        .panels()
                        .map(|(id, _)| (id.to_string(), tabs.selection().is_active(id)))
                        .collect(),
                }),
            })
            .collect();

        Self { instances }
    }
}
