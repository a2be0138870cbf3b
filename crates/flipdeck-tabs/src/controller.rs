//! Tab Controller
//!
//! Binding takes a static snapshot of the triggers present in the scope
//! and the panels their identifiers resolve to. Every transition projects
//! the full selection state: hide everything, clear every trigger, then
//! apply the new selection. The full reset keeps mutual exclusion intact
//! even if external code touched the document between calls.

use std::collections::HashMap;

use flipdeck_dom::{Display, Document, NodeId, Scope};

use crate::selection::Selection;
use crate::selectors::TabSelectors;

struct TriggerBinding {
    node: NodeId,
    target: String,
}

pub struct TabController {
    scope: Scope,
    selectors: TabSelectors,
    /// Bound triggers, document order. Targets may be empty or unresolved;
    /// those triggers still take part in the baseline reset but are inert.
    triggers: Vec<TriggerBinding>,
    /// identifier -> panel snapshot, first successful resolution wins.
    panels: HashMap<String, NodeId>,
    selection: Selection,
}

impl TabController {
    /// Bind the tab group inside `scope`, establish the clean baseline and
    /// the default selection.
    ///
    /// Returns `None` when the scope holds no triggers: the instance has
    /// no tab group and panels are never examined.
    pub fn bind(doc: &mut Document, scope: Scope, selectors: TabSelectors) -> Option<Self> {
        let triggers: Vec<TriggerBinding> = doc
            .descendants(scope.root())
            .filter(|&n| doc.has_attr(n, &selectors.target_attr))
            .map(|node| TriggerBinding {
                node,
                target: doc.attr(node, &selectors.target_attr).unwrap_or("").to_string(),
            })
            .collect();

        if triggers.is_empty() {
            return None;
        }

        // Resolve each identifier once: scoped lookup first, then the
        // document-wide fallback for panels rendered outside the card.
        let mut panels: HashMap<String, NodeId> = HashMap::new();
        for binding in &triggers {
            if binding.target.is_empty() || panels.contains_key(&binding.target) {
                continue;
            }
            let panel = doc
                .scoped_element_by_id(scope.root(), &binding.target)
                .or_else(|| doc.element_by_id(&binding.target));
            if let Some(panel) = panel {
                panels.insert(binding.target.clone(), panel);
            }
        }

        tracing::debug!(
            root = ?scope.root(),
            triggers = triggers.len(),
            panels = panels.len(),
            "bound tab group"
        );

        let mut controller = Self {
            scope,
            selectors,
            triggers,
            panels,
            selection: Selection::None,
        };

        // Clean baseline regardless of what the renderer pre-set: every
        // resolved panel hidden, every trigger unmarked.
        controller.project(doc);

        // Default selection: the first trigger's target, if it resolved.
        let first_target = controller.triggers[0].target.clone();
        if controller.panels.contains_key(&first_target) {
            controller.set_active(doc, &first_target);
        }

        Some(controller)
    }

    /// Activate the panel named by `id`.
    ///
    /// An identifier with no resolved panel still clears all prior state
    /// and leaves nothing visible and nothing marked. That outcome is a
    /// valid terminal substate.
    pub fn set_active(&mut self, doc: &mut Document, id: &str) {
        self.selection = if self.panels.contains_key(id) {
            Selection::Active(id.to_string())
        } else {
            Selection::None
        };
        self.project(doc);

        tracing::debug!(root = ?self.scope.root(), selection = %self.selection, "tab selection");
    }

    /// Handle a click on `node`. Returns `true` when `node` is a bound
    /// trigger (the caller suppresses default navigation); the selection
    /// only changes when the trigger's target has a resolved panel.
    pub fn click(&mut self, doc: &mut Document, node: NodeId) -> bool {
        let Some(binding) = self.triggers.iter().find(|b| b.node == node) else {
            return false;
        };

        let target = binding.target.clone();
        if self.panels.contains_key(&target) {
            self.set_active(doc, &target);
        }
        true
    }

    /// Write the selection onto the document: full reset, then the active
    /// panel and its triggers.
    fn project(&self, doc: &mut Document) {
        for &panel in self.panels.values() {
            doc.set_display(panel, Display::None);
        }
        for binding in &self.triggers {
            doc.remove_class(binding.node, &self.selectors.active_class);
            if doc.has_attr(binding.node, &self.selectors.expanded_attr) {
                doc.set_attr(binding.node, &self.selectors.expanded_attr, "false");
            }
            if doc.has_attr(binding.node, &self.selectors.selected_attr) {
                doc.set_attr(binding.node, &self.selectors.selected_attr, "false");
            }
        }

        let Some(active_id) = self.selection.active_id() else {
            return;
        };

        if let Some(&panel) = self.panels.get(active_id) {
            doc.set_display(panel, Display::Block);
        }
        for binding in &self.triggers {
            if binding.target == active_id {
                doc.add_class(binding.node, &self.selectors.active_class);
                if doc.has_attr(binding.node, &self.selectors.expanded_attr) {
                    doc.set_attr(binding.node, &self.selectors.expanded_attr, "true");
                }
                if doc.has_attr(binding.node, &self.selectors.selected_attr) {
                    doc.set_attr(binding.node, &self.selectors.selected_attr, "true");
                }
            }
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_id(&self) -> Option<&str> {
        self.selection.active_id()
    }

    /// Resolved panel node for `id`, if the snapshot holds one.
    pub fn panel(&self, id: &str) -> Option<NodeId> {
        self.panels.get(id).copied()
    }

    /// All resolved panel identifiers and nodes.
    pub fn panels(&self) -> impl Iterator<Item = (&str, NodeId)> + '_ {
        self.panels.iter().map(|(id, &node)| (id.as_str(), node))
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}
