//! Flip Controller
//!
//! Owns the per-instance flipped flag and projects it onto the document:
//! the marker class on the scope root, and the pressed-state attribute on
//! every trigger that already carried one when bound. The document is
//! never read back after binding.

use flipdeck_dom::{Document, NodeId, Scope};

use crate::selectors::FlipSelectors;

pub struct FlipController {
    scope: Scope,
    selectors: FlipSelectors,
    /// All bound triggers, document order.
    triggers: Vec<NodeId>,
    /// Triggers that carried the pressed attribute at bind time. The
    /// attribute is never added to the others.
    mirrored: Vec<NodeId>,
    flipped: bool,
}

impl FlipController {
    /// Bind every flip trigger inside `scope`.
    ///
    /// The initial flipped state is seeded from the marker class the
    /// renderer may have pre-set on the root; afterwards the class is pure
    /// projection.
    pub fn bind(doc: &Document, scope: Scope, selectors: FlipSelectors) -> Self {
        let triggers: Vec<NodeId> = doc
            .descendants(scope.root())
            .filter(|&n| {
                doc.has_class(n, &selectors.trigger_class) || doc.has_attr(n, &selectors.trigger_attr)
            })
            .collect();

        let mirrored: Vec<NodeId> = triggers
            .iter()
            .copied()
            .filter(|&n| doc.has_attr(n, &selectors.pressed_attr))
            .collect();

        let flipped = doc.has_class(scope.root(), &selectors.flipped_class);

        tracing::debug!(
            root = ?scope.root(),
            triggers = triggers.len(),
            flipped,
            "bound flip triggers"
        );

        Self {
            scope,
            selectors,
            triggers,
            mirrored,
            flipped,
        }
    }

    /// Toggle the flipped state and project it.
    ///
    /// Each call toggles exactly once; repeated calls alternate
    /// deterministically.
    pub fn toggle(&mut self, doc: &mut Document) {
        self.flipped = !self.flipped;
        self.project(doc);

        tracing::debug!(root = ?self.scope.root(), flipped = self.flipped, "flip toggled");
    }

    /// Handle a click on `node`. Returns `true` when `node` is a bound
    /// trigger (the click counts as consumed and default navigation is
    /// suppressed by the caller), `false` otherwise.
    pub fn click(&mut self, doc: &mut Document, node: NodeId) -> bool {
        if !self.triggers.contains(&node) {
            return false;
        }
        self.toggle(doc);
        true
    }

    fn project(&self, doc: &mut Document) {
        let root = self.scope.root();
        if self.flipped {
            doc.add_class(root, &self.selectors.flipped_class);
        } else {
            doc.remove_class(root, &self.selectors.flipped_class);
        }

        let value = if self.flipped { "true" } else { "false" };
        for &trigger in &self.mirrored {
            doc.set_attr(trigger, &self.selectors.pressed_attr, value);
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }
}
