//! Widget scope handles

use crate::document::NodeId;

/// Handle to one widget instance's subtree.
///
/// Controllers bind against a scope, never against the whole document;
/// this keeps instance isolation a property of the API rather than a
/// convention each caller has to remember.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    root: NodeId,
}

impl Scope {
    pub fn new(root: NodeId) -> Self {
        Self { root }
    }

    /// Root element of the widget subtree.
    pub fn root(&self) -> NodeId {
        self.root
    }
}
