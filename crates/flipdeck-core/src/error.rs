//! Core error types
//!
//! Missing markup is never a fault: absent roots, triggers or panels all
//! degrade to no-ops. Errors exist only at the programmatic surface.

use flipdeck_dom::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A driver passed a node handle that does not belong to the page's
    /// document.
    #[error("unknown node handle: {0:?}")]
    UnknownNode(NodeId),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
