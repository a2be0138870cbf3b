//! Instance discovery
//!
//! A page may carry any number of independent widget instances. Discovery
//! enumerates their roots in document order; an empty result is a valid
//! outcome and the rest of the system does no further work.

use flipdeck_dom::{Document, Scope};

use crate::config::Config;

/// Find every widget root: elements matching the marker class or the
/// marker attribute, document order, each yielded once.
pub fn discover(doc: &Document, config: &Config) -> Vec<Scope> {
    let scopes: Vec<Scope> = doc
        .descendants(doc.root())
        .filter(|&n| {
            doc.has_class(n, &config.marker_class) || doc.has_attr(n, &config.marker_attr)
        })
        .map(Scope::new)
        .collect();

    tracing::debug!(count = scopes.len(), "discovered widget roots");

    scopes
}
