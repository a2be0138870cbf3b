//! Flipdeck Core
//!
//! Ties the pieces together: discover widget roots in a parsed document,
//! bind a flip controller and (when the markup has one) a tab controller
//! per root, and route click events to the owning instance. Instances are
//! independent; the only thing they share is the document they project
//! onto.

mod config;
mod discover;
mod error;
mod page;
mod snapshot;

pub use config::Config;
pub use discover::discover;
pub use error::CoreError;
pub use page::{ClickOutcome, Page, WidgetInstance};
pub use snapshot::{InstanceSnapshot, PageSnapshot, TabGroupSnapshot};

// Re-export the component crates
pub use flipdeck_dom::{Display, Document, NodeId, Scope};
pub use flipdeck_flip::{FlipController, FlipSelectors};
pub use flipdeck_tabs::{Selection, TabController, TabSelectors};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
