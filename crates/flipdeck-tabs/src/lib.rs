//! Flipdeck Tab Switching
//!
//! One tab group per widget instance: a set of triggers carrying target
//! identifiers, and the panels those identifiers resolve to. At most one
//! panel is visible at a time; the controller owns the selection state and
//! projects it onto the document on every transition.

mod controller;
mod selection;
mod selectors;

pub use controller::TabController;
pub use selection::Selection;
pub use selectors::TabSelectors;
