//! Flipdeck Flip Toggle
//!
//! A widget root carries a single boolean "flipped" state, rendered as the
//! presence or absence of a marker class on the root. Any bound trigger
//! inside the root toggles it. Stylesheets key the visual flip transition
//! off the marker class; this crate only owns the state and its
//! projection.

mod controller;
mod selectors;

pub use controller::FlipController;
pub use selectors::FlipSelectors;
