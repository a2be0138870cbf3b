//! Flipdeck Document Substrate
//!
//! A small mutable element tree that widget controllers write their state
//! onto. The tree is built once from server-rendered markup and mutated in
//! place; controllers own their state records and treat the tree purely as
//! a projection target.

mod document;
mod parse;
mod scope;

pub use document::{Descendants, Display, Document, NodeId};
pub use scope::Scope;
