//! Outline Processing
//!
//! Reading the indentation-coded outline and deriving names from its titles.
//!
//! - [`parser`]: text → node paths
//! - [`expand`]: node paths → prefix-closed traversal order
//! - [`sanitize`]: titles → anchors, directory names, component names

pub mod expand;
pub mod parser;
pub mod sanitize;

pub use expand::expand_ancestors;
pub use parser::OutlineParser;
pub use sanitize::{Sanitizer, strip_markup};
