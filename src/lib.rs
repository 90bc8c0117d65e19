//! docscaffold - Outline-Driven Documentation Scaffolding
//!
//! Reads an indented outline of documentation sections and keeps a
//! component tree in sync with it:
//!
//! - one directory with a placeholder `Index.vue` per section, never
//!   overwriting authored content
//! - a drift audit for directories and files the outline no longer names
//! - a regenerated aggregator page with a table of contents, anchored
//!   headings, and one component per section
//!
//! A separate manifest generator lists published release artifacts as JSON.
//!
//! ## Quick Start
//!
//! ```ignore
//! use docscaffold::{ConfigLoader, Generator};
//!
//! let config = ConfigLoader::load(None)?;
//! let summary = Generator::new(config).run("docscaffold generate")?;
//! println!("wrote {}", summary.aggregator_path.display());
//! ```
//!
//! ## Modules
//!
//! - [`outline`]: outline parsing, ancestor expansion, name sanitization
//! - [`scaffold`]: directory materialization and drift audit
//! - [`render`]: aggregator page rendering
//! - [`manifest`]: releases manifest scanning
//! - [`config`]: layered configuration

pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod manifest;
pub mod outline;
pub mod render;
pub mod scaffold;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use generator::{GenerateSummary, Generator};
pub use types::error::{Result, ResultExt, ScaffoldError};
pub use types::NodePath;

pub use manifest::{Manifest, ManifestScanner, Release};
pub use outline::{OutlineParser, Sanitizer, expand_ancestors};
pub use render::AggregatorRenderer;
pub use scaffold::{AuditFinding, AuditReport, ConsistencyAuditor, ScaffoldMaterializer};
