//! Release manifest (`releases.json`) generation

pub mod scanner;
pub mod types;

pub use scanner::{ManifestScanner, compare_versions_desc, version_key};
pub use types::{FileInfo, Manifest, Release};
