//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single error type (ScaffoldError) shared by every module
//! - Structured variants carry the offending path where one exists
//! - Audit findings are NOT errors; they travel in `AuditReport`
//! - No panic/unwrap outside tests

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ScaffoldError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The outline source file does not exist; raised before any mutation
    #[error("outline not found: {}", path.display())]
    OutlineNotFound { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    /// A release directory that cannot be listed in the manifest
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Filesystem operation failed; carries the path-bearing context
    #[error("Filesystem error: {0}")]
    Fs(String),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Create an outline-not-found error for the given path
    pub fn outline_not_found(path: impl Into<PathBuf>) -> Self {
        Self::OutlineNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a manifest error
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest(message.into())
    }
}

// =============================================================================
// Result Extension
// =============================================================================

/// Extension trait for adding context to results
pub trait ResultExt<T> {
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| ScaffoldError::Fs(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_not_found_display() {
        let err = ScaffoldError::outline_not_found("docs/outline.txt");
        assert_eq!(err.to_string(), "outline not found: docs/outline.txt");
    }

    #[test]
    fn test_io_error_converts() {
        let err: ScaffoldError = std::io::Error::other("disk full").into();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_with_context_fn_wraps_as_fs_error() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("denied"));
        let err = res
            .with_context_fn(|| "write Guide/Index.vue")
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Fs(_)));
        assert_eq!(err.to_string(), "Filesystem error: write Guide/Index.vue: denied");
    }

    #[test]
    fn test_with_context_fn_is_lazy() {
        let ok: std::result::Result<u8, std::io::Error> = Ok(7);
        let value = ok
            .with_context_fn(|| -> String { panic!("context built on success") })
            .unwrap();
        assert_eq!(value, 7);
    }
}
