//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/docscaffold/) and project (docscaffold.toml) configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::types::{Result, ScaffoldError};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Outline source settings
    pub outline: OutlineConfig,

    /// Scaffold tree settings
    pub scaffold: ScaffoldConfig,

    /// Identifier and file-name derivation settings
    pub naming: NamingConfig,

    /// Release manifest settings
    pub manifest: ManifestConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            outline: OutlineConfig::default(),
            scaffold: ScaffoldConfig::default(),
            naming: NamingConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `ScaffoldError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.outline.indent_unit == 0 {
            return Err(ScaffoldError::config(
                "outline.indent_unit must be greater than 0",
            ));
        }

        require_file_name("scaffold.index_name", &self.scaffold.index_name)?;
        require_file_name("scaffold.aggregator_name", &self.scaffold.aggregator_name)?;

        if self.scaffold.aggregator_name == self.scaffold.index_name {
            return Err(ScaffoldError::config(
                "scaffold.aggregator_name must differ from scaffold.index_name",
            ));
        }

        if !self
            .scaffold
            .aggregator_name
            .starts_with(&self.scaffold.reserved_prefix)
        {
            return Err(ScaffoldError::config(format!(
                "scaffold.aggregator_name '{}' must start with scaffold.reserved_prefix '{}'",
                self.scaffold.aggregator_name, self.scaffold.reserved_prefix
            )));
        }

        for pattern in &self.scaffold.ignore {
            glob::Pattern::new(pattern).map_err(|e| {
                ScaffoldError::config(format!("scaffold.ignore pattern '{}': {}", pattern, e))
            })?;
        }

        self.naming.validate()
    }
}

fn require_file_name(field: &str, value: &str) -> Result<()> {
    let is_plain = !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\']);
    if is_plain {
        Ok(())
    } else {
        Err(ScaffoldError::config(format!(
            "{} must be a plain file name, got '{}'",
            field, value
        )))
    }
}

// =============================================================================
// Outline Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Outline source file
    pub path: PathBuf,

    /// Leading spaces per hierarchy level
    pub indent_unit: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(constants::outline::DEFAULT_PATH),
            indent_unit: constants::outline::INDENT_UNIT,
        }
    }
}

// =============================================================================
// Scaffold Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Base directory mirroring the outline hierarchy
    pub root: PathBuf,

    /// Placeholder content unit file name
    pub index_name: String,

    /// Aggregator document file name (inside `root`)
    pub aggregator_name: String,

    /// File-name prefix the auditor accepts besides `index_name`
    pub reserved_prefix: String,

    /// Glob patterns for file names the auditor never reports
    pub ignore: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(constants::scaffold::DEFAULT_ROOT),
            index_name: constants::scaffold::INDEX_NAME.to_string(),
            aggregator_name: constants::scaffold::AGGREGATOR_NAME.to_string(),
            reserved_prefix: constants::scaffold::RESERVED_PREFIX.to_string(),
            ignore: Vec::new(),
        }
    }
}

impl ScaffoldConfig {
    /// Full path of the aggregator document
    pub fn aggregator_path(&self) -> PathBuf {
        self.root.join(&self.aggregator_name)
    }

    /// Re-root the scaffold tree, keeping every other setting
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }
}

// =============================================================================
// Naming Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Namespace prefix for anchor identifiers
    pub anchor_prefix: String,

    /// Suffix appended to every symbolic component name
    pub component_suffix: String,

    /// Token used when a path has no alphanumeric content
    pub fallback_token: String,

    /// Prepended when a component name would start with a digit
    pub digit_prefix: String,

    /// Directory name used when a title sanitizes to nothing
    pub fs_placeholder: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            anchor_prefix: constants::naming::ANCHOR_PREFIX.to_string(),
            component_suffix: constants::naming::COMPONENT_SUFFIX.to_string(),
            fallback_token: constants::naming::FALLBACK_TOKEN.to_string(),
            digit_prefix: constants::naming::DIGIT_PREFIX.to_string(),
            fs_placeholder: constants::naming::FS_PLACEHOLDER.to_string(),
        }
    }
}

impl NamingConfig {
    pub fn validate(&self) -> Result<()> {
        let is_ident_tail = |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric());

        if !is_ident_tail(&self.component_suffix) {
            return Err(ScaffoldError::config(format!(
                "naming.component_suffix must be ASCII alphanumeric, got '{}'",
                self.component_suffix
            )));
        }

        if self.fallback_token.is_empty() || !is_ident_tail(&self.fallback_token) {
            return Err(ScaffoldError::config(format!(
                "naming.fallback_token must be non-empty ASCII alphanumeric, got '{}'",
                self.fallback_token
            )));
        }

        let digit_prefix_ok = self
            .digit_prefix
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && is_ident_tail(&self.digit_prefix);
        if !digit_prefix_ok {
            return Err(ScaffoldError::config(format!(
                "naming.digit_prefix must start with an ASCII letter, got '{}'",
                self.digit_prefix
            )));
        }

        require_file_name("naming.fs_placeholder", &self.fs_placeholder)?;
        if self.fs_placeholder.trim() != self.fs_placeholder {
            return Err(ScaffoldError::config(
                "naming.fs_placeholder must not have surrounding whitespace",
            ));
        }

        if self.anchor_prefix.chars().any(char::is_whitespace) {
            return Err(ScaffoldError::config(
                "naming.anchor_prefix must not contain whitespace",
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Manifest Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Directory manifest paths are relative to
    pub public_dir: PathBuf,

    /// Directory holding one subdirectory per release
    pub releases_dir: PathBuf,

    /// Manifest output file
    pub output: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from(constants::manifest::PUBLIC_DIR),
            releases_dir: PathBuf::from(constants::manifest::RELEASES_DIR),
            output: PathBuf::from(constants::manifest::OUTPUT_FILE),
        }
    }
}
