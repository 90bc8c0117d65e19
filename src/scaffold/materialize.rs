//! Scaffold Materializer
//!
//! Mirrors the expanded outline as a directory tree and drops a placeholder
//! content unit into every section directory that lacks one. Existing
//! content units are never touched, so hand-authored sections survive re-runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ScaffoldConfig;
use crate::outline::Sanitizer;
use crate::types::{NodePath, Result, ResultExt};

/// Outcome of one materialization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Section directories that did not exist before this pass
    pub created_dirs: usize,
    /// Placeholder files written by this pass
    pub created: Vec<PathBuf>,
    /// Placeholder paths that already existed and were left alone
    pub preserved: Vec<PathBuf>,
}

impl MaterializeReport {
    pub fn total_units(&self) -> usize {
        self.created.len() + self.preserved.len()
    }
}

/// Write `contents` to `path` only if nothing exists there yet.
///
/// Returns `true` when the file was written.
pub fn write_if_absent(path: &Path, contents: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    fs::write(path, contents).with_context_fn(|| format!("write {}", path.display()))?;
    Ok(true)
}

/// Placeholder content unit for a section
pub fn placeholder_contents(logical_path: &str) -> String {
    format!(
        r#"<!-- Autocreated placeholder for {logical_path} -->
<script setup>
// add content for this section
</script>
<template>
  <div></div>
</template>
"#
    )
}

pub struct ScaffoldMaterializer<'a> {
    config: &'a ScaffoldConfig,
    sanitizer: &'a Sanitizer,
}

impl<'a> ScaffoldMaterializer<'a> {
    pub fn new(config: &'a ScaffoldConfig, sanitizer: &'a Sanitizer) -> Self {
        Self { config, sanitizer }
    }

    /// Directory of a node's scaffold unit
    pub fn unit_dir(&self, node: &NodePath) -> PathBuf {
        let mut dir = self.config.root.clone();
        dir.extend(self.sanitizer.fs_segments(node));
        dir
    }

    /// Ensure a directory and placeholder for every node, in order.
    pub fn materialize(&self, nodes: &[NodePath]) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();

        fs::create_dir_all(&self.config.root)
            .with_context_fn(|| format!("create {}", self.config.root.display()))?;

        for node in nodes {
            let segments = self.sanitizer.fs_segments(node);
            let dir = self.unit_dir(node);

            if !dir.is_dir() {
                fs::create_dir_all(&dir)
                    .with_context_fn(|| format!("create {}", dir.display()))?;
                report.created_dirs += 1;
            }

            let index_path = dir.join(&self.config.index_name);
            let contents = placeholder_contents(&segments.join("/"));

            if write_if_absent(&index_path, &contents)? {
                debug!("Created placeholder {}", index_path.display());
                report.created.push(index_path);
            } else {
                report.preserved.push(index_path);
            }
        }

        info!(
            "Scaffold ready: {} units ({} new, {} kept)",
            report.total_units(),
            report.created.len(),
            report.preserved.len()
        );

        Ok(report)
    }
}
