//! Consistency Auditor
//!
//! Read-only walk of the scaffold tree that reports drift from the outline:
//! section directories no longer referenced by it (orphans) and files that
//! are neither a placeholder nor the aggregator output. Findings are warnings;
//! nothing is deleted or rewritten.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Serialize;
use tracing::debug;

use crate::config::ScaffoldConfig;
use crate::outline::Sanitizer;
use crate::types::{NodePath, Result, ScaffoldError};

/// One drift finding
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditFinding {
    /// Directory holding a placeholder but absent from the outline
    OrphanedSection { dir: PathBuf },
    /// File that is neither the placeholder nor reserved aggregator output
    UnexpectedFile { dir: PathBuf, name: String },
}

impl fmt::Display for AuditFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedSection { dir } => {
                write!(f, "directory exists but not in outline: {}", dir.display())
            }
            Self::UnexpectedFile { dir, name } => {
                write!(f, "unexpected file in {}: {}", dir.display(), name)
            }
        }
    }
}

/// Sorted audit findings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn orphans(&self) -> impl Iterator<Item = &Path> {
        self.findings.iter().filter_map(|f| match f {
            AuditFinding::OrphanedSection { dir } => Some(dir.as_path()),
            AuditFinding::UnexpectedFile { .. } => None,
        })
    }

    pub fn unexpected_files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.findings.iter().filter_map(|f| match f {
            AuditFinding::UnexpectedFile { dir, name } => Some((dir.as_path(), name.as_str())),
            AuditFinding::OrphanedSection { .. } => None,
        })
    }
}

pub struct ConsistencyAuditor<'a> {
    config: &'a ScaffoldConfig,
    sanitizer: &'a Sanitizer,
}

impl<'a> ConsistencyAuditor<'a> {
    pub fn new(config: &'a ScaffoldConfig, sanitizer: &'a Sanitizer) -> Self {
        Self { config, sanitizer }
    }

    /// Section directories the outline expects
    pub fn expected_dirs(&self, nodes: &[NodePath]) -> HashSet<PathBuf> {
        nodes
            .iter()
            .map(|node| {
                let mut dir = self.config.root.clone();
                dir.extend(self.sanitizer.fs_segments(node));
                dir
            })
            .collect()
    }

    /// Walk the scaffold root and collect findings.
    ///
    /// A missing root yields an empty report.
    pub fn audit(&self, nodes: &[NodePath]) -> Result<AuditReport> {
        let root = &self.config.root;
        if !root.is_dir() {
            debug!("Scaffold root {} absent, nothing to audit", root.display());
            return Ok(AuditReport::default());
        }

        let expected = self.expected_dirs(nodes);
        let ignore = self.ignore_patterns()?;
        let mut findings = Vec::new();

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if entry.depth() > 0
                    && !expected.contains(path)
                    && path.join(&self.config.index_name).is_file()
                {
                    findings.push(AuditFinding::OrphanedSection {
                        dir: path.to_path_buf(),
                    });
                }
                continue;
            }

            // the root holds the aggregator and project files, not a section
            if entry.depth() == 1 {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if self.is_allowed(&name, &ignore) {
                continue;
            }

            let Some(dir) = path.parent() else {
                continue;
            };
            let dir = dir.to_path_buf();
            findings.push(AuditFinding::UnexpectedFile {
                dir,
                name: name.into_owned(),
            });
        }

        findings.sort();
        debug!("Audit of {} found {} issue(s)", root.display(), findings.len());
        Ok(AuditReport { findings })
    }

    fn is_allowed(&self, name: &str, ignore: &[glob::Pattern]) -> bool {
        name == self.config.index_name
            || name.starts_with(&self.config.reserved_prefix)
            || ignore.iter().any(|p| p.matches(name))
    }

    fn ignore_patterns(&self) -> Result<Vec<glob::Pattern>> {
        self.config
            .ignore
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    ScaffoldError::config(format!("scaffold.ignore pattern '{}': {}", p, e))
                })
            })
            .collect()
    }
}
