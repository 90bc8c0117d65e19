//! Outline Parser
//!
//! Turns indentation-coded text into node paths, one per non-blank line.
//! Hierarchy comes only from leading spaces: `level = spaces / indent_unit`.
//! Irregular indentation is accepted and reinterpreted, never rejected.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::types::{NodePath, Result, ScaffoldError};

/// Parses outline text with a fixed indent unit
#[derive(Debug, Clone, Copy)]
pub struct OutlineParser {
    indent_unit: usize,
}

impl OutlineParser {
    /// `indent_unit` of zero is treated as one space per level
    pub fn new(indent_unit: usize) -> Self {
        Self {
            indent_unit: indent_unit.max(1),
        }
    }

    /// Parse outline text into node paths in textual order.
    ///
    /// A line indented deeper than one level below its predecessor becomes a
    /// direct child of the deepest open ancestor.
    pub fn parse_str(&self, text: &str) -> Vec<NodePath> {
        let mut stack: Vec<String> = Vec::new();
        let mut nodes = Vec::new();

        for line in text.lines() {
            let title = line.trim();
            if title.is_empty() {
                continue;
            }

            let lead = line.len() - line.trim_start_matches(' ').len();
            let level = lead / self.indent_unit;

            stack.truncate(level);
            stack.push(title.to_string());
            nodes.push(NodePath::new(stack.clone()));
        }

        nodes
    }

    /// Read and parse an outline file.
    ///
    /// Returns `ScaffoldError::OutlineNotFound` when the file is missing.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<NodePath>> {
        if !path.exists() {
            return Err(ScaffoldError::outline_not_found(path));
        }

        let text = fs::read_to_string(path)?;
        let nodes = self.parse_str(&text);
        debug!("Parsed {} outline entries from {}", nodes.len(), path.display());
        Ok(nodes)
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new(crate::constants::outline::INDENT_UNIT)
    }
}
