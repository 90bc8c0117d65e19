//! Ancestor Expansion
//!
//! Produces the authoritative traversal order: every node and every one of
//! its ancestors, each exactly once, in first-appearance order.

use std::collections::HashSet;

use crate::types::NodePath;

/// Expand parsed nodes so the list is prefix-closed and duplicate-free.
pub fn expand_ancestors(nodes: &[NodePath]) -> Vec<NodePath> {
    let mut seen: HashSet<NodePath> = HashSet::new();
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        for prefix in node.prefixes() {
            if seen.insert(prefix.clone()) {
                out.push(prefix);
            }
        }
    }

    out
}
