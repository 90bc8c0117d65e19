pub mod error;

pub use error::{Result, ResultExt, ScaffoldError};

// =============================================================================
// Domain Newtypes
// =============================================================================

use std::fmt;

/// One outline entry together with its full ancestor chain.
///
/// Identity is the exact sequence of raw titles, inline markup included.
/// `("Guide", "Install")` and `("Guide", "<b>Install</b>")` are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Heading depth of the node (1 for top-level entries)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The node's own raw title
    pub fn title(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// Prefix of the first `len` segments
    pub fn prefix(&self, len: usize) -> Self {
        Self(self.0[..len.min(self.0.len())].to_vec())
    }

    /// All prefixes from length 1 up to and including the full path
    pub fn prefixes(&self) -> impl Iterator<Item = NodePath> + '_ {
        (1..=self.0.len()).map(|len| self.prefix(len))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" / "))
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_accessors() {
        let node: NodePath = ["Guide", "Install", "Linux"].into_iter().collect();
        assert_eq!(node.depth(), 3);
        assert_eq!(node.title(), "Linux");
        assert_eq!(node.to_string(), "Guide / Install / Linux");
    }

    #[test]
    fn test_prefixes_in_order() {
        let node: NodePath = ["A", "B", "C"].into_iter().collect();
        let prefixes: Vec<NodePath> = node.prefixes().collect();
        assert_eq!(prefixes.len(), 3);
        assert_eq!(prefixes[0].segments(), ["A"]);
        assert_eq!(prefixes[1].segments(), ["A", "B"]);
        assert_eq!(prefixes[2], node);
    }

    #[test]
    fn test_identity_includes_markup() {
        let plain: NodePath = ["API"].into_iter().collect();
        let tagged: NodePath = ["<em>API</em>"].into_iter().collect();
        assert_ne!(plain, tagged);
    }
}
