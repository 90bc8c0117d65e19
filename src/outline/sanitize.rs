//! Title Sanitizers
//!
//! Pure transforms from a raw outline title (which may carry inline HTML such
//! as `<em>...</em>`) to the four derived names the generator needs:
//!
//! - display text: markup stripped, for the TOC
//! - anchor identifier: URL-fragment safe, namespaced
//! - filesystem segment: one legal directory name
//! - symbolic component name: a PascalCase identifier for the whole path
//!
//! Visible headings keep the raw title; nothing here is used for them.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::NamingConfig;
use crate::constants::naming::SLASH_SUBSTITUTE;
use crate::types::NodePath;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// Characters rejected by common filesystems (Windows being the strictest)
const ILLEGAL_FS_CHARS: [char; 8] = ['<', '>', ':', '"', '\\', '|', '?', '*'];

/// Remove inline tag-like markup (`<...>`) from a title.
pub fn strip_markup(title: &str) -> String {
    TAG_RE.replace_all(title, "").into_owned()
}

/// Derives identifiers and file names from outline titles.
#[derive(Debug, Clone, Default)]
pub struct Sanitizer {
    naming: NamingConfig,
}

impl Sanitizer {
    pub fn new(naming: NamingConfig) -> Self {
        Self { naming }
    }

    /// Anchor identifier for a single title.
    ///
    /// Only ASCII letters, digits, spaces and dashes survive; space runs become
    /// one dash. Identical titles always collide.
    pub fn slugify(&self, title: &str) -> String {
        let kept: String = strip_markup(title)
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ' ')
            .collect();

        let slug = kept
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_ascii_lowercase();

        format!("{}{}", self.naming.anchor_prefix, slug)
    }

    /// Symbolic component name for a full ancestor chain.
    ///
    /// `["Numstore", "Getting Started", "Linux"]` becomes
    /// `NumstoreGettingStartedLinuxSection`.
    pub fn component_name<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let tokens: Vec<String> = parts
            .iter()
            .flat_map(|part| {
                strip_markup(part.as_ref())
                    .split(|c: char| !c.is_ascii_alphanumeric())
                    .filter(|w| !w.is_empty())
                    .map(capitalize_ascii)
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut name = if tokens.is_empty() {
            capitalize_ascii(&self.naming.fallback_token)
        } else {
            tokens.concat()
        };

        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert_str(0, &self.naming.digit_prefix);
        }

        name.push_str(&self.naming.component_suffix);
        name
    }

    /// One filesystem-legal directory name for a title.
    pub fn fs_segment(&self, title: &str) -> String {
        let replaced: String = strip_markup(title)
            .chars()
            .map(|c| match c {
                '/' => SLASH_SUBSTITUTE,
                c if ILLEGAL_FS_CHARS.contains(&c) || c.is_control() => '_',
                c => c,
            })
            .collect();

        let trimmed = replaced.trim();
        // "." and ".." would escape or alias the parent directory
        if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
            self.naming.fs_placeholder.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Filesystem segments for every element of a node path
    pub fn fs_segments(&self, node: &NodePath) -> Vec<String> {
        node.segments()
            .iter()
            .map(|title| self.fs_segment(title))
            .collect()
    }
}

fn capitalize_ascii(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}
