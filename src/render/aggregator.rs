//! Aggregator Renderer
//!
//! Builds the single page that imports every section's content unit and lays
//! them out in outline order under a nested table of contents.
//!
//! Output is a pure function of the expanded node list, the naming settings
//! and the recorded command line, so unchanged inputs render byte-identically.

use std::collections::HashSet;

use crate::constants::naming::MAX_HEADING_LEVEL;
use crate::outline::{Sanitizer, strip_markup};
use crate::types::NodePath;

const TOC_LIST_OPEN: &str = r#"<ul class="list-disc ml-6">"#;
const TOC_LIST_CLOSE: &str = "</ul>";

/// One `import Name from "path";` declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub name: String,
    pub path: String,
}

impl Import {
    pub fn to_statement(&self) -> String {
        format!(r#"import {} from "{}";"#, self.name, self.path)
    }
}

/// Escape text for embedding in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

/// Make text safe inside `<!-- ... -->` by breaking up every comment closer.
///
/// Plain `--` (as in `--root`) is kept.
pub fn escape_comment(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("-->") || out.contains("--!>") {
        out = out.replace("-->", "- ->").replace("--!>", "- -!>");
    }
    out
}

/// Heading level for a node depth, clamped to what HTML supports
pub fn heading_level(depth: usize) -> usize {
    depth.clamp(1, MAX_HEADING_LEVEL)
}

pub struct AggregatorRenderer<'a> {
    sanitizer: &'a Sanitizer,
    index_name: &'a str,
}

impl<'a> AggregatorRenderer<'a> {
    pub fn new(sanitizer: &'a Sanitizer, index_name: &'a str) -> Self {
        Self {
            sanitizer,
            index_name,
        }
    }

    /// Nested `<ul>` table of contents linking to each heading anchor.
    pub fn render_toc(&self, nodes: &[NodePath]) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut open = 0usize;

        for node in nodes {
            let depth = node.depth();
            while open < depth {
                out.push(TOC_LIST_OPEN.to_string());
                open += 1;
            }
            while open > depth {
                out.push(TOC_LIST_CLOSE.to_string());
                open -= 1;
            }

            let title = node.title();
            out.push(format!(
                r##"<li class="mb-1"><a class="text-blue-600 hover:underline" href="#{}">{}</a></li>"##,
                self.sanitizer.slugify(title),
                escape_html(&strip_markup(title))
            ));
        }

        while open > 0 {
            out.push(TOC_LIST_CLOSE.to_string());
            open -= 1;
        }

        out.join("\n")
    }

    /// One provenance comment, heading and component reference per node.
    ///
    /// Headings show the raw title with its markup intact.
    pub fn render_body(&self, nodes: &[NodePath]) -> String {
        let mut out: Vec<String> = Vec::new();

        for node in nodes {
            let level = heading_level(node.depth());
            let title = node.title();
            let origin: Vec<String> = node.segments().iter().map(|p| strip_markup(p)).collect();

            out.push(format!("<!-- From: {} -->", escape_comment(&origin.join("/"))));
            out.push(format!(
                r#"<h{level} id="{}">{}</h{level}>"#,
                self.sanitizer.slugify(title),
                title
            ));
            out.push(format!("<{} />", self.sanitizer.component_name(node.segments())));
            out.push(String::new());
        }

        out.join("\n")
    }

    /// Import declarations relative to the aggregator, deduplicated in
    /// first-appearance order.
    pub fn imports(&self, nodes: &[NodePath]) -> Vec<Import> {
        let mut seen: HashSet<Import> = HashSet::new();
        let mut out = Vec::new();

        for node in nodes {
            let import = Import {
                name: self.sanitizer.component_name(node.segments()),
                path: format!(
                    "./{}/{}",
                    self.sanitizer.fs_segments(node).join("/"),
                    self.index_name
                ),
            };
            if seen.insert(import.clone()) {
                out.push(import);
            }
        }

        out
    }

    /// Assemble the complete aggregator document.
    ///
    /// `invocation` is the command line recorded for provenance.
    pub fn render(&self, nodes: &[NodePath], invocation: &str) -> String {
        let invocation = escape_comment(invocation);
        let imports = self
            .imports(nodes)
            .iter()
            .map(Import::to_statement)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!-- Autogenerated with command: {invocation} -->
<script setup lang="ts">
{imports}
</script>

<template>
  <div class="prose">
    <h1>Table of Contents</h1>
{toc}

{body}
  </div>
</template>

<style scoped>
@reference "tailwindcss";
h1 {{
  @apply text-4xl font-bold leading-tight;
}}

h2 {{
  @apply text-3xl font-bold leading-tight;
}}

h3 {{
  @apply text-2xl font-bold leading-tight;
}}

h4 {{
  @apply text-xl  font-bold leading-tight;
}}
</style>
"#,
            toc = self.render_toc(nodes),
            body = self.render_body(nodes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(parts: &[&str]) -> NodePath {
        parts.iter().copied().collect()
    }

    fn chain() -> Vec<NodePath> {
        vec![
            node(&["Guide"]),
            node(&["Guide", "Install"]),
            node(&["Guide", "Install", "Linux"]),
        ]
    }

    fn render_with<T>(f: impl FnOnce(&AggregatorRenderer<'_>) -> T) -> T {
        let sanitizer = Sanitizer::default();
        let renderer = AggregatorRenderer::new(&sanitizer, "Index.vue");
        f(&renderer)
    }

    #[test]
    fn test_toc_nesting() {
        let toc = render_with(|r| r.render_toc(&chain()));
        let expected = [
            r#"<ul class="list-disc ml-6">"#,
            r##"<li class="mb-1"><a class="text-blue-600 hover:underline" href="#rawdocs-guide">Guide</a></li>"##,
            r#"<ul class="list-disc ml-6">"#,
            r##"<li class="mb-1"><a class="text-blue-600 hover:underline" href="#rawdocs-install">Install</a></li>"##,
            r#"<ul class="list-disc ml-6">"#,
            r##"<li class="mb-1"><a class="text-blue-600 hover:underline" href="#rawdocs-linux">Linux</a></li>"##,
            "</ul>",
            "</ul>",
            "</ul>",
        ]
        .join("\n");
        assert_eq!(toc, expected);
    }

    #[test]
    fn test_toc_closes_on_dedent() {
        let nodes = vec![
            node(&["A"]),
            node(&["A", "B"]),
            node(&["A", "B", "C"]),
            node(&["D"]),
        ];
        let toc = render_with(|r| r.render_toc(&nodes));
        let lines: Vec<&str> = toc.lines().collect();

        let d_line = lines.iter().position(|l| l.contains("#rawdocs-d")).unwrap();
        assert_eq!(lines[d_line - 1], "</ul>");
        assert_eq!(lines[d_line - 2], "</ul>");
        assert_eq!(lines.iter().filter(|l| **l == TOC_LIST_OPEN).count(), 3);
        assert_eq!(lines.iter().filter(|l| **l == TOC_LIST_CLOSE).count(), 3);
    }

    #[test]
    fn test_toc_escapes_stripped_title() {
        let toc = render_with(|r| r.render_toc(&[node(&["<em>Q&A</em> \"Tips\""])]));
        assert!(toc.contains(">Q&amp;A &quot;Tips&quot;</a>"));
        assert!(!toc.contains("<em>"));
    }

    #[test]
    fn test_body_heading_levels() {
        let body = render_with(|r| r.render_body(&chain()));
        assert!(body.contains(r#"<h1 id="rawdocs-guide">Guide</h1>"#));
        assert!(body.contains(r#"<h2 id="rawdocs-install">Install</h2>"#));
        assert!(body.contains(r#"<h3 id="rawdocs-linux">Linux</h3>"#));
        assert!(body.contains("<GuideInstallLinuxSection />"));
        assert!(body.contains("<!-- From: Guide/Install/Linux -->"));
    }

    #[test]
    fn test_body_keeps_markup_in_heading() {
        let body = render_with(|r| r.render_body(&[node(&["<em>API</em> Reference"])]));
        assert!(body.contains(r#"<h1 id="rawdocs-api-reference"><em>API</em> Reference</h1>"#));
        assert!(body.contains("<!-- From: API Reference -->"));
    }

    #[test]
    fn test_heading_level_clamped() {
        let deep = node(&["1", "2", "3", "4", "5", "6", "7", "8"]);
        let body = render_with(|r| r.render_body(&[deep]));
        assert!(body.contains(r#"<h6 id="rawdocs-8">8</h6>"#));
        assert_eq!(heading_level(0), 1);
        assert_eq!(heading_level(6), 6);
        assert_eq!(heading_level(9), 6);
    }

    #[test]
    fn test_imports() {
        let imports = render_with(|r| r.imports(&[node(&["Guide"]), node(&["Guide", "I/O"])]));
        assert_eq!(
            imports,
            vec![
                Import {
                    name: "GuideSection".to_string(),
                    path: "./Guide/Index.vue".to_string(),
                },
                Import {
                    name: "GuideIOSection".to_string(),
                    path: "./Guide/I\u{FF0F}O/Index.vue".to_string(),
                },
            ]
        );
        assert_eq!(
            imports[0].to_statement(),
            r#"import GuideSection from "./Guide/Index.vue";"#
        );
    }

    #[test]
    fn test_imports_deduplicated() {
        let imports = render_with(|r| r.imports(&[node(&["Guide"]), node(&["Guide"])]));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_same_leaf_title_anchor_collision() {
        let nodes = vec![
            node(&["Guide"]),
            node(&["Guide", "Overview"]),
            node(&["Reference"]),
            node(&["Reference", "Overview"]),
        ];
        let body = render_with(|r| r.render_body(&nodes));
        assert_eq!(body.matches(r#"id="rawdocs-overview""#).count(), 2);
        assert!(body.contains("<GuideOverviewSection />"));
        assert!(body.contains("<ReferenceOverviewSection />"));
    }

    #[test]
    fn test_render_document() {
        let doc = render_with(|r| r.render(&chain(), "docscaffold generate"));
        assert!(doc.starts_with("<!-- Autogenerated with command: docscaffold generate -->\n"));
        assert!(doc.contains(
            "<script setup lang=\"ts\">\nimport GuideSection from \"./Guide/Index.vue\";\n"
        ));
        assert!(doc.contains("    <h1>Table of Contents</h1>\n<ul class=\"list-disc ml-6\">"));
        assert!(doc.contains("h1 {\n  @apply text-4xl font-bold leading-tight;\n}"));
        assert!(doc.ends_with("</style>\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_with(|r| r.render(&chain(), "gen"));
        let second = render_with(|r| r.render(&chain(), "gen"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_escape_comment() {
        assert_eq!(escape_comment("generate --root x"), "generate --root x");
        assert_eq!(escape_comment("a-->b"), "a- ->b");
        assert_eq!(escape_comment("a--!>b"), "a- -!>b");
        assert!(!escape_comment("x ----> y").contains("-->"));
    }

    #[test]
    fn test_comment_text_cannot_close_comment() {
        let s = Sanitizer::default();
        let nodes = vec![node(&["Setup --> <b>Done</b>"])];
        let doc = AggregatorRenderer::new(&s, "Index.vue").render(&nodes, "gen --root x -->");

        assert!(doc.starts_with("<!-- Autogenerated with command: gen --root x - -> -->\n"));
        assert!(doc.contains("<!-- From: Setup - -> Done -->"));
        for line in doc.lines().filter(|l| l.starts_with("<!--")) {
            assert_eq!(line.matches("-->").count(), 1, "{}", line);
            assert!(line.ends_with("-->"));
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom's & Co</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom&#x27;s &amp; Co&lt;/a&gt;");
    }
}
