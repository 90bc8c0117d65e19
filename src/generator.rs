//! Generation Pipeline
//!
//! Drives one run end to end:
//!
//! 1. verify the outline exists (fatal otherwise, before any write)
//! 2. parse and expand ancestors
//! 3. materialize the scaffold tree
//! 4. audit for drift (warnings only)
//! 5. render and overwrite the aggregator document
//!
//! Every path comes from the `Config` handed to [`Generator::new`].

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::outline::{OutlineParser, Sanitizer, expand_ancestors};
use crate::render::AggregatorRenderer;
use crate::scaffold::{AuditReport, ConsistencyAuditor, MaterializeReport, ScaffoldMaterializer};
use crate::types::{NodePath, Result, ResultExt, ScaffoldError};

/// Result of a full generation run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Entries read from the outline file
    pub outline_entries: usize,
    /// Nodes after ancestor expansion
    pub nodes: usize,
    pub materialize: MaterializeReport,
    pub audit: AuditReport,
    pub aggregator_path: PathBuf,
}

/// The command line of the current process, as recorded in the aggregator
pub fn invocation_from_env() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}

pub struct Generator {
    config: Config,
    sanitizer: Sanitizer,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        let sanitizer = Sanitizer::new(config.naming.clone());
        Self { config, sanitizer }
    }

    /// Parse the outline file and expand it into traversal order.
    pub fn load_outline(&self) -> Result<(usize, Vec<NodePath>)> {
        let parser = OutlineParser::new(self.config.outline.indent_unit);
        let parsed = parser.parse_file(&self.config.outline.path)?;
        let nodes = expand_ancestors(&parsed);
        debug!(
            "Outline: {} entries, {} nodes after expansion",
            parsed.len(),
            nodes.len()
        );
        Ok((parsed.len(), nodes))
    }

    /// Audit the scaffold tree against the current outline without writing.
    pub fn audit(&self) -> Result<AuditReport> {
        let (_, nodes) = self.load_outline()?;
        ConsistencyAuditor::new(&self.config.scaffold, &self.sanitizer).audit(&nodes)
    }

    /// Render the aggregator document for an expanded node list
    pub fn render(&self, nodes: &[NodePath], invocation: &str) -> String {
        AggregatorRenderer::new(&self.sanitizer, &self.config.scaffold.index_name)
            .render(nodes, invocation)
    }

    /// Run the full pipeline.
    pub fn run(&self, invocation: &str) -> Result<GenerateSummary> {
        let outline_path = &self.config.outline.path;
        if !outline_path.is_file() {
            return Err(ScaffoldError::outline_not_found(outline_path));
        }

        let (outline_entries, nodes) = self.load_outline()?;

        let materialize =
            ScaffoldMaterializer::new(&self.config.scaffold, &self.sanitizer).materialize(&nodes)?;

        let audit = match ConsistencyAuditor::new(&self.config.scaffold, &self.sanitizer)
            .audit(&nodes)
        {
            Ok(report) => report,
            Err(e) => {
                warn!("Consistency audit skipped: {}", e);
                AuditReport::default()
            }
        };

        let root = &self.config.scaffold.root;
        fs::create_dir_all(root).with_context_fn(|| format!("create {}", root.display()))?;

        let aggregator_path = self.config.scaffold.aggregator_path();
        let document = self.render(&nodes, invocation);
        fs::write(&aggregator_path, document)
            .with_context_fn(|| format!("write {}", aggregator_path.display()))?;
        info!("Wrote {}", aggregator_path.display());

        Ok(GenerateSummary {
            outline_entries,
            nodes: nodes.len(),
            materialize,
            audit,
            aggregator_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const OUTLINE: &str = "Guide\n  Install\n    Linux\n";

    fn setup(outline: &str) -> (TempDir, Config) {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.outline.path = temp.path().join("docs_outline.txt");
        config.scaffold.root = temp.path().join("autogen");
        std::fs::write(&config.outline.path, outline).unwrap();
        (temp, config)
    }

    fn placeholders(root: &Path) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = ignore::WalkBuilder::new(root)
            .standard_filters(false)
            .build()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() == "Index.vue")
            .map(|e| e.into_path())
            .collect();
        found.sort();
        found
    }

    #[test]
    fn test_example_outline_end_to_end() {
        let (_temp, config) = setup(OUTLINE);
        let generator = Generator::new(config.clone());

        let summary = generator.run("docscaffold generate").unwrap();
        assert_eq!(summary.outline_entries, 3);
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.materialize.created.len(), 3);
        assert!(summary.audit.is_clean());

        let root = &config.scaffold.root;
        assert_eq!(
            placeholders(root),
            vec![
                root.join("Guide/Index.vue"),
                root.join("Guide/Install/Index.vue"),
                root.join("Guide/Install/Linux/Index.vue"),
            ]
        );

        let doc = std::fs::read_to_string(&summary.aggregator_path).unwrap();
        assert_eq!(doc.matches("<li class=\"mb-1\">").count(), 3);
        assert!(doc.contains("href=\"#rawdocs-guide\""));
        assert!(doc.contains("href=\"#rawdocs-install\""));
        assert!(doc.contains("href=\"#rawdocs-linux\""));
        assert!(doc.contains("<h1 id=\"rawdocs-guide\">Guide</h1>"));
        assert!(doc.contains("<h2 id=\"rawdocs-install\">Install</h2>"));
        assert!(doc.contains("<h3 id=\"rawdocs-linux\">Linux</h3>"));
        assert!(doc.contains(
            "import GuideInstallLinuxSection from \"./Guide/Install/Linux/Index.vue\";"
        ));
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (_temp, config) = setup(OUTLINE);
        let generator = Generator::new(config.clone());

        let first = generator.run("gen").unwrap();
        let doc_first = std::fs::read(&first.aggregator_path).unwrap();
        let unit = config.scaffold.root.join("Guide/Install/Index.vue");
        std::fs::write(&unit, "<template><p>hand written</p></template>\n").unwrap();
        let mtime = std::fs::metadata(&unit).unwrap().modified().unwrap();

        let second = generator.run("gen").unwrap();
        assert!(second.materialize.created.is_empty());
        assert_eq!(second.materialize.preserved.len(), 3);
        assert_eq!(std::fs::read(&second.aggregator_path).unwrap(), doc_first);
        assert_eq!(std::fs::metadata(&unit).unwrap().modified().unwrap(), mtime);
        assert_eq!(
            std::fs::read_to_string(&unit).unwrap(),
            "<template><p>hand written</p></template>\n"
        );
    }

    #[test]
    fn test_removed_leaf_kept_and_reported() {
        let (_temp, config) = setup(OUTLINE);
        Generator::new(config.clone()).run("gen").unwrap();

        std::fs::write(&config.outline.path, "Guide\n  Install\n").unwrap();
        let summary = Generator::new(config.clone()).run("gen").unwrap();

        let leaf = config.scaffold.root.join("Guide/Install/Linux");
        assert!(leaf.join("Index.vue").is_file());
        let orphans: Vec<&Path> = summary.audit.orphans().collect();
        assert_eq!(orphans, vec![leaf.as_path()]);

        let doc = std::fs::read_to_string(&summary.aggregator_path).unwrap();
        assert!(!doc.contains("Linux"));
    }

    #[test]
    fn test_missing_outline_is_fatal_before_writes() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.outline.path = temp.path().join("missing.txt");
        config.scaffold.root = temp.path().join("autogen");

        let err = Generator::new(config.clone()).run("gen").unwrap_err();
        assert!(matches!(err, ScaffoldError::OutlineNotFound { .. }));
        assert!(!config.scaffold.root.exists());
    }

    #[test]
    fn test_unexpected_file_does_not_abort() {
        let (_temp, config) = setup(OUTLINE);
        let generator = Generator::new(config.clone());
        generator.run("gen").unwrap();
        std::fs::write(config.scaffold.root.join("Guide/draft.txt"), "x").unwrap();

        let summary = generator.run("gen").unwrap();
        assert_eq!(summary.audit.unexpected_files().count(), 1);
        assert!(summary.aggregator_path.is_file());
    }

    #[test]
    fn test_audit_only_does_not_write() {
        let (_temp, config) = setup(OUTLINE);
        let report = Generator::new(config.clone()).audit().unwrap();
        assert!(report.is_clean());
        assert!(!config.scaffold.root.exists());
    }

    #[test]
    fn test_invocation_recorded() {
        let (_temp, config) = setup(OUTLINE);
        let summary = Generator::new(config).run("docscaffold generate --root x").unwrap();
        let doc = std::fs::read_to_string(summary.aggregator_path).unwrap();
        assert!(doc.starts_with("<!-- Autogenerated with command: docscaffold generate --root x -->"));
    }
}
