use serde::{Deserialize, Serialize};

/// One file inside a release category directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    /// Path relative to the public directory, `/`-separated
    pub path: String,
    pub size: u64,
    /// Local naive ISO-8601 modification time
    pub modified: String,
}

/// Content of `releases/<version>/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub version: String,
    pub library: Vec<FileInfo>,
    pub docs: Vec<FileInfo>,
    pub artifacts: Vec<FileInfo>,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            library: Vec::new(),
            docs: Vec::new(),
            artifacts: Vec::new(),
        }
    }

    /// One-line summary: libraries, docs, artifacts
    pub fn summary(&self) -> String {
        format!(
            "{}: {} libraries, {} docs, {} artifacts",
            self.version,
            self.library.len(),
            self.docs.len(),
            self.artifacts.len()
        )
    }
}

/// The `releases.json` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: String,
    pub total_releases: usize,
    pub latest_version: Option<String>,
    pub releases: Vec<Release>,
}

impl Manifest {
    /// Build a manifest from releases already sorted newest first
    pub fn new(generated_at: impl Into<String>, releases: Vec<Release>) -> Self {
        Self {
            generated_at: generated_at.into(),
            total_releases: releases.len(),
            latest_version: releases.first().map(|r| r.version.clone()),
            releases,
        }
    }
}
