//! Release Manifest Scanner
//!
//! Lists `releases/<version>/{library,docs,artifacts}/*` and writes a JSON
//! manifest the site uses to render its download page. Independent of the
//! scaffold generator; it only shares the output conventions.

use std::cmp::Ordering;
use std::fs;
use std::path::{Component, Path};

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::{debug, info, warn};

use super::types::{FileInfo, Manifest, Release};
use crate::config::ManifestConfig;
use crate::types::{Result, ResultExt, ScaffoldError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sort key for a dotted version; anything non-numeric sorts as `0.0.0`
pub fn version_key(version: &str) -> Vec<i64> {
    version
        .split('.')
        .map(|part| part.parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .unwrap_or_else(|_| vec![0, 0, 0])
}

/// Newest first; equal keys keep their existing order
pub fn compare_versions_desc(a: &str, b: &str) -> Ordering {
    version_key(b).cmp(&version_key(a))
}

/// ISO 8601 local time; microseconds only when non-zero
fn format_timestamp(at: NaiveDateTime) -> String {
    let micros = at.and_utc().timestamp_subsec_micros();
    if micros == 0 {
        at.format(TIMESTAMP_FORMAT).to_string()
    } else {
        format!("{}.{:06}", at.format(TIMESTAMP_FORMAT), micros)
    }
}

pub struct ManifestScanner<'a> {
    config: &'a ManifestConfig,
}

impl<'a> ManifestScanner<'a> {
    pub fn new(config: &'a ManifestConfig) -> Self {
        Self { config }
    }

    /// Scan every release directory, newest version first.
    ///
    /// A missing releases directory yields no releases.
    pub fn scan_releases(&self) -> Result<Vec<Release>> {
        let releases_dir = &self.config.releases_dir;
        if !releases_dir.is_dir() {
            warn!("Releases directory not found: {}", releases_dir.display());
            return Ok(Vec::new());
        }

        let mut version_dirs: Vec<_> = fs::read_dir(releases_dir)
            .with_context_fn(|| format!("read {}", releases_dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_dir())
            .filter(|p| p.file_name().is_some_and(|n| n != "README.md"))
            .collect();
        version_dirs.sort();

        let mut releases = Vec::with_capacity(version_dirs.len());
        for dir in &version_dirs {
            debug!("Scanning release: {}", dir.display());
            releases.push(self.scan_release(dir)?);
        }

        releases.sort_by(|a, b| compare_versions_desc(&a.version, &b.version));
        Ok(releases)
    }

    /// Collect the categorized files of one version directory
    pub fn scan_release(&self, version_dir: &Path) -> Result<Release> {
        let version = version_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ScaffoldError::manifest(format!(
                    "release directory name is not a valid version: {}",
                    version_dir.display()
                ))
            })?
            .to_string();

        let mut release = Release::new(version);
        release.library = self.scan_category(&version_dir.join("library"))?;
        release.docs = self.scan_category(&version_dir.join("docs"))?;
        release.artifacts = self.scan_category(&version_dir.join("artifacts"))?;
        Ok(release)
    }

    fn scan_category(&self, dir: &Path) -> Result<Vec<FileInfo>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files: Vec<_> = fs::read_dir(dir)
            .with_context_fn(|| format!("read {}", dir.display()))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        files.iter().map(|p| self.file_info(p)).collect()
    }

    fn file_info(&self, path: &Path) -> Result<FileInfo> {
        let metadata =
            fs::metadata(path).with_context_fn(|| format!("stat {}", path.display()))?;
        let modified: DateTime<Local> = metadata.modified()?.into();

        Ok(FileInfo {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: self.public_relative(path),
            size: metadata.len(),
            modified: format_timestamp(modified.naive_local()),
        })
    }

    /// `/`-joined path relative to the public directory
    fn public_relative(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.config.public_dir).unwrap_or(path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Scan and build a manifest stamped with `generated_at`.
    ///
    /// Returns `None` when there are no releases.
    pub fn build(&self, generated_at: NaiveDateTime) -> Result<Option<Manifest>> {
        let releases = self.scan_releases()?;
        if releases.is_empty() {
            warn!("No releases found in {}", self.config.releases_dir.display());
            return Ok(None);
        }

        Ok(Some(Manifest::new(format_timestamp(generated_at), releases)))
    }

    /// Write a manifest as pretty JSON, creating parent directories
    pub fn write(&self, manifest: &Manifest) -> Result<()> {
        let output = &self.config.output;
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context_fn(|| format!("create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(output, json).with_context_fn(|| format!("write {}", output.display()))?;
        info!("Generated manifest: {}", output.display());
        Ok(())
    }

    /// Scan, build and write; `None` means nothing was written
    pub fn generate(&self) -> Result<Option<Manifest>> {
        let Some(manifest) = self.build(Local::now().naive_local())? else {
            return Ok(None);
        };
        self.write(&manifest)?;
        Ok(Some(manifest))
    }
}
