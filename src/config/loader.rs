//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/docscaffold/config.toml)
//! 3. Project config (./docscaffold.toml, or an explicit --config file)
//! 4. Environment variables (DOCSCAFFOLD_<SECTION>__<KEY>)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{Result, ScaffoldError};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "docscaffold.toml";

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "DOCSCAFFOLD_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project (or `explicit`) → env vars
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ScaffoldError::config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                debug!("Loading config from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let project_path = Self::project_config_path();
                if project_path.exists() {
                    debug!("Loading project config from: {}", project_path.display());
                    figment = figment.merge(Toml::file(&project_path));
                }
            }
        }

        // e.g. DOCSCAFFOLD_SCAFFOLD__ROOT -> scaffold.root
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ScaffoldError::config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/docscaffold/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("docscaffold"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Describe config file locations, one line per source
    pub fn describe_paths() -> Vec<String> {
        let mark = |p: &Path| if p.exists() { "✓" } else { "✗" };
        let mut lines = Vec::new();

        match Self::global_config_path() {
            Some(global) => lines.push(format!("Global:  {} {}", mark(&global), global.display())),
            None => lines.push("Global:  (not available)".to_string()),
        }

        let project = Self::project_config_path();
        lines.push(format!("Project: {} {}", mark(&project), project.display()));
        lines.push(format!("Env:     {}<SECTION>__<KEY>", ENV_PREFIX));

        lines
    }

    /// Render an effective configuration as TOML or JSON
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            Ok(toml::to_string_pretty(config)?)
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write a default project config into `dir`.
    ///
    /// An existing file is kept unless `force` is set.
    pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join(PROJECT_CONFIG_FILE);
        if config_path.exists() && !force {
            info!("Project config exists: {}", config_path.display());
            return Ok(config_path);
        }

        fs::write(&config_path, Self::default_project_config())?;
        info!("Created project config: {}", config_path.display());
        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Generate default project config content (TOML)
    fn default_project_config() -> String {
        r#"# docscaffold project configuration
# Every key is optional; omitted keys use the built-in defaults.

version = "1.0"

[outline]
path = "src/views/resources/docs_outline.txt"
indent_unit = 2

[scaffold]
root = "src/views/resources/autogen"
index_name = "Index.vue"
aggregator_name = "ROOT.vue"
reserved_prefix = "ROOT"
ignore = []

[naming]
anchor_prefix = "rawdocs-"
component_suffix = "Section"

[manifest]
public_dir = "public"
releases_dir = "public/releases"
output = "public/releases.json"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use tempfile::TempDir;

    fn isolate_global(jail: &mut Jail) {
        let dir = jail.directory().display().to_string();
        jail.set_env("XDG_CONFIG_HOME", dir);
    }

    #[test]
    fn test_load_default_config() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_env_override() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(
                PROJECT_CONFIG_FILE,
                r#"
                [scaffold]
                root = "docs/autogen"

                [outline]
                indent_unit = 4
                "#,
            )?;
            jail.set_env("DOCSCAFFOLD_NAMING__ANCHOR_PREFIX", "doc-");

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.scaffold.root, PathBuf::from("docs/autogen"));
            assert_eq!(config.outline.indent_unit, 4);
            assert_eq!(config.naming.anchor_prefix, "doc-");
            assert_eq!(config.scaffold.index_name, "Index.vue");
            Ok(())
        });
    }

    #[test]
    fn test_global_config_is_overridden_by_project() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_dir("docscaffold")?;
            jail.create_file(
                "docscaffold/config.toml",
                "[naming]\ncomponent_suffix = \"Global\"\nfallback_token = \"Part\"\n",
            )?;
            jail.create_file(PROJECT_CONFIG_FILE, "[naming]\ncomponent_suffix = \"Local\"\n")?;

            let config = ConfigLoader::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.naming.component_suffix, "Local");
            assert_eq!(config.naming.fallback_token, "Part");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let result = ConfigLoader::load(Some(Path::new("nope.toml")));
            assert!(matches!(result, Err(ScaffoldError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_fails_validation() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            jail.create_file(PROJECT_CONFIG_FILE, "[outline]\nindent_unit = 0\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_init_project_writes_loadable_config() {
        Jail::expect_with(|jail| {
            isolate_global(jail);
            let path =
                ConfigLoader::init_project(jail.directory(), false).map_err(|e| e.to_string())?;

            let config = ConfigLoader::load(Some(&path)).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_init_project_keeps_existing_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "version = \"custom\"\n").unwrap();

        ConfigLoader::init_project(temp.path(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "version = \"custom\"\n");

        ConfigLoader::init_project(temp.path(), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[scaffold]"));
    }

    #[test]
    fn test_render_round_trips_through_toml() {
        let rendered = ConfigLoader::render(&Config::default(), false).unwrap();
        assert!(rendered.contains("indent_unit = 2"));

        let json = ConfigLoader::render(&Config::default(), true).unwrap();
        assert!(json.contains("\"anchor_prefix\": \"rawdocs-\""));
    }
}
