//! CLI Common Utilities
//!
//! Shared configuration loading for command handlers.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader};
use crate::generator::invocation_from_env;
use crate::types::Result;

/// Path overrides given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub outline: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub releases: Option<PathBuf>,
    pub public: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(outline) = &self.outline {
            config.outline.path = outline.clone();
        }
        if let Some(root) = &self.root {
            config.scaffold.root = root.clone();
        }
        if let Some(releases) = &self.releases {
            config.manifest.releases_dir = releases.clone();
        }
        if let Some(public) = &self.public {
            config.manifest.public_dir = public.clone();
        }
        if let Some(output) = &self.output {
            config.manifest.output = output.clone();
        }
    }
}

/// Command execution context
///
/// Effective configuration plus the command line recorded in generated files.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub invocation: String,
}

impl CommandContext {
    /// Load configuration (file layers, env, then CLI overrides)
    pub fn load(config_file: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = ConfigLoader::load(config_file)?;
        overrides.apply(&mut config);
        config.validate()?;

        Ok(Self {
            config,
            invocation: invocation_from_env(),
        })
    }
}
