//! Settings assembly for the pytemplate CLI
//!
//! The CLI layer builds one `Settings` value per invocation and passes it
//! by reference into the resolver and the renderer. Nothing here is cached
//! process-wide.
//!
//! Precedence for the templates root:
//! 1. `--templates-dir` flag (or `PYTEMPLATE_TEMPLATES_DIR`, merged by clap)
//! 2. `templates_dir` in `pytemplate.toml`
//! 3. `templates/` next to the executable, else `./templates`

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::error::{ResultExt, ScaffoldError};
use crate::utils::paths;

/// Name of the optional configuration file
pub const CONFIG_FILE_NAME: &str = "pytemplate.toml";

/// External renderer used when the configuration does not name one
pub const DEFAULT_RENDERER: &str = "cookiecutter";

/// Resolved per-invocation configuration
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the `<name>-template` trees
    pub templates_dir: PathBuf,

    /// Program name of the external render tool
    pub renderer: String,
}

impl Settings {
    /// Assemble settings from the CLI flag, the optional config file, and
    /// the built-in defaults
    pub fn load(templates_dir_flag: Option<PathBuf>) -> Result<Self> {
        let config = match ConfigFile::discover() {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };

        let templates_dir = templates_dir_flag
            .or(config.templates_dir)
            .unwrap_or_else(paths::default_templates_dir);

        let renderer = config.renderer.unwrap_or_else(|| DEFAULT_RENDERER.to_string());

        Ok(Self {
            templates_dir,
            renderer,
        })
    }
}

/// On-disk configuration from pytemplate.toml
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// Overrides the templates root
    pub templates_dir: Option<PathBuf>,

    /// Overrides the render tool program name
    pub renderer: Option<String>,
}

impl ConfigFile {
    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ScaffoldError> {
        toml::from_str(content).context_with_hint(
            format!("invalid {}", CONFIG_FILE_NAME),
            "Expected optional keys: templates_dir (path), renderer (string)",
        )
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ScaffoldError> {
        let content = std::fs::read_to_string(path)
            .with_hint(format!("Remove or fix {} to proceed", path.display()))?;
        Self::parse(&content)
    }

    /// Locate the configuration file: current directory first, then the
    /// user config directory
    pub fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }

        paths::user_config_file().filter(|p| p.is_file())
    }
}
