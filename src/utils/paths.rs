//! Path utilities for the pytemplate CLI

use std::path::PathBuf;

use directories::ProjectDirs;

/// Default templates root.
///
/// Prefers a `templates/` directory shipped next to the executable and
/// falls back to `templates/` under the current directory, which is where
/// a source checkout keeps the bundled trees.
pub fn default_templates_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("templates");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from("templates")
}

/// User-level configuration file location, if the platform provides one
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pytemplate")
        .map(|dirs| dirs.config_dir().join(crate::settings::CONFIG_FILE_NAME))
}
