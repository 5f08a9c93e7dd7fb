//! Template resolution
//!
//! Templates are directories named `<name>-template` under the configured
//! templates root. Resolution is a read-only existence check; the directory
//! contents are opaque to this tool and are consumed by the renderer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Suffix every template directory carries
pub const TEMPLATE_SUFFIX: &str = "-template";

/// A resolved template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Short name, e.g. `pyproject`
    pub name: String,

    /// Validated directory path
    pub path: PathBuf,
}

/// Resolve a template name to its directory under `templates_dir`
///
/// Fails with the sorted list of valid names when the directory is absent.
pub fn resolve(templates_dir: &Path, name: &str) -> Result<Template, ScaffoldError> {
    let path = templates_dir.join(format!("{}{}", name, TEMPLATE_SUFFIX));

    if !path.is_dir() {
        return Err(ScaffoldError::template_not_found(
            name,
            templates_dir,
            available(templates_dir),
        ));
    }

    Ok(Template {
        name: name.to_string(),
        path,
    })
}

/// Enumerate the valid template names under `templates_dir`, sorted
///
/// An unreadable or missing root yields an empty list; the caller reports
/// that as "no templates found" rather than a separate failure.
pub fn available(templates_dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(templates_dir)
        .ok()
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_dir())
                .filter_map(|e| {
                    e.file_name()
                        .to_str()
                        .and_then(|n| n.strip_suffix(TEMPLATE_SUFFIX))
                        .map(String::from)
                })
                .collect()
        })
        .unwrap_or_default();

    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn templates_root(names: &[&str]) -> TempDir {
        let root = TempDir::new().unwrap();
        for name in names {
            fs::create_dir(root.path().join(format!("{}{}", name, TEMPLATE_SUFFIX))).unwrap();
        }
        root
    }

    #[test]
    fn test_resolve_existing_template() {
        let root = templates_root(&["pyproject", "fastapi"]);
        let template = resolve(root.path(), "pyproject").unwrap();
        assert_eq!(template.name, "pyproject");
        assert_eq!(template.path, root.path().join("pyproject-template"));
    }

    #[test]
    fn test_resolve_unknown_template_lists_alternatives() {
        let root = templates_root(&["pyproject", "fastapi"]);
        let err = resolve(root.path(), "django").unwrap_err();
        match err {
            ScaffoldError::TemplateNotFound { name, available, .. } => {
                assert_eq!(name, "django");
                assert_eq!(available, vec!["fastapi", "pyproject"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_available_ignores_non_template_entries() {
        let root = templates_root(&["pyproject"]);
        fs::create_dir(root.path().join("scratch")).unwrap();
        fs::write(root.path().join("notes-template"), b"file, not dir").unwrap();

        assert_eq!(available(root.path()), vec!["pyproject"]);
    }

    #[test]
    fn test_available_missing_root_is_empty() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        assert!(available(&missing).is_empty());
    }

    #[test]
    fn test_resolve_rejects_file_with_template_suffix() {
        let root = templates_root(&[]);
        fs::write(root.path().join("pyproject-template"), b"not a dir").unwrap();
        assert!(resolve(root.path(), "pyproject").is_err());
    }
}
