//! List command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use console::style;
use walkdir::WalkDir;

use crate::settings::Settings;
use crate::templates::{self, TEMPLATE_SUFFIX};
use crate::utils::terminal;

/// List available templates
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Directory holding the template trees
    #[arg(long, env = "PYTEMPLATE_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl ListCommand {
    /// Execute the list command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let settings = Settings::load(self.templates_dir)?;
        let names = templates::available(&settings.templates_dir);

        if names.is_empty() {
            terminal::print_warning(&format!(
                "no templates found in {}",
                settings.templates_dir.display()
            ));
            return Ok(());
        }

        println!(
            "Available templates in {}:",
            settings.templates_dir.display()
        );

        for name in names {
            let path = settings
                .templates_dir
                .join(format!("{}{}", name, TEMPLATE_SUFFIX));
            println!(
                "  {}  {}",
                style(&name).cyan().bold(),
                style(path.display()).dim()
            );

            if verbose {
                if let Some(variables) = template_variables(&path) {
                    println!("    variables: {}", variables.join(", "));
                }
                println!("    files: {}", count_files(&path));
            }
        }

        Ok(())
    }
}

/// Placeholder keys declared in the template's cookiecutter.json
fn template_variables(template_path: &Path) -> Option<Vec<String>> {
    let content = std::fs::read_to_string(template_path.join("cookiecutter.json")).ok()?;
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).ok()?;
    Some(object.keys().cloned().collect())
}

/// Number of files in the template tree
fn count_files(template_path: &Path) -> usize {
    WalkDir::new(template_path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_template_variables_reads_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("cookiecutter.json"),
            r#"{"project_name": "my-project", "author": "your name"}"#,
        )
        .unwrap();

        let variables = template_variables(dir.path()).unwrap();
        assert!(variables.contains(&"project_name".to_string()));
        assert!(variables.contains(&"author".to_string()));
    }

    #[test]
    fn test_template_variables_missing_json() {
        let dir = TempDir::new().unwrap();
        assert!(template_variables(dir.path()).is_none());
    }

    #[test]
    fn test_count_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join("sub/b.txt"), b"b").unwrap();

        assert_eq!(count_files(dir.path()), 2);
    }
}
