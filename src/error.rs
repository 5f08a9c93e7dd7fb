//! Error types and helpers for user-friendly error messages
//!
//! This module provides custom error types with actionable hints and suggestions
//! to help users quickly resolve common issues.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Requested template does not exist
    #[error("template '{name}' not found in {}", templates_dir.display())]
    TemplateNotFound {
        name: String,
        templates_dir: PathBuf,
        available: Vec<String>,
    },

    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// The render subprocess exited non-zero
    #[error("render process exited with code {exit_code}")]
    RenderFailed { command: String, exit_code: i32 },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },
}

impl ScaffoldError {
    /// Create a template-not-found error carrying the valid alternatives
    pub fn template_not_found(
        name: impl Into<String>,
        templates_dir: impl Into<PathBuf>,
        available: Vec<String>,
    ) -> Self {
        Self::TemplateNotFound {
            name: name.into(),
            templates_dir: templates_dir.into(),
            available,
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a render failure error preserving the attempted command line
    pub fn render_failed(command: impl Into<String>, exit_code: i32) -> Self {
        Self::RenderFailed {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a configuration error with source and hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            ScaffoldError::TemplateNotFound { available, .. } => {
                if available.is_empty() {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), hints::templates_dir());
                } else {
                    eprintln!("\n{}", style("AVAILABLE TEMPLATES:").cyan().bold());
                    for name in available {
                        eprintln!("  • {}", name);
                    }
                }
            }
            ScaffoldError::MissingTool { required_for, hint, .. } => {
                eprintln!("Required for: {}", required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            ScaffoldError::RenderFailed { command, .. } => {
                eprintln!("Command: {}", command);
            }
            ScaffoldError::Config { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
        }

        eprintln!();
    }
}

/// Helper trait for adding hints to Result types
pub trait ResultExt<T> {
    /// Add a hint to an error
    fn with_hint(self, hint: impl Into<String>) -> Result<T, ScaffoldError>;

    /// Add context with a hint
    fn context_with_hint(
        self,
        context: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<T, ScaffoldError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_hint(self, hint: impl Into<String>) -> Result<T, ScaffoldError> {
        self.map_err(|e| ScaffoldError::config_error_with_hint(e.to_string(), Some(e.into()), hint))
    }

    fn context_with_hint(
        self,
        context: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<T, ScaffoldError> {
        self.map_err(|e| {
            ScaffoldError::config_error_with_hint(
                format!("{}: {}", context.into(), e),
                Some(e.into()),
                hint,
            )
        })
    }
}

/// Common error hints for missing pieces
pub mod hints {
    /// Get hint for missing cookiecutter
    pub fn cookiecutter() -> &'static str {
        "Install cookiecutter and ensure it's in your PATH:\n\
         • pipx install cookiecutter\n\
         • uv tool install cookiecutter\n\
         • pip install --user cookiecutter"
    }

    /// Get hint for a missing or empty templates directory
    pub fn templates_dir() -> &'static str {
        "No templates were found. The templates directory must contain\n\
         one '<name>-template' subdirectory per template.\n\
         \n\
         Point pytemplate at it with either:\n\
         • --templates-dir <dir>\n\
         • PYTEMPLATE_TEMPLATES_DIR=<dir>\n\
         • templates_dir = \"<dir>\" in pytemplate.toml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_message() {
        let err = ScaffoldError::template_not_found(
            "djangoo",
            "/opt/templates",
            vec!["fastapi".to_string(), "pyproject".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("djangoo"));
        assert!(msg.contains("/opt/templates"));
    }

    #[test]
    fn test_render_failed_keeps_command() {
        let err = ScaffoldError::render_failed("cookiecutter /tmp/x-template author=me", 2);
        assert!(err.to_string().contains("code 2"));
        match err {
            ScaffoldError::RenderFailed { command, exit_code } => {
                assert_eq!(exit_code, 2);
                assert!(command.starts_with("cookiecutter"));
            }
            _ => panic!("wrong variant"),
        }
    }
}
