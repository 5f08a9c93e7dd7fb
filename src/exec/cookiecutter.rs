//! Render tool invocation
//!
//! Builds the full cookiecutter command vector and runs it. The vector is
//! `[tool, <template path>, key=value..., --no-input?, --overwrite-if-exists?]`
//! and is consumed exactly once.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::context::Context;
use crate::settings::Settings;
use crate::utils::tools;

use super::subprocess::{run_command, CommandResult};

/// Handle on a located render tool
pub struct Renderer {
    program: String,
}

impl Renderer {
    /// Locate the configured render tool on PATH
    pub fn new(settings: &Settings) -> Result<Self> {
        tools::require_tool(&settings.renderer, "rendering project templates")?;

        Ok(Self {
            program: settings.renderer.clone(),
        })
    }

    /// Build the full command vector for one render invocation
    ///
    /// Order is fixed: tool, template path, one `key=value` token per
    /// context entry, then each flag token only when requested.
    pub fn build_command(
        &self,
        template_path: &Path,
        context: &Context,
        no_input: bool,
        force: bool,
    ) -> Vec<String> {
        let mut command = vec![
            self.program.clone(),
            template_path.display().to_string(),
        ];

        command.extend(context.iter().map(|(k, v)| format!("{}={}", k, v)));

        if no_input {
            command.push("--no-input".to_string());
        }

        if force {
            command.push("--overwrite-if-exists".to_string());
        }

        command
    }

    /// Run a previously built command vector, capturing output
    pub fn run(&self, command: &[String], verbose: bool) -> Result<CommandResult> {
        let (program, args) = command
            .split_first()
            .context("empty render command")?;

        if verbose {
            eprintln!("Executing: {}", command.join(" "));
        }

        run_command(program, args).context("Failed to execute render tool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn renderer() -> Renderer {
        Renderer {
            program: "cookiecutter".to_string(),
        }
    }

    fn demo_context() -> Context {
        Context::from_lookup(|_| None, Some("demo"))
    }

    #[test]
    fn test_build_command_order() {
        let command = renderer().build_command(
            &PathBuf::from("/opt/templates/pyproject-template"),
            &demo_context(),
            false,
            false,
        );
        assert_eq!(
            command,
            vec![
                "cookiecutter",
                "/opt/templates/pyproject-template",
                "author=your name",
                "email=your@email.com",
                "github_username=your_username",
                "project_name=demo",
            ]
        );
    }

    #[test]
    fn test_build_command_flags_appended_in_order() {
        let command = renderer().build_command(
            &PathBuf::from("/t/x-template"),
            &demo_context(),
            true,
            true,
        );
        let tail: Vec<_> = command.iter().rev().take(2).rev().collect();
        assert_eq!(tail, ["--no-input", "--overwrite-if-exists"]);
    }

    #[test]
    fn test_build_command_without_flags_has_no_flag_tokens() {
        let command = renderer().build_command(
            &PathBuf::from("/t/x-template"),
            &demo_context(),
            false,
            false,
        );
        assert!(!command.contains(&"--no-input".to_string()));
        assert!(!command.contains(&"--overwrite-if-exists".to_string()));
    }

    #[test]
    fn test_build_command_without_project_name() {
        let context = Context::from_lookup(|_| None, None);
        let command =
            renderer().build_command(&PathBuf::from("/t/x-template"), &context, false, false);
        // tool, path, three context tokens
        assert_eq!(command.len(), 5);
        assert!(!command.iter().any(|t| t.starts_with("project_name=")));
    }
}
