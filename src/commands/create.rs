//! Create command implementation
//!
//! The only command with an external side effect: it hands the resolved
//! template and context to the render tool, which mutates the filesystem.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::context::Context;
use crate::error::ScaffoldError;
use crate::exec::cookiecutter::Renderer;
use crate::settings::Settings;
use crate::templates;
use crate::utils::terminal;

/// Create a new project from a template
#[derive(Args, Debug)]
pub struct CreateCommand {
    /// Name of the project
    pub project_name: Option<String>,

    /// Template to use for project creation
    #[arg(short, long, default_value = "pyproject")]
    pub template: String,

    /// Skip prompts and use default values
    #[arg(short = 'y', long)]
    pub no_input: bool,

    /// Overwrite existing project directory
    #[arg(short, long)]
    pub force: bool,

    /// Directory holding the template trees
    #[arg(long, env = "PYTEMPLATE_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl CreateCommand {
    /// Execute the create command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let settings = Settings::load(self.templates_dir)?;

        // Resolution must succeed before anything else is constructed
        let template = templates::resolve(&settings.templates_dir, &self.template)?;

        if verbose {
            terminal::print_info(&format!("using template at {}", template.path.display()));
        }

        let context = Context::from_env(self.project_name.as_deref());
        if verbose {
            terminal::print_info(&format!("context: {}", context));
        }

        let renderer = Renderer::new(&settings)?;
        let command = renderer.build_command(&template.path, &context, self.no_input, self.force);

        let spinner =
            terminal::create_spinner(&format!("Rendering {} template...", template.name));
        let result = renderer.run(&command, verbose);
        spinner.finish_and_clear();
        let result = result?;

        if !result.success {
            terminal::print_error("project creation failed");
            if !result.stdout.is_empty() {
                eprintln!("\n{}", style("STDOUT:").yellow().bold());
                eprintln!("{}", result.stdout);
            }
            if !result.stderr.is_empty() {
                eprintln!("\n{}", style("STDERR:").red().bold());
                eprintln!("{}", result.stderr);
            }
            return Err(
                ScaffoldError::render_failed(command.join(" "), result.exit_code).into(),
            );
        }

        terminal::print_success("project created");
        if verbose {
            terminal::print_info(&format!("render completed in {:.1?}", result.duration));
        }

        let output = result.stdout.trim();
        if !output.is_empty() {
            println!("{}", output);
        }

        Ok(())
    }
}
