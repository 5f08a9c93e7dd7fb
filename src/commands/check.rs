//! Check command implementation
//!
//! Validates the scaffolding environment: render tool on PATH, templates
//! root present, context environment variables set.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::context::CONTEXT_VARS;
use crate::settings::Settings;
use crate::templates;
use crate::utils::tools;

/// Check renderer and template setup
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Directory holding the template trees
    #[arg(long, env = "PYTEMPLATE_TEMPLATES_DIR")]
    pub templates_dir: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let settings = Settings::load(self.templates_dir)?;

        println!("🔍 Checking scaffolding environment...");

        let mut checker = EnvironmentChecker::new(verbose);
        checker.check_renderer(&settings.renderer);
        checker.check_templates(&settings);
        checker.check_context_vars();
        checker.print_summary();

        // Exit with error if there are errors
        if !checker.errors.is_empty() {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Environment checker
struct EnvironmentChecker {
    verbose: bool,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl EnvironmentChecker {
    fn new(verbose: bool) -> Self {
        Self {
            verbose,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn print_ok(&self, msg: &str) {
        println!("  ✅ {}", msg);
    }

    fn print_error(&mut self, msg: &str) {
        println!("  ❌ {}", msg);
        self.errors.push(msg.to_string());
    }

    fn print_warning(&mut self, msg: &str) {
        println!("  ⚠️  {}", msg);
        self.warnings.push(msg.to_string());
    }

    fn print_info(&self, msg: &str) {
        println!("  ℹ️  {}", msg);
    }

    fn print_section(&self, title: &str) {
        println!("\n{}", "=".repeat(60));
        println!("  {}", title);
        println!("{}", "=".repeat(60));
    }

    /// Check the render tool installation
    fn check_renderer(&mut self, renderer: &str) {
        self.print_section("Render tool");

        match tools::check_tool(renderer) {
            Some(info) => {
                match &info.version {
                    Some(version) => self.print_ok(&format!("{}: Found {}", info.name, version)),
                    None => self.print_ok(&format!("{}: Found", info.name)),
                }
                if self.verbose {
                    self.print_info(&format!("  at {}", info.path.display()));
                }
            }
            None => {
                self.print_error(&format!("{}: Not found", renderer));
                self.print_info("Install with: pipx install cookiecutter");
            }
        }
    }

    /// Check the templates root
    fn check_templates(&mut self, settings: &Settings) {
        self.print_section("Templates");

        if !settings.templates_dir.is_dir() {
            self.print_error(&format!(
                "templates directory not found: {}",
                settings.templates_dir.display()
            ));
            self.print_info("Set --templates-dir or PYTEMPLATE_TEMPLATES_DIR");
            return;
        }

        let names = templates::available(&settings.templates_dir);
        if names.is_empty() {
            self.print_error(&format!(
                "no '<name>-template' directories in {}",
                settings.templates_dir.display()
            ));
            return;
        }

        self.print_ok(&format!(
            "{}: {} template(s)",
            settings.templates_dir.display(),
            names.len()
        ));
        if self.verbose {
            for name in names {
                self.print_info(&format!("  {}", name));
            }
        }
    }

    /// Check the context environment variables
    fn check_context_vars(&mut self) {
        self.print_section("Context variables");

        for var in CONTEXT_VARS {
            match std::env::var(var.env) {
                Ok(value) => self.print_ok(&format!("{}: {}", var.env, value)),
                Err(_) => self.print_warning(&format!(
                    "{}: Not set (will use \"{}\")",
                    var.env, var.default
                )),
            }
        }
    }

    /// Print summary of check results
    fn print_summary(&self) {
        self.print_section("Summary");

        if !self.errors.is_empty() {
            println!("  Total Errors: {}", self.errors.len());
        }
        if !self.warnings.is_empty() {
            println!("  Total Warnings: {}", self.warnings.len());
        }

        if self.errors.is_empty() {
            println!("  🎉 Ready to create projects!");
        } else {
            println!("  💡 Fix the errors above before running create.");
        }
        println!("{}\n", "=".repeat(60));
    }
}
