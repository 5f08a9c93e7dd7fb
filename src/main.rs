//! pytemplate CLI - scaffold Python projects from cookiecutter templates
//!
//! This is the Rust implementation of the pytemplate CLI. It does not render
//! templates itself; it resolves a bundled template directory, assembles the
//! substitution context, and hands both to the external `cookiecutter` tool.
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → templates/ resolution → cookiecutter (subprocess)
//! ```

mod cli;
mod commands;
mod context;
mod error;
mod exec;
mod settings;
mod templates;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use error::ScaffoldError;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.execute() {
        if let Some(scaffold) = err.downcast_ref::<ScaffoldError>() {
            scaffold.display_with_hints();
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}
