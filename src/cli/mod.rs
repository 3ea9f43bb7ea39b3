//! cli
//!
//! Command-line interface layer for create-jtc.
//!
//! # Responsibilities
//!
//! - Parse the (single) command-line argument
//! - Resolve the project name: argument takes precedence over the prompt
//! - Drive [`crate::scaffold`] and report the outcome
//!
//! # Architecture
//!
//! The CLI layer is thin. It guards against a target collision up front
//! (nothing created, no cleanup, dedicated message, exit 1) and then hands
//! all filesystem mutations to [`crate::scaffold::create_project`], which
//! owns the cleanup rule. Other failures propagate to `main`, which prints
//! one error banner and exits 1.

pub mod args;

pub use args::Cli;

use anyhow::{Context, Result};

use crate::core::paths;
use crate::core::types::ProjectName;
use crate::scaffold;
use crate::ui::{output, prompts};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    output::banner();

    // An argument is validated through the same constructor the prompt uses,
    // so a bad name fails here, before any filesystem mutation.
    let name = match cli.name {
        Some(raw) => ProjectName::new(raw)?,
        None => prompts::project_name()?,
    };

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let target = paths::target_dir(&cwd, &name);
    let template_root = paths::template_root();

    // Collision is checked before anything is created (and before the
    // progress notice), so it never triggers cleanup. It gets its own
    // message rather than the generic error banner.
    if scaffold::ensure_target_available(&target).is_err() {
        output::collision(&name);
        std::process::exit(1);
    }

    output::creating(&target);

    scaffold::create_project(&template_root, &target, &name)?;

    output::success(&name);
    Ok(())
}
