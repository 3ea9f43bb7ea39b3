//! ui::output
//!
//! Colored status messages.
//!
//! One function per message kind; no formatting decisions leak into the
//! callers.

use std::path::Path;

use colored::Colorize;

use crate::core::types::ProjectName;

/// Print the welcome banner.
pub fn banner() {
    println!("\n{}\n", "🚀 Welcome to JTC Starter Kit!".blue().bold());
}

/// Announce where the project is about to be created.
pub fn creating(target: &Path) {
    println!(
        "{}\n",
        format!("📁 Creating project in {}...", target.display().to_string().bold()).green()
    );
}

/// Print the success summary with numbered next steps.
pub fn success(name: &ProjectName) {
    println!("\n{}\n", "✅ Project created successfully!".green());
    println!("{}\n", "📝 Next steps:".cyan());
    println!("{}", format!("  1. cd {}", name).white());
    println!("{}", "  2. npm install".white());
    println!("{}", "  3. npm run dev\n".white());
    println!("{}\n", "Happy coding! 🎉".yellow());
}

/// Report a target-directory collision.
pub fn collision(name: &ProjectName) {
    println!("\n{}", format!("❌ Directory {} already exists!", name).red());
}

/// Print an error banner with the full cause chain.
pub fn error(err: &anyhow::Error) {
    eprintln!("\n{} {:#}", "❌ Error creating project:".red(), err);
}
