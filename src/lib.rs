//! create-jtc - Scaffold new JTC Starter Kit projects
//!
//! create-jtc is a single-binary tool that stamps out a fresh JTC Starter Kit
//! project: it resolves a project name (argument or interactive prompt),
//! copies the bundled template tree into `<cwd>/<name>`, and rewrites the new
//! project's `package.json` name field.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, drives the scaffold)
//! - [`core`] - Domain types and path resolution
//! - [`scaffold`] - Filesystem mutations: copy, patch, cleanup
//! - [`ui`] - User interaction utilities (prompts, colored output)
//!
//! # Correctness Invariants
//!
//! 1. A project name is validated before any filesystem mutation occurs
//! 2. An existing target directory is never touched (collision aborts)
//! 3. The template tree is never mutated
//! 4. A failed scaffold leaves no partial target directory behind
//!    (best-effort cleanup)

pub mod cli;
pub mod core;
pub mod scaffold;
pub mod ui;
