//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive project-name prompt
//! - [`output`] - Colored status messages
//!
//! # Design
//!
//! All terminal output and prompting goes through this module so the tool
//! speaks with one voice: status on stdout, errors on stderr, colors via
//! `colored` (which degrades to plain text when the stream is not a TTY).

pub mod output;
pub mod prompts;
