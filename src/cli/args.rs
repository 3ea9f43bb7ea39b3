//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! The surface is deliberately small: one optional positional argument plus
//! clap's built-in `--help`/`--version`. The template location is not a
//! flag; it resolves next to the installed binary (see
//! [`crate::core::paths`]).

use clap::Parser;

/// Create a new JTC Starter Kit project
#[derive(Parser, Debug)]
#[command(name = "create-jtc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project (prompted for when omitted)
    pub name: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
