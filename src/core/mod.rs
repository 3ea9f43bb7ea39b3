//! core
//!
//! Domain types and path resolution.
//!
//! # Modules
//!
//! - [`types`] - Validated domain types ([`types::ProjectName`])
//! - [`paths`] - Template-root and target-path resolution

pub mod paths;
pub mod types;
