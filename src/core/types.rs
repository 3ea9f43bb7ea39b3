//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Validation
//!
//! [`ProjectName`] enforces validity at construction time. An invalid name
//! cannot be represented, so nothing downstream of the CLI boundary needs to
//! re-check it.
//!
//! # Examples
//!
//! ```
//! use create_jtc::core::types::ProjectName;
//!
//! let name = ProjectName::new("my-jtc-app").unwrap();
//! assert_eq!(name.as_str(), "my-jtc-app");
//!
//! assert!(ProjectName::new("bad name!").is_err());
//! assert!(ProjectName::new("").is_err());
//! ```

use std::fmt;

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid project name: {0}")]
    InvalidProjectName(String),
}

/// Guidance shown whenever a name fails the character-set check.
///
/// Kept verbatim in one place so the interactive prompt and the argument
/// error report the same rule.
pub const NAME_RULE: &str =
    "Project name may only include letters, numbers, underscores and hashes.";

/// A validated project name.
///
/// Project names become directory names and `package.json` name fields, so
/// they are restricted to `[A-Za-z0-9_-]+`:
/// - Cannot be empty
/// - Only ASCII letters, digits, `-`, and `_`
///
/// # Example
///
/// ```
/// use create_jtc::core::types::ProjectName;
///
/// assert!(ProjectName::new("My_App-2").is_ok());
/// assert!(ProjectName::new("has space").is_err());
/// assert!(ProjectName::new("dot.name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidProjectName` if the name is empty or
    /// contains a character outside `[A-Za-z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidProjectName(
                "project name cannot be empty".into(),
            ));
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TypeError::InvalidProjectName(NAME_RULE.into()));
        }

        Ok(())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_dash_underscore() {
        for name in ["my-app", "My_App", "app2", "a", "0", "_", "-", "A-b_3"] {
            let parsed = ProjectName::new(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(ProjectName::new("").is_err());
    }

    #[test]
    fn rejects_forbidden_characters() {
        for name in [
            "bad name!",
            "has space",
            "dot.name",
            "slash/name",
            "tab\tname",
            "émigré",
            "app@2",
        ] {
            assert!(ProjectName::new(name).is_err(), "accepted {:?}", name);
        }
    }

    #[test]
    fn charset_failure_carries_the_user_facing_rule() {
        let err = ProjectName::new("bad name!").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidProjectName(NAME_RULE.into())
        );
    }

    #[test]
    fn displays_as_plain_string() {
        let name = ProjectName::new("my-jtc-app").unwrap();
        assert_eq!(name.to_string(), "my-jtc-app");
    }
}
