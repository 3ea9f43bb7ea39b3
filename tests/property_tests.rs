//! Property-based tests for project-name validation.
//!
//! These tests use proptest to verify the validator's accept/reject sets
//! across randomly generated inputs.

use proptest::prelude::*;

use create_jtc::core::types::ProjectName;

/// Strategy for generating valid project-name characters.
fn name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
    ]
}

/// Strategy for generating valid project names.
fn valid_name() -> impl Strategy<Value = String> {
    prop::collection::vec(name_char(), 1..40).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a character outside the allowed set.
fn forbidden_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be outside [A-Za-z0-9_-]", |c| {
        !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
    })
}

proptest! {
    /// Every string over the allowed alphabet constructs a name that
    /// round-trips unchanged.
    #[test]
    fn valid_names_are_accepted(name in valid_name()) {
        let parsed = ProjectName::new(name.as_str()).unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    /// A single forbidden character anywhere in an otherwise valid name
    /// causes rejection.
    #[test]
    fn any_forbidden_character_rejects(
        prefix in valid_name(),
        bad in forbidden_char(),
        suffix in valid_name(),
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(ProjectName::new(name).is_err());
    }

    /// Strings made entirely of forbidden characters are rejected.
    #[test]
    fn fully_forbidden_strings_reject(chars in prop::collection::vec(forbidden_char(), 1..20)) {
        let name: String = chars.into_iter().collect();
        prop_assert!(ProjectName::new(name).is_err());
    }
}
