//! PersonName value object.

use super::errors::ValidationError;
use super::rules::{first_failure, Rule};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Longest first or last name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 25;

static ALPHABETIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("Failed to compile alphabetic name regex"));

/// Which of the two name fields a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl NameField {
    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "First name",
            Self::Last => "Last name",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated first or last name.
///
/// Names are trimmed, 1 to 25 characters long, and made only of ASCII
/// letters.
///
/// # Example
///
/// ```
/// use contacts_manager::domain::{NameField, PersonName};
///
/// let name = PersonName::parse(NameField::First, "  Jenny ").unwrap();
/// assert_eq!(name.as_str(), "Jenny");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Trim `raw` and check it against the name rules for `field`.
    ///
    /// # Errors
    ///
    /// Returns the error of the first rule that fails: required, maximum
    /// length, then alphabetic characters.
    pub fn parse(field: NameField, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        let rules = [
            Rule::new(|v| !v.is_empty(), ValidationError::NameRequired(field)),
            Rule::new(
                |v| v.chars().count() <= MAX_NAME_LENGTH,
                ValidationError::NameTooLong(field),
            ),
            Rule::new(
                |v| ALPHABETIC_REGEX.is_match(v),
                ValidationError::NameNotAlphabetic(field),
            ),
        ];

        match first_failure(value, &rules) {
            Some(error) => Err(error),
            None => Ok(Self(value.to_string())),
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
