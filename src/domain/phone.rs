//! PhoneNumber value object.

use super::errors::ValidationError;
use super::rules::{first_failure, Rule};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static US_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("Failed to compile phone number regex")
});

/// A validated US-style phone number.
///
/// # Example
///
/// ```
/// use contacts_manager::domain::PhoneNumber;
///
/// let phone = PhoneNumber::parse(" 555-123-4567 ").unwrap();
/// assert_eq!(phone.as_str(), "555-123-4567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Trim `raw` and check that it is a `###-###-####` phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneRequired` for an empty value and
    /// `ValidationError::InvalidPhone` for anything not in the expected format.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        let rules = [
            Rule::new(|v| !v.is_empty(), ValidationError::PhoneRequired),
            Rule::new(|v| US_PHONE_REGEX.is_match(v), ValidationError::InvalidPhone),
        ];

        match first_failure(value, &rules) {
            Some(error) => Err(error),
            None => Ok(Self(value.to_string())),
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
