//! Domain validation errors.

use super::name::NameField;
use std::fmt;

/// Errors that can occur while validating a proposed contact.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field is empty after trimming.
    NameRequired(NameField),

    /// The name field is longer than the allowed maximum.
    NameTooLong(NameField),

    /// The name field contains something other than ASCII letters.
    NameNotAlphabetic(NameField),

    /// Another contact already uses the same first and last name.
    DuplicateContact,

    /// The phone number field is empty after trimming.
    PhoneRequired,

    /// The phone number is not in `###-###-####` form.
    InvalidPhone,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired(field) => write!(f, "{} is required.", field),
            Self::NameTooLong(field) => write!(
                f,
                "{} maximum length is {} characters.",
                field,
                super::name::MAX_NAME_LENGTH
            ),
            Self::NameNotAlphabetic(field) => {
                write!(f, "{} must only contain alphabetical characters.", field)
            }
            Self::DuplicateContact => write!(
                f,
                "Contact already exists in database. First and last name must be unique."
            ),
            Self::PhoneRequired => write!(f, "Phone number is required."),
            Self::InvalidPhone => write!(
                f,
                "Invalid phone number. Must be valid US style phone number in format of ###-###-####."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
