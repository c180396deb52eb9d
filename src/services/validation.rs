//! Validation of proposed contacts.
//!
//! `validate_contact` is a pure check of a submitted form against the
//! contacts already stored. It never touches the store; the caller decides
//! whether to append the returned contact.

use crate::domain::{NameField, PersonName, PhoneNumber, ValidationError};
use crate::models::{Contact, NewContactForm};
use std::fmt;

/// A rejected submission: every failing rule plus the trimmed field values,
/// so the form can be shown again without retyping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub form: NewContactForm,
    /// Never empty. Ordered first name, last name, uniqueness, phone.
    pub errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// The user-facing messages, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate `form` against the formatting rules and against `existing`.
///
/// Every field is checked and all failures are collected. Within one field
/// only the first failing rule is reported. The uniqueness check runs only
/// once both names are well formed.
///
/// # Errors
///
/// Returns a `ValidationFailure` with at least one error when any rule fails.
pub fn validate_contact(
    form: &NewContactForm,
    existing: &[Contact],
) -> Result<Contact, ValidationFailure> {
    let mut errors = Vec::new();

    let first_name = collect(
        PersonName::parse(NameField::First, &form.first_name),
        &mut errors,
    );
    let last_name = collect(
        PersonName::parse(NameField::Last, &form.last_name),
        &mut errors,
    );

    if let (Some(first), Some(last)) = (&first_name, &last_name) {
        if is_duplicate(first, last, existing) {
            errors.push(ValidationError::DuplicateContact);
        }
    }

    let phone_number = collect(PhoneNumber::parse(&form.phone_number), &mut errors);

    match (first_name, last_name, phone_number) {
        (Some(first), Some(last), Some(phone)) if errors.is_empty() => {
            Ok(Contact::new(first, last, phone))
        }
        _ => Err(ValidationFailure {
            form: form.trimmed(),
            errors,
        }),
    }
}

fn collect<T>(result: Result<T, ValidationError>, errors: &mut Vec<ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn is_duplicate(first: &PersonName, last: &PersonName, existing: &[Contact]) -> bool {
    let candidate = format!("{} {}", first, last);
    existing
        .iter()
        .any(|contact| contact.full_name().eq_ignore_ascii_case(&candidate))
}
