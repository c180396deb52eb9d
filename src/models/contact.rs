//! Contact model and the raw form submitted to create one.

use crate::domain::{PersonName, PhoneNumber};
use serde::Deserialize;

/// A contact in the list.
///
/// Contacts are only built from validated value objects and never change once
/// created. The first and last name pair identifies a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    phone_number: PhoneNumber,
}

impl Contact {
    /// Create a contact from already validated fields.
    pub fn new(first_name: PersonName, last_name: PersonName, phone_number: PhoneNumber) -> Self {
        Self {
            first_name,
            last_name,
            phone_number,
        }
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// `"<first> <last>"`, the key used for the uniqueness check.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Raw field values submitted through the new contact form.
///
/// All three fields must be present in the request body; their contents are
/// not checked until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl NewContactForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Copy of the form with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.phone_number.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameField;

    fn contact(first: &str, last: &str, phone: &str) -> Contact {
        Contact::new(
            PersonName::parse(NameField::First, first).unwrap(),
            PersonName::parse(NameField::Last, last).unwrap(),
            PhoneNumber::parse(phone).unwrap(),
        )
    }

    #[test]
    fn test_full_name() {
        let contact = contact("Jenny", "Keys", "768-867-5309");
        assert_eq!(contact.full_name(), "Jenny Keys");
    }

    #[test]
    fn test_form_trimmed() {
        let form = NewContactForm::new("  Aaron ", "Banks\t", " 555-123-4567 ");
        assert_eq!(
            form.trimmed(),
            NewContactForm::new("Aaron", "Banks", "555-123-4567")
        );
    }
}
