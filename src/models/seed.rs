//! Starter contacts copied into every new session.

use crate::models::{Contact, NewContactForm};
use crate::services::validation::{validate_contact, ValidationFailure};
use std::sync::Arc;

const SAMPLE_CONTACTS: [(&str, &str, &str); 4] = [
    ("Mike", "Jones", "281-330-8004"),
    ("Jenny", "Keys", "768-867-5309"),
    ("Max", "Entiger", "214-748-3647"),
    ("Alicia", "Keys", "515-489-4608"),
];

/// An immutable set of contacts used to initialize new contact stores.
///
/// Cloning a `SeedData` shares the underlying contacts. Stores copy the
/// contacts out when they are created, so appending to one store never
/// changes the seed or any other store.
#[derive(Debug, Clone)]
pub struct SeedData {
    contacts: Arc<[Contact]>,
}

impl SeedData {
    /// The four sample contacts every new session starts with.
    pub fn sample() -> Result<Self, ValidationFailure> {
        Self::from_forms(
            SAMPLE_CONTACTS
                .iter()
                .map(|(first, last, phone)| NewContactForm::new(*first, *last, *phone)),
        )
    }

    /// Build seed data from raw rows, validating each one against the rows
    /// accepted before it.
    ///
    /// # Errors
    ///
    /// Returns the first row that fails validation, including a repeated name.
    pub fn from_forms(
        forms: impl IntoIterator<Item = NewContactForm>,
    ) -> Result<Self, ValidationFailure> {
        let mut contacts = Vec::new();
        for form in forms {
            let contact = validate_contact(&form, &contacts)?;
            contacts.push(contact);
        }
        Ok(Self {
            contacts: contacts.into(),
        })
    }

    /// Seed data with no contacts.
    pub fn empty() -> Self {
        Self {
            contacts: Vec::<Contact>::new().into(),
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn test_sample_seed_has_four_contacts_in_insertion_order() {
        let seed = SeedData::sample().unwrap();
        let names: Vec<String> = seed.contacts().iter().map(Contact::full_name).collect();
        assert_eq!(
            names,
            vec!["Mike Jones", "Jenny Keys", "Max Entiger", "Alicia Keys"]
        );
    }

    #[test]
    fn test_seed_rejects_duplicate_rows() {
        let result = SeedData::from_forms(vec![
            NewContactForm::new("Mike", "Jones", "281-330-8004"),
            NewContactForm::new("mike", "JONES", "111-111-1111"),
        ]);
        let failure = result.unwrap_err();
        assert_eq!(failure.errors, vec![ValidationError::DuplicateContact]);
    }

    #[test]
    fn test_empty_seed() {
        assert!(SeedData::empty().contacts().is_empty());
    }
}
