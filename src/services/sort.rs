//! Display ordering for contacts.

use crate::models::Contact;
use std::cmp::Ordering;

/// Order two contacts by last name, then first name.
///
/// Names are compared byte-wise as stored, so uppercase letters sort before
/// lowercase ones and no locale folding happens.
pub fn compare_by_name(a: &Contact, b: &Contact) -> Ordering {
    a.last_name()
        .as_str()
        .cmp(b.last_name().as_str())
        .then_with(|| a.first_name().as_str().cmp(b.first_name().as_str()))
}

/// Return a sorted copy of `contacts`; the input is left untouched.
///
/// The sort is stable, so contacts with identical names keep their relative
/// order.
pub fn sort_contacts(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(compare_by_name);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NameField, PersonName, PhoneNumber};
    use crate::models::SeedData;

    fn contact(first: &str, last: &str, phone: &str) -> Contact {
        Contact::new(
            PersonName::parse(NameField::First, first).unwrap(),
            PersonName::parse(NameField::Last, last).unwrap(),
            PhoneNumber::parse(phone).unwrap(),
        )
    }

    fn names(contacts: &[Contact]) -> Vec<String> {
        contacts.iter().map(Contact::full_name).collect()
    }

    #[test]
    fn test_sorts_seed_by_last_then_first() {
        let seed = SeedData::sample().unwrap();
        let sorted = sort_contacts(seed.contacts());
        assert_eq!(
            names(&sorted),
            vec!["Max Entiger", "Mike Jones", "Alicia Keys", "Jenny Keys"]
        );
        // input keeps insertion order
        assert_eq!(seed.contacts()[0].full_name(), "Mike Jones");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let seed = SeedData::sample().unwrap();
        let once = sort_contacts(seed.contacts());
        let twice = sort_contacts(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_contacts(&[]).is_empty());
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let contacts = vec![
            contact("Ann", "adams", "111-111-1111"),
            contact("Bob", "Zimmer", "222-222-2222"),
        ];
        assert_eq!(names(&sort_contacts(&contacts)), vec!["Bob Zimmer", "Ann adams"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let contacts = vec![
            contact("Sam", "Lee", "111-111-1111"),
            contact("Sam", "Lee", "222-222-2222"),
            contact("Al", "Lee", "333-333-3333"),
        ];
        let sorted = sort_contacts(&contacts);
        let phones: Vec<&str> = sorted.iter().map(|c| c.phone_number().as_str()).collect();
        assert_eq!(phones, vec!["333-333-3333", "111-111-1111", "222-222-2222"]);
    }
}
