use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over where a contact list lives. Callers validate
/// before appending; implementations store what they are given.
pub trait ContactRepository: Send + Sync {
    /// All stored contacts in insertion order.
    fn list(&self) -> &[Contact];

    /// Add a contact at the end of the list.
    fn append(&mut self, contact: Contact);
}
