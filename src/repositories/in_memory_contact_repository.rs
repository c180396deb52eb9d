use crate::models::{Contact, SeedData};
use crate::repositories::traits::ContactRepository;

/// Contact repository held entirely in memory.
///
/// Each instance owns its contacts outright. A session keeps one of these for
/// as long as the session lives.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding its own copy of the seed contacts.
    pub fn seeded(seed: &SeedData) -> Self {
        Self {
            contacts: seed.contacts().to_vec(),
        }
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn list(&self) -> &[Contact] {
        &self.contacts
    }

    fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }
}
