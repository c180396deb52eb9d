//! Per-client session state.
//!
//! A session owns one contact list and a queue of flash messages. Sessions
//! live in a `SessionStore` and are found again through the session cookie.

pub mod flash;
pub mod id;
pub mod store;

pub use flash::{FlashKind, FlashMessage};
pub use id::SessionId;
pub use store::{SessionHandle, SessionStore};

use crate::models::SeedData;
use crate::repositories::InMemoryContactRepository;

/// State kept for one client between requests.
#[derive(Debug)]
pub struct Session {
    contacts: InMemoryContactRepository,
    flash: Vec<FlashMessage>,
}

impl Session {
    /// A fresh session holding its own copy of `seed`.
    pub fn new(seed: &SeedData) -> Self {
        Self {
            contacts: InMemoryContactRepository::seeded(seed),
            flash: Vec::new(),
        }
    }

    pub fn contacts(&self) -> &InMemoryContactRepository {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut InMemoryContactRepository {
        &mut self.contacts
    }

    /// Queue a message for the next rendered page.
    pub fn push_flash(&mut self, message: FlashMessage) {
        self.flash.push(message);
    }

    /// Drain all queued messages; each is returned exactly once.
    pub fn take_flash(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flash)
    }
}
