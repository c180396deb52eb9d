//! Contact service layer.
//!
//! Composes validation, the sort policy and a contact repository into the
//! two operations the pages need: list and add.

use crate::models::{Contact, NewContactForm};
use crate::repositories::ContactRepository;
use crate::services::sort::sort_contacts;
use crate::services::validation::{validate_contact, ValidationFailure};
use tracing::{debug, info};

/// Contacts in display order.
pub fn list_contacts<R>(repo: &R) -> Vec<Contact>
where
    R: ContactRepository + ?Sized,
{
    sort_contacts(repo.list())
}

/// Validate `form` against the repository and append it on success.
///
/// Takes the repository mutably for the whole check-then-append, so holding
/// the owning session's lock around this call makes it atomic.
///
/// # Errors
///
/// Returns the `ValidationFailure` unchanged; nothing is appended.
pub fn add_contact<R>(repo: &mut R, form: &NewContactForm) -> Result<Contact, ValidationFailure>
where
    R: ContactRepository + ?Sized,
{
    let contact = match validate_contact(form, repo.list()) {
        Ok(contact) => contact,
        Err(failure) => {
            debug!(errors = failure.errors.len(), "Contact rejected");
            return Err(failure);
        }
    };

    repo.append(contact.clone());
    info!(
        name = %contact.full_name(),
        total = repo.list().len(),
        "Contact added"
    );
    Ok(contact)
}
