//! Page templates.
//!
//! Templates live under `templates/` and are compiled into the binary by
//! askama. Each page struct is exactly the data its template reads.

use crate::error::AppResult;
use crate::models::{Contact, NewContactForm};
use crate::session::FlashMessage;
use askama::Template;
use axum::response::Html;

/// The contact list.
#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactsPage {
    /// Already in display order.
    pub contacts: Vec<Contact>,
    pub flash: Vec<FlashMessage>,
}

/// The new contact form, empty or echoing a rejected submission.
#[derive(Template)]
#[template(path = "new_contact.html")]
pub struct NewContactPage {
    pub form: NewContactForm,
    pub flash: Vec<FlashMessage>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub path: String,
}

/// Render a page into an HTML response body.
pub fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}
