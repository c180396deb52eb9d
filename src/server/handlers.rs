//! Request handlers.
//!
//! Handlers lock the caller's session, call into the service layer and
//! render a page. A session stays locked for the whole of a submission, so
//! the uniqueness check and the append cannot interleave with another
//! request from the same session.

use super::session::CurrentSession;
use super::views::{self, ContactsPage, NewContactPage, NotFoundPage};
use crate::error::{AppError, AppResult};
use crate::models::NewContactForm;
use crate::services;
use crate::session::FlashMessage;
use axum::extract::rejection::FormRejection;
use axum::extract::Extension;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use tracing::debug;

/// Flash shown after a contact is added.
pub const CONTACT_ADDED: &str = "New contact added to list!";

pub async fn index() -> Redirect {
    Redirect::to("/contacts")
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// `GET /contacts`
pub async fn list_contacts(
    Extension(session): Extension<CurrentSession>,
) -> AppResult<Html<String>> {
    let mut session = session.handle.lock().await;
    let page = ContactsPage {
        contacts: services::list_contacts(session.contacts()),
        flash: session.take_flash(),
    };
    views::render(&page)
}

/// `GET /contacts/new`
pub async fn new_contact_form(
    Extension(session): Extension<CurrentSession>,
) -> AppResult<Html<String>> {
    let mut session = session.handle.lock().await;
    let page = NewContactPage {
        form: NewContactForm::default(),
        flash: session.take_flash(),
    };
    views::render(&page)
}

/// `POST /contacts/new`
///
/// A rejected submission re-renders the form with one error flash per
/// failing rule and the trimmed values filled in. An accepted one is stored
/// and the client is redirected to the list.
pub async fn create_contact(
    Extension(current): Extension<CurrentSession>,
    form: Result<Form<NewContactForm>, FormRejection>,
) -> AppResult<Response> {
    let Form(form) = form.map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;

    let mut session = current.handle.lock().await;
    match services::add_contact(session.contacts_mut(), &form) {
        Ok(_) => {
            session.push_flash(FlashMessage::success(CONTACT_ADDED));
            Ok(Redirect::to("/contacts").into_response())
        }
        Err(failure) => {
            debug!(session_id = %current.id, errors = ?failure.messages(), "Re-rendering form");
            for message in failure.messages() {
                session.push_flash(FlashMessage::error(message));
            }
            let page = NewContactPage {
                form: failure.form,
                flash: session.take_flash(),
            };
            Ok(views::render(&page)?.into_response())
        }
    }
}

pub async fn not_found(uri: Uri) -> AppResult<(StatusCode, Html<String>)> {
    let page = NotFoundPage {
        path: uri.path().to_string(),
    };
    Ok((StatusCode::NOT_FOUND, views::render(&page)?))
}
