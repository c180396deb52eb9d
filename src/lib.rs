//! Contacts Manager - a small server-rendered contact list.
//!
//! Visitors see a list of contacts sorted by name and can add new ones
//! through a validated form. Each visitor gets a session holding their own
//! copy of the contact list, seeded with a few sample contacts; nothing is
//! written to disk.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names and phone numbers
//! - **models**: The contact record, the raw form, and seed data
//! - **repositories**: Contact storage behind the `ContactRepository` trait
//! - **services**: Validation, sort order, and the list/add operations
//! - **session**: Per-client sessions with idle expiry and flash messages
//! - **server**: axum router, session cookie middleware, handlers, templates
//! - **config** / **error**: Environment configuration and error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod session;

pub use config::Config;
pub use domain::{NameField, PersonName, PhoneNumber, ValidationError};
pub use error::{AppError, ConfigError};
pub use models::{Contact, NewContactForm, SeedData};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::{build_router, AppState};
pub use services::{add_contact, list_contacts, sort_contacts, validate_contact, ValidationFailure};
pub use session::{Session, SessionId, SessionStore};
