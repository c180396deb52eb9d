//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact. These
//! value objects validate at construction time so an invalid name or phone
//! number cannot be represented in a stored contact.

pub mod errors;
pub mod name;
pub mod phone;
mod rules;

pub use errors::ValidationError;
pub use name::{NameField, PersonName, MAX_NAME_LENGTH};
pub use phone::PhoneNumber;
