//! Application service layer.
//!
//! Services contain the business logic: validating proposed contacts, the
//! display ordering, and the list/add operations built from them. They
//! provide a clean boundary between the HTTP handlers and the contact
//! repository.

pub mod contact_service;
pub mod sort;
pub mod validation;

pub use contact_service::{add_contact, list_contacts};
pub use sort::{compare_by_name, sort_contacts};
pub use validation::{validate_contact, ValidationFailure};
