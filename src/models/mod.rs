//! Data models for the contact list.
//!
//! This module contains the contact record, the raw form used to propose a
//! new one, and the seed data new sessions start from.

pub mod contact;
pub mod seed;

pub use contact::{Contact, NewContactForm};
pub use seed::SeedData;
