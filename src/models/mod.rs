//! Data models for contact records.
//!
//! This module contains the data structures representing contacts as they
//! are persisted in the document store, along with the caller-supplied
//! input shape used by the create endpoint.

pub mod contact;

pub use contact::{
    Contact, ContactAddress, ContactBirthday, ContactEmail, ContactName, ContactPhone, NewContact,
};
