//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! HTTP handlers and the data access layer.

mod contact_service;

pub use contact_service::ContactCreator;
