//! Contact Manager API - an HTTP service that persists contacts into a
//! partitioned document store.
//!
//! The service exposes a single `POST /contacts` endpoint: it parses a JSON
//! contact payload, assigns a server-generated identifier, and writes the
//! record to the store using the caller-supplied `contact_type` as the
//! partition key.
//!
//! # Architecture
//!
//! - **models**: The contact record and its caller-supplied input shape
//! - **domain**: Type-safe identifier generation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the document store gateway
//! - **repositories**: Persistence abstraction over the store client
//! - **services**: The create-contact operation
//! - **server**: Routes and failure-to-status mapping
//! - **metrics**: In-process counters for gateway traffic

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::{AsyncStoreClient, AsyncStoreClientImpl, ItemResponse, StoreClient};
pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, CreateContactError, StoreError};
pub use metrics::Metrics;
pub use models::{Contact, NewContact};
pub use repositories::{ContactRepository, StoreContactRepository};
pub use services::ContactCreator;
