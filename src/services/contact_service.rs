//! Contact creation service.
//!
//! Business logic for turning a raw request body into a persisted contact
//! record.

use crate::client::ItemResponse;
use crate::domain::ContactId;
use crate::error::CreateContactError;
use crate::models::{Contact, NewContact};
use crate::repositories::ContactRepository;
use std::sync::Arc;

/// Service that builds and persists contact records.
///
/// Holds a long-lived repository handle resolved once at startup; the
/// service is read-only after construction and safe to share across
/// concurrently running request handlers.
pub struct ContactCreator {
    repository: Arc<dyn ContactRepository>,
}

impl ContactCreator {
    /// Create a new ContactCreator backed by the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Create a contact from a raw JSON request body.
    ///
    /// Assigns a fresh server-generated identifier, copies the caller's
    /// fields into a new record, and writes it to the store partitioned by
    /// `contact_type`. The identifier is never accepted from the caller, and
    /// repeated calls with the same payload produce distinct records.
    pub async fn create(&self, raw_body: &[u8]) -> Result<ItemResponse, CreateContactError> {
        let input: NewContact =
            serde_json::from_slice(raw_body).map_err(CreateContactError::MalformedInput)?;

        let contact = Contact::assemble(ContactId::generate(), &input);

        let response = self.repository.create(&contact).await?;
        Ok(response)
    }
}
