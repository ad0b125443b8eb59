use crate::client::ItemResponse;
use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for persisting contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (gateway client, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact, partitioned by its `contact_type`.
    async fn create(&self, contact: &Contact) -> StoreResult<ItemResponse>;
}
