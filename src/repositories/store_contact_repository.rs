use crate::client::{AsyncStoreClient, ItemResponse};
use crate::error::StoreResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the document store gateway.
///
/// This repository delegates to the AsyncStoreClient, providing a clean
/// abstraction layer between business logic and the underlying HTTP client.
pub struct StoreContactRepository {
    client: Arc<dyn AsyncStoreClient>,
}

impl StoreContactRepository {
    /// Create a new StoreContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for StoreContactRepository {
    async fn create(&self, contact: &Contact) -> StoreResult<ItemResponse> {
        self.client.create_document(contact).await
    }
}
