//! Async wrapper around the synchronous StoreClient.
//!
//! This module provides an async interface to the synchronous StoreClient by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime.

use crate::client::{ItemResponse, StoreClient};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use async_trait::async_trait;
use std::sync::Arc;

/// Async facade over the document store client.
///
/// Behind a trait so the persistence collaborator can be substituted in
/// tests.
#[async_trait]
pub trait AsyncStoreClient: Send + Sync {
    async fn create_document(&self, contact: &Contact) -> StoreResult<ItemResponse>;
}

/// Async wrapper around the synchronous StoreClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations on
/// a dedicated thread pool, preventing blocking the async runtime.
#[derive(Clone)]
pub struct AsyncStoreClientImpl {
    client: Arc<StoreClient>,
}

impl AsyncStoreClientImpl {
    pub fn new(client: StoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncStoreClient for AsyncStoreClientImpl {
    async fn create_document(&self, contact: &Contact) -> StoreResult<ItemResponse> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_document(&contact))
            .await
            .map_err(|e| StoreError::HttpError(format!("Task join error: {}", e)))?
    }
}
