use async_trait::async_trait;
use contact_manager_api::client::ItemResponse;
use contact_manager_api::error::{StoreError, StoreResult};
use contact_manager_api::models::Contact;
use contact_manager_api::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that records
/// every write, tracks method calls for verification, and can be armed to
/// fail the next create call.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_with: Arc<Mutex<Option<StoreError>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the repository to fail the next create call with the given error.
    pub fn fail_next_create(&self, error: StoreError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// All records persisted so far.
    pub fn stored_contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().values().cloned().collect()
    }

    /// Number of records persisted so far.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, contact: &Contact) -> StoreResult<ItemResponse> {
        self.track_call("create");

        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }

        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.clone(), contact.clone());

        Ok(ItemResponse {
            document: contact.clone(),
            etag: Some("\"mock-etag\"".to_string()),
            request_charge: Some(5.43),
        })
    }
}
