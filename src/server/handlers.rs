//! Request handlers.

use crate::client::ItemResponse;
use crate::error::CreateContactError;
use crate::services::ContactCreator;
use axum::{body::Bytes, response::Json, Extension};
use std::sync::Arc;

/// POST /contacts
///
/// Parses the request body into a contact payload, persists it with a fresh
/// server-generated identifier, and returns the store's confirmation.
pub async fn create_contact(
    Extension(creator): Extension<Arc<ContactCreator>>,
    body: Bytes,
) -> Result<Json<ItemResponse>, CreateContactError> {
    tracing::info!("Creating a new contact");

    let response = creator.create(&body).await?;
    Ok(Json(response))
}
