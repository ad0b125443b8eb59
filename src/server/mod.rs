//! HTTP surface of the Contact Manager API.
//!
//! Routes, shared state wiring, and the mapping from operation failures to
//! response status codes.

pub mod handlers;

use crate::error::CreateContactError;
use crate::services::ContactCreator;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Router,
};
use std::sync::Arc;

/// Build the application router.
///
/// The service handle is shared read-only with every request handler.
pub fn router(creator: Arc<ContactCreator>) -> Router {
    Router::new()
        .route("/contacts", post(handlers::create_contact))
        .layer(Extension(creator))
}

impl IntoResponse for CreateContactError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedInput(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            // Store failures collapse to an opaque 500; the cause goes to
            // the log, never to the caller.
            Self::Persistence(err) => {
                tracing::error!("Creating new contact failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::NewContact;

    #[test]
    fn test_malformed_input_maps_to_bad_request() {
        let parse_err = serde_json::from_str::<NewContact>("{").unwrap_err();
        let response = CreateContactError::MalformedInput(parse_err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_persistence_failures_map_to_internal_server_error() {
        for err in [
            StoreError::RateLimitExceeded,
            StoreError::Timeout,
            StoreError::Conflict("existing document".to_string()),
            StoreError::Unauthorized,
            StoreError::ApiError {
                status: 503,
                message: "Service unavailable".to_string(),
            },
        ] {
            let response = CreateContactError::Persistence(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
