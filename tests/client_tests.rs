//! Integration tests for the StoreClient using mockito for HTTP mocking.

use contact_manager_api::models::{
    Contact, ContactAddress, ContactBirthday, ContactEmail, ContactName, ContactPhone,
};
use contact_manager_api::{StoreClient, StoreError};
use mockito::{Matcher, Server};

fn sample_contact(id: &str, contact_type: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: ContactName {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
        },
        birthday: ContactBirthday {
            birthday: "1990-04-12".to_string(),
        },
        address: ContactAddress {
            line1: "1 Main St".to_string(),
            line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip: "62701".to_string(),
        },
        email: ContactEmail {
            email: "a@x.com".to_string(),
        },
        phone: ContactPhone {
            mobile: Some("+1555000001".to_string()),
            home: None,
            work: None,
        },
        contact_type: contact_type.to_string(),
    }
}

fn test_client(server: &Server) -> StoreClient {
    StoreClient::with_endpoint(
        server.url(),
        "test-api-key".to_string(),
        "contacts-db".to_string(),
        "contacts".to_string(),
    )
}

#[test]
fn test_create_document() {
    let mut server = Server::new();

    let contact = sample_contact("abc-123", "personal");
    let mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .match_header("x-store-api-key", "test-api-key")
        .match_header("x-partition-key", "personal")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contact_id": "abc-123",
            "contact_name": {"first_name": "Ann", "last_name": "Lee"},
            "contact_type": "personal"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_header("etag", "\"0x1D9\"")
        .with_header("x-request-charge", "5.43")
        .with_body(serde_json::to_string(&contact).unwrap())
        .create();

    let client = test_client(&server);
    let response = client.create_document(&contact).unwrap();

    mock.assert();
    assert_eq!(response.document, contact);
    assert_eq!(response.etag.as_deref(), Some("\"0x1D9\""));
    assert_eq!(response.request_charge, Some(5.43));
    assert_eq!(client.metrics().documents_created_total(), 1);
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_create_document_without_metadata_headers() {
    let mut server = Server::new();

    let contact = sample_contact("abc-456", "business");
    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .match_header("x-partition-key", "business")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&contact).unwrap())
        .create();

    let client = test_client(&server);
    let response = client.create_document(&contact).unwrap();

    assert_eq!(response.etag, None);
    assert_eq!(response.request_charge, None);
}

#[test]
fn test_create_document_conflict() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(409)
        .with_body("document with the supplied id already exists")
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    match result {
        Err(StoreError::Conflict(message)) => {
            assert!(message.contains("already exists"));
        }
        other => panic!("Expected Conflict error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_create_document_throttled() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(429)
        .with_body("request rate is large")
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    assert!(matches!(result, Err(StoreError::RateLimitExceeded)));
}

#[test]
fn test_create_document_unauthorized() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(401)
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    assert!(matches!(result, Err(StoreError::Unauthorized)));
}

#[test]
fn test_create_document_bad_request() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(400)
        .with_body("PartitionKey header is malformed")
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    assert!(matches!(result, Err(StoreError::InvalidRequest(_))));
}

#[test]
fn test_create_document_unexpected_status() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(503)
        .with_body("Service unavailable")
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    match result {
        Err(StoreError::ApiError { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("unavailable"));
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_empty_partition_key_is_refused_before_any_request() {
    let server = Server::new();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", ""));

    match result {
        Err(StoreError::InvalidRequest(message)) => {
            assert!(message.contains("partition key"));
        }
        other => panic!("Expected InvalidRequest error, got: {:?}", other),
    }
    // Refused client-side: no HTTP traffic happened
    assert_eq!(client.metrics().http_requests_total(), 0);
}

#[test]
fn test_create_document_malformed_store_response() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/dbs/contacts-db/colls/contacts/docs")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create();

    let client = test_client(&server);
    let result = client.create_document(&sample_contact("abc-123", "personal"));

    assert!(matches!(result, Err(StoreError::JsonError(_))));
}
