//! Integration tests for the blocking client against a mock server.
//!
//! Mirrors the async suite where the contract is shared; the outcomes
//! must be identical in both calling styles.

use std::collections::HashMap;

use mockito::Matcher;
use tei_client::blocking::Client;
use tei_client::Error;

/// Info payload with every optional field omitted.
const INFO_BODY: &str = r#"{
    "model_id": "m",
    "model_dtype": "float16",
    "max_concurrent_requests": 4,
    "max_input_length": 512,
    "max_batch_tokens": 16384,
    "max_client_batch_size": 32,
    "tokenization_workers": 2,
    "version": "1.0.0"
}"#;

#[test]
fn test_info_decodes_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/info")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(INFO_BODY)
        .create();

    let client = Client::new(server.url());
    let info = client.info().unwrap();

    assert_eq!(info.model_id, "m");
    assert_eq!(info.version, "1.0.0");
    assert_eq!(info.model_sha, None);
    assert_eq!(info.max_batch_requests, None);
    mock.assert();
}

#[test]
fn test_embed_returns_vectors_and_sends_exact_payload() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/embed")
        .match_body(Matcher::Json(serde_json::json!({
            "inputs": "Why is the sky blue?",
            "truncate": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[[0.1, 0.2, 0.3]]")
        .create();

    let client = Client::new(server.url());
    let embeddings = client.embed("Why is the sky blue?", false).unwrap();

    assert_eq!(embeddings, vec![vec![0.1, 0.2, 0.3]]);
    mock.assert();
}

#[test]
fn test_embed_empty_inputs_fails_without_sending_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/embed").expect(0).create();

    let client = Client::new(server.url());
    let err = client.embed("", true).unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    mock.assert();
}

#[test]
fn test_embed_overloaded_response_maps_to_overloaded_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/embed")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "overloaded", "error_type": "overloaded"}"#)
        .create();

    let client = Client::new(server.url());
    let err = client.embed("hello", false).unwrap_err();

    assert!(matches!(err, Error::Overloaded(message) if message == "overloaded"));
    mock.assert();
}

#[test]
fn test_embed_oversized_input_maps_to_input_too_large() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/embed")
        .with_status(413)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "input exceeds max_input_length"}"#)
        .create();

    let client = Client::new(server.url());
    let err = client.embed("hello", false).unwrap_err();

    assert!(matches!(err, Error::InputTooLarge(_)));
    mock.assert();
}

#[test]
fn test_malformed_success_body_is_a_decoding_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/embed")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create();

    let client = Client::new(server.url());
    let err = client.embed("hello", false).unwrap_err();

    assert!(matches!(err, Error::Decoding(_)));
    mock.assert();
}

#[test]
fn test_configured_headers_and_cookies_are_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/info")
        .match_header("x-api-key", "secret")
        .match_header("cookie", "session=abc")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(INFO_BODY)
        .create();

    let client = Client::new(server.url())
        .with_headers(HashMap::from([("x-api-key".to_string(), "secret".to_string())]))
        .with_cookies(HashMap::from([("session".to_string(), "abc".to_string())]));
    client.info().unwrap();

    mock.assert();
}

#[test]
fn test_refused_connection_is_a_transport_error() {
    let client = Client::new("http://127.0.0.1:1");
    let err = client.info().unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}
