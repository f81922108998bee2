//! Tests for the HTTP layer shared by every action.

mod common;

use ankiconnect::{AnkiClient, Error};
use common::{expect_request_body, failure, ok, setup};
use serde_json::json;
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_api_key_is_sent() {
    let server = MockServer::start().await;
    let client = AnkiClient::builder()
        .url(server.uri())
        .api_key("s3cret")
        .build()
        .unwrap();
    expect_request_body(
        &server,
        json!({"action": "deckNames", "version": 6, "key": "s3cret"}),
        ok(["Default"]),
    )
    .await;

    client.decks().names().await.unwrap();
}

#[tokio::test]
async fn test_json_headers() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(header("accept", "application/json; charset=utf-8"))
        .respond_with(ok(6))
        .expect(1)
        .mount(&server)
        .await;

    client.misc().version().await.unwrap();
}

#[tokio::test]
async fn test_permission_error() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(failure("valid api key must be provided; permission denied"))
        .mount(&server)
        .await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::PermissionDenied));
}

#[tokio::test]
async fn test_error_status_with_envelope() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "result": null,
            "error": "unsupported action"
        })))
        .mount(&server)
        .await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::AnkiConnect(msg) if msg == "unsupported action"));
}

#[tokio::test]
async fn test_error_status_without_envelope() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::Status(403)));
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.decks().names().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_null_result_for_value() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .respond_with(ok(serde_json::Value::Null))
        .mount(&server)
        .await;

    let err = client.decks().create("Default").await.unwrap_err();
    assert!(matches!(err, Error::EmptyResponse));
}

#[tokio::test]
async fn test_connection_refused() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = AnkiClient::builder()
        .host("127.0.0.1")
        .port(port)
        .build()
        .unwrap();

    let err = client.misc().version().await.unwrap_err();
    assert!(matches!(err, Error::ConnectionRefused));
}
