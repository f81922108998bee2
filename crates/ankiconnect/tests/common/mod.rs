//! Shared helpers for the wiremock-backed tests.

use ankiconnect::AnkiClient;
use serde::Serialize;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, AnkiClient) {
    let server = MockServer::start().await;
    let client = AnkiClient::builder().url(server.uri()).build().unwrap();
    (server, client)
}

/// A successful envelope carrying `result`.
pub fn ok<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "result": result,
        "error": null
    }))
}

/// A failed envelope carrying `error`.
#[allow(dead_code)]
pub fn failure(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "result": null,
        "error": error
    }))
}

/// Expect exactly one call to `action`.
pub async fn expect_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    expect_request_body(server, json!({"action": action, "version": 6}), response).await;
}

/// Expect exactly one call to `action` whose params contain `params`.
#[allow(dead_code)]
pub async fn expect_params(server: &MockServer, action: &str, params: Value, response: ResponseTemplate) {
    expect_request_body(
        server,
        json!({"action": action, "version": 6, "params": params}),
        response,
    )
    .await;
}

/// Expect exactly one request whose body contains `body`.
pub async fn expect_request_body(server: &MockServer, body: Value, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(body_partial_json(body))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
