//! Shared helpers for the mock-server integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use wiremock::{MockServer, Request};

use p2pb2b_api_client::auth::{NonceProvider, StaticCredentials};
use p2pb2b_api_client::rest::P2bClient;

pub const API_KEY: &str = "b3c0e4a2-5b0d-4a61-9d8e-8f3c2a7d1e90";
pub const API_SECRET: &str = "4a894c5c-8a7e-4337-bb6b-9fde16e3dddd";

/// Nonce provider returning a constant, for byte-exact body assertions.
pub struct FixedNonce(pub i64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> i64 {
        self.0
    }
}

pub fn build_client(server: &MockServer) -> P2bClient {
    P2bClient::with_url(server.uri(), API_KEY, API_SECRET).unwrap()
}

pub fn build_client_with_nonce(server: &MockServer, nonce: i64) -> P2bClient {
    P2bClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(API_KEY, API_SECRET)))
        .nonce_provider(Arc::new(FixedNonce(nonce)))
        .build()
}

/// The one request the server received.
pub async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn header(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .map(|value| value.to_str().unwrap().to_string())
}

/// Recompute the authentication headers over the received body, the way the
/// exchange does, and return the decoded body.
pub fn assert_signed(request: &Request, path: &str) -> serde_json::Value {
    assert_eq!(header(request, "Content-Type").as_deref(), Some("application/json"));
    assert_eq!(header(request, "X-TXC-APIKEY").as_deref(), Some(API_KEY));
    assert_eq!(
        header(request, "X-TXC-PAYLOAD"),
        Some(STANDARD.encode(&request.body))
    );

    let mut mac = Hmac::<Sha256>::new_from_slice(API_SECRET.as_bytes()).unwrap();
    mac.update(&request.body);
    assert_eq!(
        header(request, "X-TXC-SIGNATURE"),
        Some(hex::encode(mac.finalize().into_bytes()))
    );

    let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["request"], path);
    assert!(body["nonce"].as_i64().unwrap() > 0);
    body
}

/// Re-encoding the typed response must reproduce the raw body as JSON.
pub fn assert_round_trip<T: Serialize>(raw: &str, response: &T) {
    let expected: serde_json::Value = serde_json::from_str(raw).unwrap();
    let actual = serde_json::to_value(response).unwrap();
    assert_eq!(actual, expected);
}
