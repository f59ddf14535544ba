#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::indexing_slicing,
    dead_code
)]
//! Shared test utilities for Game Jolt client integration tests.
//!
//! Provides a scripted [`MockTransport`] and helper functions for
//! constructing platform response bodies and inspecting request URLs.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use gamejolt_client::{Credentials, GameJoltClient, GameJoltError, Transport};
use serde_json::{json, Value};

// ── MockTransport ───────────────────────────────────────────────────

/// A mock transport for integration testing.
///
/// Scripted bodies are returned in order by `perform_get`. Every requested
/// URL is recorded in `requested`. Once the script is exhausted, calls fail
/// with a transport error.
pub struct MockTransport {
    responses: StdMutex<VecDeque<Result<Vec<u8>, GameJoltError>>>,
    /// URLs requested by the client, in order.
    pub requested: Arc<StdMutex<Vec<String>>>,
}

impl MockTransport {
    /// Create a mock transport with the given scripted responses.
    ///
    /// Returns the transport plus a shared handle to the requested URLs.
    pub fn new(
        responses: Vec<Result<Vec<u8>, GameJoltError>>,
    ) -> (Self, Arc<StdMutex<Vec<String>>>) {
        let requested = Arc::new(StdMutex::new(Vec::new()));
        let transport = Self {
            responses: StdMutex::new(VecDeque::from(responses)),
            requested: Arc::clone(&requested),
        };
        (transport, requested)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GameJoltError::transport("script exhausted")))
    }
}

// ── Client helpers ──────────────────────────────────────────────────

pub const GAME_ID: u64 = 12345;
pub const PRIVATE_KEY: &str = "a1b2c3d4private";
pub const USERNAME: &str = "alice";
pub const USER_TOKEN: &str = "t0k3n";

/// Credentials for the test game with a logged-in user.
pub fn credentials() -> Credentials {
    Credentials::new(GAME_ID, PRIVATE_KEY)
        .expect("valid credentials")
        .with_user(USERNAME, USER_TOKEN)
}

/// Start a client with the given scripted responses.
pub fn start_client(
    responses: Vec<Result<Vec<u8>, GameJoltError>>,
) -> (GameJoltClient<MockTransport>, Arc<StdMutex<Vec<String>>>) {
    let (transport, requested) = MockTransport::new(responses);
    (GameJoltClient::new(transport, credentials()), requested)
}

/// Wrap a JSON value as a successful transport result.
pub fn body(value: Value) -> Result<Vec<u8>, GameJoltError> {
    Ok(serde_json::to_vec(&value).expect("serialize body"))
}

/// A raw (possibly invalid) body.
pub fn raw(text: &str) -> Result<Vec<u8>, GameJoltError> {
    Ok(text.as_bytes().to_vec())
}

// ── Response builders ───────────────────────────────────────────────

/// `{"response":{"success":"true", ...fields}}`.
pub fn success_json(fields: Value) -> Value {
    let mut response = json!({ "success": "true" });
    if let (Some(target), Value::Object(extra)) = (response.as_object_mut(), fields) {
        target.extend(extra);
    }
    json!({ "response": response })
}

/// `{"response":{"success":"false","message":message}}`.
pub fn failure_json(message: &str) -> Value {
    json!({ "response": { "success": "false", "message": message } })
}

pub fn users_json() -> Value {
    success_json(json!({
        "users": [{
            "id": "1",
            "type": "User",
            "username": USERNAME,
            "avatar_url": "http://example.com/alice.png",
            "signed_up": "4 weeks ago",
            "last_logged_in": "Online Now",
            "status": "Active"
        }]
    }))
}

pub fn trophies_json() -> Value {
    success_json(json!({
        "trophies": [
            {
                "id": "1",
                "title": "First Jump",
                "description": "Jump once.",
                "difficulty": "Bronze",
                "image_url": "http://example.com/t1.png",
                "achieved": "2 days ago"
            },
            {
                "id": "2",
                "title": "Sky High",
                "description": "Jump 1000 times.",
                "difficulty": "Gold",
                "image_url": "http://example.com/t2.png",
                "achieved": "false"
            }
        ]
    }))
}

pub fn scores_json() -> Value {
    success_json(json!({
        "scores": [
            {
                "score": "1500 points", "sort": "1500", "extra_data": "",
                "user": "alice", "user_id": "1", "guest": "", "stored": "1 hour ago"
            },
            {
                "score": "900 points", "sort": "900", "extra_data": "lvl2",
                "user": "", "user_id": "", "guest": "Bob", "stored": "2 days ago"
            }
        ]
    }))
}

pub fn tables_json() -> Value {
    success_json(json!({
        "tables": [
            { "id": "10", "name": "Arcade", "description": "Main board", "primary": "true" },
            { "id": "11", "name": "Speedrun", "description": "", "primary": "false" }
        ]
    }))
}

// ── URL inspection ──────────────────────────────────────────────────

/// Ordered query pairs of a request URL.
pub fn query_pairs(url: &str) -> Vec<(String, String)> {
    let (_, query) = url.split_once('?').expect("url has a query");
    query
        .split('&')
        .map(|pair| {
            let (k, v) = pair.split_once('=').expect("name=value pair");
            (k.to_string(), v.to_string())
        })
        .collect()
}

/// Parameter names of a request URL, in order.
pub fn param_names(url: &str) -> Vec<String> {
    query_pairs(url).into_iter().map(|(k, _)| k).collect()
}

/// Value of the first parameter named `name`.
pub fn param(url: &str, name: &str) -> Option<String> {
    query_pairs(url)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

/// Check that the URL's final `signature` parameter matches the digest of
/// everything before it plus the private key.
pub fn assert_signed(url: &str) {
    let (unsigned, signature) = url
        .rsplit_once("&signature=")
        .expect("url ends with a signature parameter");
    assert!(!signature.contains('&'), "signature must be the last parameter");
    assert_eq!(
        signature,
        gamejolt_client::signature::sign(unsigned, PRIVATE_KEY),
        "signature mismatch for {url}"
    );
}
