//! # Custom Transport Example
//!
//! Shows how to implement the [`Transport`] trait with an in-process fake
//! platform that checks request signatures and answers from canned bodies.
//! This is useful for:
//!
//! - **Testing**: exercise your game's trophy and score logic offline
//! - **Custom backends**: adapt any HTTP stack (hyper, ureq, an engine's own)
//!
//! ## Running
//!
//! ```sh
//! cargo run --example custom_transport
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use gamejolt_client::{
    signature, Credentials, GameJoltClient, GameJoltError, ScoreMode, ScoreQuery,
    ScoreSubmission, Transport, TrophyFilter,
};
use serde_json::json;
use tokio::sync::Mutex;

const PRIVATE_KEY: &str = "demo-private-key";

// ─────────────────────────────────────────────────────────────────────
// Step 1: Define an in-memory "platform"
// ─────────────────────────────────────────────────────────────────────

/// A fake platform keyed by endpoint path.
///
/// Every request's signature is verified the same way the real platform
/// does: digest of the unsigned URL followed by the private key.
pub struct FakePlatform {
    base_url: String,
    routes: HashMap<&'static str, serde_json::Value>,
    /// Paths requested so far, in order.
    log: Mutex<Vec<String>>,
}

impl FakePlatform {
    fn new(base_url: &str) -> Self {
        let mut routes = HashMap::new();
        routes.insert("users/auth/", json!({ "response": { "success": "true" } }));
        routes.insert(
            "trophies/",
            json!({ "response": { "success": "true", "trophies": [
                { "id": "1", "title": "Welcome", "description": "Start the game.",
                  "difficulty": "Bronze", "image_url": "", "achieved": "1 minute ago" },
                { "id": "2", "title": "Marathon", "description": "Play for an hour.",
                  "difficulty": "Gold", "image_url": "", "achieved": "false" }
            ] } }),
        );
        routes.insert("scores/add/", json!({ "response": { "success": "true" } }));
        routes.insert(
            "scores/",
            json!({ "response": { "success": "true", "scores": [
                { "score": "42 coins", "sort": "42", "user": "demo", "user_id": "7",
                  "guest": "", "stored": "just now" }
            ] } }),
        );
        Self {
            base_url: base_url.to_string(),
            routes,
            log: Mutex::new(Vec::new()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Step 2: Implement the Transport trait
// ─────────────────────────────────────────────────────────────────────

#[async_trait]
impl Transport for FakePlatform {
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
        let (unsigned, sig) = url
            .rsplit_once("&signature=")
            .ok_or_else(|| GameJoltError::transport("request is not signed"))?;
        if sig != signature::sign(unsigned, PRIVATE_KEY) {
            let reply = json!({ "response": { "success": "false", "message": "Signature mismatch." } });
            return Ok(reply.to_string().into_bytes());
        }

        let path = unsigned
            .strip_prefix(&self.base_url)
            .and_then(|rest| rest.split_once('?'))
            .map(|(path, _)| path)
            .ok_or_else(|| GameJoltError::transport(format!("unexpected url {url}")))?;
        self.log.lock().await.push(path.to_string());

        match self.routes.get(path) {
            Some(body) => Ok(body.to_string().into_bytes()),
            None => Err(GameJoltError::HttpStatus {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Step 3: Drive the client against the fake platform
// ─────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for readable output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let platform = FakePlatform::new(gamejolt_client::request::DEFAULT_BASE_URL);
    let credentials = Credentials::new(1, PRIVATE_KEY)?.with_user("demo", "demo-token");
    let client = GameJoltClient::new(platform, credentials);

    if !client.authenticate_user().await {
        return Err("fake platform rejected the demo user".into());
    }

    for trophy in client.get_trophies(TrophyFilter::all()).await? {
        let mark = if trophy.achieved { "x" } else { " " };
        tracing::info!("[{mark}] {} ({})", trophy.title, trophy.id);
    }

    client
        .submit_score(ScoreSubmission::new("42 coins", 42), ScoreMode::Authenticated)
        .await?;
    let scores = client.get_scores(ScoreQuery::new().with_limit(5)).await?;
    tracing::info!("{} score(s) on the board", scores.len());

    // Endpoints without a canned body surface as HTTP errors.
    if let Err(e) = client.get_score_tables().await {
        tracing::info!("score tables unavailable: {e}");
    }

    let log = client.transport().log.lock().await;
    tracing::info!("Done, requested paths: {:?}", *log);
    Ok(())
}
