//! # Game Jolt Client
//!
//! Signed-request Rust client for the Game Jolt game API: users, trophies,
//! high scores and the data store.
//!
//! Every request is built from an ordered parameter list, signed with the
//! game's private key, sent through a [`Transport`], and decoded from the
//! platform's `{"response": {...}}` envelope into typed values.
//!
//! ## Features
//!
//! - **Deterministic signing**: MD5 (default) or SHA-1 over the exact request URL
//! - **Typed errors**: invalid input, transport, malformed response, platform
//!   failure and empty result are distinct [`GameJoltError`] variants
//! - **Transport-agnostic**: implement [`Transport`] for any HTTP stack
//! - **HTTP built-in**: default `transport-http` feature provides `HttpTransport`
//! - **Blocking facade**: `blocking` feature provides a synchronous client
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), gamejolt_client::GameJoltError> {
//! use gamejolt_client::{Credentials, GameJoltClient, HttpTransport, TrophyFilter};
//!
//! let credentials = Credentials::new(12345, "private-key")?.with_user("alice", "game-token");
//! let client = GameJoltClient::new(HttpTransport::new()?, credentials);
//!
//! if client.authenticate_user().await {
//!     let trophies = client.get_trophies(TrophyFilter::achieved(true)).await?;
//!     println!("{} trophies achieved", trophies.len());
//! }
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod envelope;
pub mod error;
pub mod request;
pub mod signature;
pub mod transport;
pub mod transports;
pub mod types;

// Re-export primary types for ergonomic imports.
pub use client::{
    Credentials, GameJoltClient, GameJoltConfig, ScoreMode, ScoreQuery, ScoreSubmission,
    TrophyFilter,
};
pub use envelope::Envelope;
pub use error::{GameJoltError, Result};
pub use request::{RequestSpec, SignedRequest};
pub use signature::SignatureAlgorithm;
pub use transport::Transport;
pub use types::{DataStoreEntry, ScoreEntry, ScoreTable, Trophy, User};

#[cfg(feature = "transport-http")]
pub use transports::HttpTransport;
