//! Transport implementations for the Game Jolt API.
//!
//! This module provides concrete [`Transport`](crate::Transport) implementations
//! behind feature gates. Enable the corresponding Cargo feature to pull in
//! a transport:
//!
//! | Feature          | Transport         |
//! |------------------|-------------------|
//! | `transport-http` | [`HttpTransport`] |
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), gamejolt_client::GameJoltError> {
//! use gamejolt_client::{HttpTransport, Transport};
//!
//! let http = HttpTransport::new()?;
//! let body = http
//!     .perform_get("http://gamejolt.com/api/game/v1/scores/tables/?format=json&game_id=1&signature=0")
//!     .await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "transport-http")]
pub mod http;

#[cfg(feature = "transport-http")]
pub use http::HttpTransport;
