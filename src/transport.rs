//! Transport abstraction for the Game Jolt API.
//!
//! The [`Transport`] trait is the client's only interface to the network: it
//! fetches a fully signed URL with an HTTP GET and returns the raw response
//! body. Any HTTP stack can sit behind it; the crate ships
//! `HttpTransport` (feature `transport-http`) built on `reqwest`.
//!
//! Timeouts, TLS, proxies and socket-level retries are the transport's
//! concern. The client never retries a failed call.
//!
//! # Implementing a Custom Transport
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use gamejolt_client::error::GameJoltError;
//! use gamejolt_client::transport::Transport;
//!
//! struct MyTransport { /* ... */ }
//!
//! #[async_trait]
//! impl Transport for MyTransport {
//!     async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
//!         // Fetch `url` and return the body bytes, or
//!         // `GameJoltError::transport(cause)` on failure.
//!         # let _ = url;
//!         Ok(br#"{"response":{"success":"true"}}"#.to_vec())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::GameJoltError;

/// Performs HTTP GET requests on behalf of the client.
///
/// # Object Safety
///
/// This trait is object-safe, so `Box<dyn Transport>` and `Arc<dyn Transport>`
/// both work. The client itself is generic over `T: Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the response body.
    ///
    /// The URL is final: it already carries its signature and must be sent
    /// byte-for-byte as given.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::Transport`] (or [`GameJoltError::HttpStatus`])
    /// when no usable response body could be obtained.
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
        (**self).perform_get(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
        (**self).perform_get(url).await
    }
}
