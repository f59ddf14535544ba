//! HTTP transport implementation using `reqwest`.
//!
//! # Feature gate
//!
//! This module is only available when the `transport-http` feature is enabled
//! (it is enabled by default).

use std::time::Duration;

use async_trait::async_trait;

use crate::error::GameJoltError;
use crate::transport::Transport;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("gamejolt-client/", env!("CARGO_PKG_VERSION"));

/// A [`Transport`] backed by a `reqwest` HTTP client.
///
/// Use [`HttpTransport::new`] for defaults, [`HttpTransport::with_timeout`] to
/// change the request deadline, or [`HttpTransport::from_client`] when you
/// need proxies, custom TLS or headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::Transport`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new() -> Result<Self, GameJoltError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::Transport`] if the HTTP client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, GameJoltError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GameJoltError::transport)?;

        tracing::info!(timeout_ms = timeout.as_millis() as u64, "HTTP transport ready");

        Ok(Self { client })
    }

    /// Wrap an already-configured `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_get(&self, url: &str) -> Result<Vec<u8>, GameJoltError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GameJoltError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "non-success HTTP status");
            return Err(GameJoltError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(GameJoltError::transport)?;
        Ok(body.to_vec())
    }
}
