//! Blocking facade over [`crate::client::GameJoltClient`].
//!
//! Each method drives the matching async operation to completion on a
//! private current-thread tokio runtime, so the calling thread blocks until
//! the transport returns. Do not call these methods from inside an async
//! runtime.
//!
//! # Feature gate
//!
//! Requires the `blocking` feature.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn example() -> Result<(), gamejolt_client::GameJoltError> {
//! use gamejolt_client::blocking::GameJoltClient;
//! use gamejolt_client::{Credentials, HttpTransport, ScoreQuery};
//!
//! let credentials = Credentials::new(12345, "private-key")?;
//! let client = GameJoltClient::new(HttpTransport::new()?, credentials)?;
//! for entry in client.get_scores(ScoreQuery::new().with_limit(5))? {
//!     println!("{} {}", entry.score, entry.guest_name.or(entry.user).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::client::{
    self, Credentials, GameJoltConfig, ScoreMode, ScoreQuery, ScoreSubmission, TrophyFilter,
};
use crate::envelope::Envelope;
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DataStoreEntry, ScoreEntry, ScoreTable, Trophy, User};

/// Blocking client for the Game Jolt game API.
#[derive(Debug)]
pub struct GameJoltClient<T: Transport> {
    inner: client::GameJoltClient<T>,
    runtime: Runtime,
}

impl<T: Transport> GameJoltClient<T> {
    /// Create a blocking client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::Runtime`](crate::GameJoltError::Runtime) if the
    /// runtime cannot be started.
    pub fn new(transport: T, credentials: Credentials) -> Result<Self> {
        Self::with_config(transport, credentials, GameJoltConfig::default())
    }

    /// Create a blocking client with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::Runtime`](crate::GameJoltError::Runtime) if the
    /// runtime cannot be started.
    pub fn with_config(
        transport: T,
        credentials: Credentials,
        config: GameJoltConfig,
    ) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: client::GameJoltClient::with_config(transport, credentials, config),
            runtime,
        })
    }

    /// The async client this facade drives.
    pub fn inner(&self) -> &client::GameJoltClient<T> {
        &self.inner
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<()> {
        self.inner.set_username(username)
    }

    pub fn set_user_token(&mut self, user_token: impl Into<String>) -> Result<()> {
        self.inner.set_user_token(user_token)
    }

    pub fn credentials(&self) -> &Credentials {
        self.inner.credentials()
    }

    /// See [`client::GameJoltClient::get_user_info`].
    pub fn get_user_info(&self) -> Result<User> {
        self.runtime.block_on(self.inner.get_user_info())
    }

    /// See [`client::GameJoltClient::authenticate_user`].
    pub fn authenticate_user(&self) -> bool {
        self.runtime.block_on(self.inner.authenticate_user())
    }

    /// See [`client::GameJoltClient::get_trophies`].
    pub fn get_trophies(&self, filter: TrophyFilter) -> Result<Vec<Trophy>> {
        self.runtime.block_on(self.inner.get_trophies(filter))
    }

    /// See [`client::GameJoltClient::mark_trophy_achieved`].
    pub fn mark_trophy_achieved(&self, trophy_id: u64) -> bool {
        self.runtime
            .block_on(self.inner.mark_trophy_achieved(trophy_id))
    }

    /// See [`client::GameJoltClient::get_scores`].
    pub fn get_scores(&self, query: ScoreQuery) -> Result<Vec<ScoreEntry>> {
        self.runtime.block_on(self.inner.get_scores(query))
    }

    /// See [`client::GameJoltClient::submit_score`].
    pub fn submit_score(&self, submission: ScoreSubmission, mode: ScoreMode) -> Result<Envelope> {
        self.runtime
            .block_on(self.inner.submit_score(submission, mode))
    }

    /// See [`client::GameJoltClient::get_score_tables`].
    pub fn get_score_tables(&self) -> Result<Vec<ScoreTable>> {
        self.runtime.block_on(self.inner.get_score_tables())
    }

    /// See [`client::GameJoltClient::get_data_store_value`].
    pub fn get_data_store_value(&self, key: &str, scope_to_user: bool) -> Result<DataStoreEntry> {
        self.runtime
            .block_on(self.inner.get_data_store_value(key, scope_to_user))
    }
}
