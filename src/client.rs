//! Async client for the Game Jolt game API.
//!
//! [`GameJoltClient`] owns the game's [`Credentials`] and a [`Transport`].
//! Each operation builds a fresh [`RequestSpec`](crate::request::RequestSpec),
//! signs it, awaits the transport, and decodes the platform's envelope into a
//! typed value. Nothing runs in the background and nothing is cached: when an
//! operation returns, the request is finished.
//!
//! # Example
//!
//! ```rust,ignore
//! let credentials = Credentials::new(12345, "private-key")?.with_user("alice", "token");
//! let client = GameJoltClient::new(HttpTransport::new()?, credentials);
//!
//! if client.authenticate_user().await {
//!     for trophy in client.get_trophies(TrophyFilter::achieved(true)).await? {
//!         println!("{} ({})", trophy.title, trophy.id);
//!     }
//! }
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::envelope::{self, Envelope};
use crate::error::{GameJoltError, Result};
use crate::request::{self, RequestSpec, DEFAULT_BASE_URL, MAX_SCORE_LIMIT};
use crate::signature::SignatureAlgorithm;
use crate::transport::Transport;
use crate::types::{DataStoreEntry, ScoreEntry, ScoreTable, Trophy, User};

/// Default number of scores returned by [`GameJoltClient::get_scores`].
const DEFAULT_SCORE_LIMIT: u32 = 10;

// ── Configuration ───────────────────────────────────────────────────

/// Configuration for a [`GameJoltClient`].
///
/// All fields have defaults that talk to the public platform.
///
/// # Example
///
/// ```
/// use gamejolt_client::client::GameJoltConfig;
/// use gamejolt_client::signature::SignatureAlgorithm;
///
/// let config = GameJoltConfig::new()
///     .with_base_url("http://localhost:8080/api/game/v1")
///     .with_signature_algorithm(SignatureAlgorithm::Sha1)
///     .with_default_score_limit(500);
/// assert_eq!(config.base_url, "http://localhost:8080/api/game/v1/");
/// assert_eq!(config.default_score_limit, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameJoltConfig {
    /// Base URL every endpoint path is appended to. Always ends with `/`.
    pub base_url: String,
    /// Digest used for request signatures.
    pub signature_algorithm: SignatureAlgorithm,
    /// `limit` sent by score queries that do not set one.
    ///
    /// Defaults to **10**. Clamped into `1..=100`.
    pub default_score_limit: u32,
}

impl GameJoltConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            signature_algorithm: SignatureAlgorithm::default(),
            default_score_limit: DEFAULT_SCORE_LIMIT,
        }
    }

    /// Point the client at another API root. A trailing `/` is added if missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Select the signature digest.
    #[must_use]
    pub fn with_signature_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.signature_algorithm = algorithm;
        self
    }

    /// Set the score `limit` used when a [`ScoreQuery`] has none.
    ///
    /// Values are clamped into `1..=100`.
    #[must_use]
    pub fn with_default_score_limit(mut self, limit: u32) -> Self {
        self.default_score_limit = limit.clamp(1, MAX_SCORE_LIMIT);
        self
    }
}

impl Default for GameJoltConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ── Credentials ─────────────────────────────────────────────────────

/// Game and player credentials used to build and sign requests.
///
/// The game id and private key are fixed at construction. The username and
/// user token may start empty and be set later through
/// [`GameJoltClient::set_username`] / [`GameJoltClient::set_user_token`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    game_id: u64,
    private_key: String,
    username: String,
    user_token: String,
}

impl Credentials {
    /// Create credentials for a game, without a player.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::InvalidParameter`] if `game_id` is zero or
    /// `private_key` is empty.
    pub fn new(game_id: u64, private_key: impl Into<String>) -> Result<Self> {
        if game_id == 0 {
            return Err(GameJoltError::invalid_parameter(
                "game_id",
                "must be a positive game id",
            ));
        }
        let private_key = private_key.into();
        if private_key.is_empty() {
            return Err(GameJoltError::invalid_parameter(
                "private_key",
                "must not be empty",
            ));
        }
        Ok(Self {
            game_id,
            private_key,
            username: String::new(),
            user_token: String::new(),
        })
    }

    /// Attach a player's username and game token.
    #[must_use]
    pub fn with_user(mut self, username: impl Into<String>, user_token: impl Into<String>) -> Self {
        self.username = username.into();
        self.user_token = user_token.into();
        self
    }

    /// The game's numeric id.
    pub fn game_id(&self) -> u64 {
        self.game_id
    }

    /// Current username, empty if none is set.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current user game token, empty if none is set.
    pub fn user_token(&self) -> &str {
        &self.user_token
    }

    /// Returns `true` if both a username and a user token are set.
    pub fn has_user(&self) -> bool {
        !self.username.is_empty() && !self.user_token.is_empty()
    }

    pub(crate) fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("game_id", &self.game_id)
            .field("username", &self.username)
            .field("user_token", &"<redacted>")
            .field("private_key", &"<redacted>")
            .finish()
    }
}

// ── Operation parameters ────────────────────────────────────────────

/// Filter for [`GameJoltClient::get_trophies`].
///
/// At most one filter reaches the platform. If both are set, `achieved` wins
/// and `trophy_ids` is ignored.
///
/// # Example
///
/// ```
/// use gamejolt_client::client::TrophyFilter;
///
/// let filter = TrophyFilter::trophies([3, 4]).with_achieved(true);
/// assert_eq!(filter.achieved, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrophyFilter {
    /// Only achieved (`true`) or unachieved (`false`) trophies.
    pub achieved: Option<bool>,
    /// Only these trophies.
    pub trophy_ids: Option<Vec<u64>>,
}

impl TrophyFilter {
    /// Every trophy of the game.
    pub fn all() -> Self {
        Self::default()
    }

    /// Trophies the player has (or has not) achieved.
    pub fn achieved(achieved: bool) -> Self {
        Self {
            achieved: Some(achieved),
            trophy_ids: None,
        }
    }

    /// A single trophy.
    pub fn trophy(trophy_id: u64) -> Self {
        Self::trophies([trophy_id])
    }

    /// A set of trophies.
    pub fn trophies(trophy_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            achieved: None,
            trophy_ids: Some(trophy_ids.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn with_achieved(mut self, achieved: bool) -> Self {
        self.achieved = Some(achieved);
        self
    }

    #[must_use]
    pub fn with_trophy_ids(mut self, trophy_ids: impl IntoIterator<Item = u64>) -> Self {
        self.trophy_ids = Some(trophy_ids.into_iter().collect());
        self
    }
}

/// Options for [`GameJoltClient::get_scores`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreQuery {
    /// Number of scores to return. `None` uses the configured default.
    /// Values above 100 are clamped; values below 1 are rejected.
    pub limit: Option<i64>,
    /// Score table to read. `None` reads the game's primary table.
    pub table_id: Option<u64>,
    /// Only the current user's scores.
    pub user_only: bool,
}

impl ScoreQuery {
    /// Scores from the primary table with the configured default limit.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_table(mut self, table_id: u64) -> Self {
        self.table_id = Some(table_id);
        self
    }

    /// Restrict the query to the current user's scores.
    #[must_use]
    pub fn user_only(mut self) -> Self {
        self.user_only = true;
        self
    }
}

/// A score to submit with [`GameJoltClient::submit_score`].
///
/// # Example
///
/// ```
/// use gamejolt_client::client::ScoreSubmission;
///
/// let score = ScoreSubmission::new("1500 points", 1500)
///     .with_extra_data("level=4")
///     .with_table(2);
/// assert_eq!(score.sort, 1500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSubmission {
    /// Display form of the score. Must not be empty.
    pub score: String,
    /// Numeric ranking key.
    pub sort: i64,
    /// Developer data stored with the score, never shown to players.
    pub extra_data: Option<String>,
    /// Target table. `None` uses the primary table.
    pub table_id: Option<u64>,
}

impl ScoreSubmission {
    /// A score with its display text and numeric sort value.
    pub fn new(score: impl Into<String>, sort: i64) -> Self {
        Self {
            score: score.into(),
            sort,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_extra_data(mut self, extra_data: impl Into<String>) -> Self {
        self.extra_data = Some(extra_data.into());
        self
    }

    #[must_use]
    pub fn with_table(mut self, table_id: u64) -> Self {
        self.table_id = Some(table_id);
        self
    }
}

/// Who a submitted score belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreMode {
    /// The client's current user (username and user token must be set).
    Authenticated,
    /// A guest, identified only by a display name.
    Guest(String),
}

impl ScoreMode {
    /// A guest submission under `name`.
    pub fn guest(name: impl Into<String>) -> Self {
        Self::Guest(name.into())
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for the Game Jolt game API.
///
/// Credential updates take `&mut self`. To share one client between threads,
/// wrap it in a lock; the client does no internal locking.
pub struct GameJoltClient<T: Transport> {
    transport: T,
    credentials: Credentials,
    config: GameJoltConfig,
}

impl<T: Transport> GameJoltClient<T> {
    /// Create a client with the default [`GameJoltConfig`].
    pub fn new(transport: T, credentials: Credentials) -> Self {
        Self::with_config(transport, credentials, GameJoltConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(transport: T, credentials: Credentials, config: GameJoltConfig) -> Self {
        Self {
            transport,
            credentials,
            config,
        }
    }

    // ── Credentials ─────────────────────────────────────────────────

    /// Replace the current username.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::InvalidParameter`] if `username` is empty.
    pub fn set_username(&mut self, username: impl Into<String>) -> Result<()> {
        let username = username.into();
        if username.is_empty() {
            return Err(GameJoltError::invalid_parameter(
                "username",
                "must not be empty",
            ));
        }
        self.credentials.username = username;
        Ok(())
    }

    /// Replace the current user token.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::InvalidParameter`] if `user_token` is empty.
    pub fn set_user_token(&mut self, user_token: impl Into<String>) -> Result<()> {
        let user_token = user_token.into();
        if user_token.is_empty() {
            return Err(GameJoltError::invalid_parameter(
                "user_token",
                "must not be empty",
            ));
        }
        self.credentials.user_token = user_token;
        Ok(())
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &GameJoltConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Users ───────────────────────────────────────────────────────

    /// Fetch the current user's profile.
    ///
    /// # Errors
    ///
    /// - [`GameJoltError::InvalidParameter`] if no username is set.
    /// - [`GameJoltError::EmptyResult`] if the platform returned no user.
    /// - Transport, decode and platform errors as returned by the call.
    pub async fn get_user_info(&self) -> Result<User> {
        let spec = request::user_info(&self.credentials)?;
        self.execute(spec).await?.first_user()
    }

    /// Check the current username and token with the platform.
    ///
    /// Returns `true` only if the platform reports success. Invalid
    /// credentials, transport failures and unreadable responses all yield
    /// `false`; the cause is logged at `warn` level.
    pub async fn authenticate_user(&self) -> bool {
        let outcome = match request::authenticate_user(&self.credentials) {
            Ok(spec) => self.execute(spec).await.and_then(confirmed),
            Err(e) => Err(e),
        };
        collapse("authenticate_user", outcome)
    }

    // ── Trophies ────────────────────────────────────────────────────

    /// Fetch the game's trophies for the current user.
    ///
    /// # Errors
    ///
    /// - [`GameJoltError::InvalidParameter`] if the user is not set or the
    ///   trophy id list is empty.
    /// - Transport, decode and platform errors as returned by the call.
    pub async fn get_trophies(&self, filter: TrophyFilter) -> Result<Vec<Trophy>> {
        let spec = request::fetch_trophies(&self.credentials, &filter)?;
        self.execute(spec).await?.list("trophies")
    }

    /// Award a trophy to the current user.
    ///
    /// Returns `true` if the platform accepted the request. Every failure,
    /// including a missing user, yields `false` and is logged at `warn` level.
    pub async fn mark_trophy_achieved(&self, trophy_id: u64) -> bool {
        let outcome = match request::add_achieved(&self.credentials, trophy_id) {
            Ok(spec) => self.execute(spec).await.and_then(confirmed),
            Err(e) => Err(e),
        };
        collapse("mark_trophy_achieved", outcome)
    }

    // ── Scores ──────────────────────────────────────────────────────

    /// Fetch scores from a table.
    ///
    /// # Errors
    ///
    /// - [`GameJoltError::InvalidParameter`] if `limit` is below 1, or the
    ///   query is user-scoped without a user.
    /// - Transport, decode and platform errors as returned by the call.
    pub async fn get_scores(&self, query: ScoreQuery) -> Result<Vec<ScoreEntry>> {
        let spec =
            request::fetch_scores(&self.credentials, &query, self.config.default_score_limit)?;
        self.execute(spec).await?.list("scores")
    }

    /// Submit a score as the current user or as a guest.
    ///
    /// Returns the decoded envelope of the platform's reply.
    ///
    /// # Errors
    ///
    /// - [`GameJoltError::InvalidParameter`] if the score is empty, or neither
    ///   a complete user nor a guest name is available.
    /// - Transport, decode and platform errors as returned by the call.
    pub async fn submit_score(
        &self,
        submission: ScoreSubmission,
        mode: ScoreMode,
    ) -> Result<Envelope> {
        let spec = request::add_score(&self.credentials, &submission, &mode)?;
        self.execute(spec).await
    }

    /// List the game's high-score tables.
    ///
    /// # Errors
    ///
    /// Transport, decode and platform errors as returned by the call.
    pub async fn get_score_tables(&self) -> Result<Vec<ScoreTable>> {
        let spec = request::score_tables(&self.credentials);
        self.execute(spec).await?.list("tables")
    }

    // ── Data store ──────────────────────────────────────────────────

    /// Read a value from the game's data store, or from the current user's
    /// store when `scope_to_user` is set.
    ///
    /// # Errors
    ///
    /// - [`GameJoltError::InvalidParameter`] if `key` is empty, or the read is
    ///   user-scoped without a user.
    /// - [`GameJoltError::Platform`] if the key does not exist.
    /// - Transport and decode errors as returned by the call.
    pub async fn get_data_store_value(
        &self,
        key: &str,
        scope_to_user: bool,
    ) -> Result<DataStoreEntry> {
        let spec = request::data_store_fetch(&self.credentials, key, scope_to_user)?;
        let envelope = self.execute(spec).await?;
        let data = envelope
            .get("data")
            .and_then(crate::types::lenient::scalar_to_string)
            .ok_or_else(|| {
                GameJoltError::MalformedResponse("missing or non-scalar `data` field".into())
            })?;
        Ok(DataStoreEntry {
            key: key.to_string(),
            data,
            username: scope_to_user.then(|| self.credentials.username.clone()),
        })
    }

    // ── Internal helpers ────────────────────────────────────────────

    /// Sign `spec`, send it and decode the envelope.
    async fn execute(&self, spec: RequestSpec) -> Result<Envelope> {
        let signed = spec.sign(
            &self.config.base_url,
            self.credentials.private_key(),
            self.config.signature_algorithm,
        );
        debug!(
            endpoint = spec.path(),
            params = ?spec.params().iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            "sending signed request"
        );

        let body = self.transport.perform_get(signed.url()).await?;
        let envelope = envelope::decode(&body)?;

        debug!(
            endpoint = spec.path(),
            fields = envelope.payload().len(),
            "response decoded"
        );
        Ok(envelope)
    }
}

impl<T: Transport> fmt::Debug for GameJoltClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameJoltClient")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish()
    }
}

/// Require the platform to have stated `success` explicitly.
fn confirmed(envelope: Envelope) -> Result<()> {
    if envelope.reports_success() {
        Ok(())
    } else {
        Err(GameJoltError::MalformedResponse(
            "reply does not report `success`".into(),
        ))
    }
}

/// Collapse an outcome into the boolean contract of the auth/award calls.
fn collapse(operation: &'static str, outcome: Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            warn!(operation, error = %e, "operation failed, reporting false");
            false
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex as StdMutex};

    // ── Mock transport ──────────────────────────────────────────────

    /// A mock transport that records requested URLs and replays scripted bodies.
    struct MockTransport {
        responses: StdMutex<VecDeque<Result<Vec<u8>>>>,
        requested: Arc<StdMutex<Vec<String>>>,
    }

    impl MockTransport {
        fn new(responses: Vec<Result<Vec<u8>>>) -> (Self, Arc<StdMutex<Vec<String>>>) {
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
        async fn perform_get(&self, url: &str) -> Result<Vec<u8>> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GameJoltError::transport("no scripted response")))
        }
    }

    // ── Helpers ─────────────────────────────────────────────────────

    fn ok(body: &str) -> Result<Vec<u8>> {
        Ok(body.as_bytes().to_vec())
    }

    fn credentials() -> Credentials {
        Credentials::new(42, "secret")
            .unwrap()
            .with_user("alice", "tok")
    }

    fn client(
        responses: Vec<Result<Vec<u8>>>,
    ) -> (GameJoltClient<MockTransport>, Arc<StdMutex<Vec<String>>>) {
        let (transport, requested) = MockTransport::new(responses);
        (GameJoltClient::new(transport, credentials()), requested)
    }

    // ── Configuration ───────────────────────────────────────────────

    #[test]
    fn config_defaults() {
        let config = GameJoltConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.signature_algorithm, SignatureAlgorithm::Md5);
        assert_eq!(config.default_score_limit, 10);
    }

    #[test]
    fn config_score_limit_is_clamped() {
        assert_eq!(
            GameJoltConfig::new()
                .with_default_score_limit(0)
                .default_score_limit,
            1
        );
    }

    // ── Credentials ─────────────────────────────────────────────────

    #[test]
    fn credentials_reject_zero_game_id() {
        assert!(Credentials::new(0, "k").unwrap_err().is_invalid_parameter());
        assert!(Credentials::new(1, "").unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn credentials_debug_redacts_secrets() {
        let text = format!("{:?}", credentials());
        assert!(text.contains("alice"));
        assert!(!text.contains("secret"));
        assert!(!text.contains("\"tok\""));
    }

    #[test]
    fn set_username_and_token() {
        let (mut client, _) = client(vec![]);
        client.set_username("bob").unwrap();
        client.set_user_token("t2").unwrap();
        assert_eq!(client.credentials().username(), "bob");
        assert_eq!(client.credentials().user_token(), "t2");
        assert!(client.set_username("").unwrap_err().is_invalid_parameter());
        assert!(client.set_user_token("").unwrap_err().is_invalid_parameter());
        assert_eq!(client.credentials().username(), "bob");
    }

    // ── Operations ──────────────────────────────────────────────────

    #[tokio::test]
    async fn user_info_sends_signed_request() {
        let (client, requested) = client(vec![ok(
            r#"{"response":{"success":"true","users":[{"id":"9","username":"alice"}]}}"#,
        )]);
        let user = client.get_user_info().await.unwrap();
        assert_eq!(user.id, 9);

        let urls = requested.lock().unwrap();
        let unsigned = "http://gamejolt.com/api/game/v1/users/?format=json&game_id=42&username=alice";
        let expected_sig = crate::signature::sign(unsigned, "secret");
        assert_eq!(urls[0], format!("{unsigned}&signature={expected_sig}"));
    }

    #[tokio::test]
    async fn authenticate_true_on_success() {
        let (client, _) = client(vec![ok(r#"{"response":{"success":"true"}}"#)]);
        assert!(client.authenticate_user().await);
    }

    #[tokio::test]
    async fn authenticate_false_on_any_failure() {
        let (client, _) = client(vec![
            ok(r#"{"response":{"success":"false","message":"bad token"}}"#),
            Err(GameJoltError::transport("down")),
            ok("not json"),
        ]);
        assert!(!client.authenticate_user().await);
        assert!(!client.authenticate_user().await);
        assert!(!client.authenticate_user().await);
    }

    #[tokio::test]
    async fn authenticate_without_user_makes_no_call() {
        let (transport, requested) = MockTransport::new(vec![]);
        let client = GameJoltClient::new(transport, Credentials::new(42, "secret").unwrap());
        assert!(!client.authenticate_user().await);
        assert!(requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn boolean_operations_need_explicit_success() {
        let (client, _) = client(vec![
            ok(r#"{"response":{}}"#),
            ok(r#"{"response":{"message":"Incorrect signature"}}"#),
        ]);
        assert!(!client.authenticate_user().await);
        assert!(!client.mark_trophy_achieved(3).await);
    }

    #[tokio::test]
    async fn mark_trophy_achieved_collapses_errors() {
        let (client, _) = client(vec![
            ok(r#"{"response":{"success":"true"}}"#),
            ok(r#"{"response":{"success":"false","message":"already achieved"}}"#),
        ]);
        assert!(client.mark_trophy_achieved(5).await);
        assert!(!client.mark_trophy_achieved(5).await);
    }

    #[tokio::test]
    async fn data_store_entry_carries_scope() {
        let (client, requested) = client(vec![
            ok(r#"{"response":{"success":"true","data":"level-3"}}"#),
            ok(r#"{"response":{"success":"true","data":17}}"#),
        ]);
        let global = client.get_data_store_value("save", false).await.unwrap();
        assert_eq!(global.data, "level-3");
        assert!(!global.is_user_scoped());

        let mine = client.get_data_store_value("save", true).await.unwrap();
        assert_eq!(mine.data, "17");
        assert_eq!(mine.username.as_deref(), Some("alice"));
        assert!(requested.lock().unwrap()[1].contains("&username=alice&user_token=tok&signature="));
    }

    #[tokio::test]
    async fn sha1_config_changes_signature_length() {
        let (transport, requested) =
            MockTransport::new(vec![ok(r#"{"response":{"success":"true","tables":[]}}"#)]);
        let config = GameJoltConfig::new().with_signature_algorithm(SignatureAlgorithm::Sha1);
        let client = GameJoltClient::with_config(transport, credentials(), config);
        assert!(client.get_score_tables().await.unwrap().is_empty());

        let urls = requested.lock().unwrap();
        let sig = urls[0].rsplit("signature=").next().unwrap();
        assert_eq!(sig.len(), 40);
    }
}
