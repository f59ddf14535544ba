//! Canonical request construction.
//!
//! A [`RequestSpec`] is an endpoint path plus an ordered list of query
//! parameters. Order is significant: the signature covers the exact bytes of
//! the unsigned URL, so two specs with the same parameters in a different
//! order produce different signatures.
//!
//! The per-endpoint constructors in this module encode which parameters each
//! platform endpoint takes and validate mandatory values before anything is
//! sent. Values are written verbatim; callers must supply values that are
//! already safe inside a query string (a literal `&` must be pre-escaped).

use std::fmt;

use tracing::debug;

use crate::client::{Credentials, ScoreMode, ScoreQuery, ScoreSubmission, TrophyFilter};
use crate::error::{GameJoltError, Result};
use crate::signature::SignatureAlgorithm;

/// Base URL of version 1 of the platform's game API.
pub const DEFAULT_BASE_URL: &str = "http://gamejolt.com/api/game/v1/";

/// Largest `limit` the score endpoint accepts.
pub const MAX_SCORE_LIMIT: u32 = 100;

/// Name of the query parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "signature";

// ── Endpoint paths ──────────────────────────────────────────────────

pub(crate) const USERS: &str = "users/";
pub(crate) const USERS_AUTH: &str = "users/auth/";
pub(crate) const TROPHIES: &str = "trophies/";
pub(crate) const TROPHIES_ADD_ACHIEVED: &str = "trophies/add-achieved/";
pub(crate) const SCORES: &str = "scores/";
pub(crate) const SCORES_ADD: &str = "scores/add/";
pub(crate) const SCORES_TABLES: &str = "scores/tables/";
pub(crate) const DATA_STORE: &str = "data-store/";

// ── RequestSpec ─────────────────────────────────────────────────────

/// An unsigned request: endpoint path and ordered query parameters.
///
/// Every spec starts with `format=json`. Specs are built fresh for each call
/// and consumed by [`sign`](RequestSpec::sign).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    path: String,
    params: Vec<(String, String)>,
}

impl RequestSpec {
    /// Start a request for `path` (relative to the base URL, e.g. `"scores/"`).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: vec![("format".to_string(), "json".to_string())],
        }
    }

    /// Append a parameter, using the value's string representation.
    #[must_use]
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a mandatory parameter.
    ///
    /// # Errors
    ///
    /// Returns [`GameJoltError::InvalidParameter`] naming `name` if `value` is empty.
    pub fn required(self, name: &'static str, value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(GameJoltError::invalid_parameter(name, "must not be empty"));
        }
        Ok(self.param(name, value))
    }

    /// Append a parameter only when `value` is present.
    #[must_use]
    pub fn optional(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Endpoint path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters in the order they were added.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up the value of the first parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `name=value` pairs joined with `&`, without escaping.
    pub fn query_string(&self) -> String {
        build_query_string(&self.params)
    }

    /// The request URL without its signature.
    pub fn unsigned_url(&self, base_url: &str) -> String {
        format!("{base_url}{}?{}", self.path, self.query_string())
    }

    /// Sign the request and produce the final URL.
    ///
    /// The signature is computed over [`unsigned_url`](Self::unsigned_url)
    /// followed by `private_key`, then appended as the last parameter.
    pub fn sign(
        &self,
        base_url: &str,
        private_key: &str,
        algorithm: SignatureAlgorithm,
    ) -> SignedRequest {
        let unsigned = self.unsigned_url(base_url);
        let signature = algorithm.sign(&unsigned, private_key);
        let url = format!("{unsigned}&{SIGNATURE_PARAM}={signature}");
        SignedRequest { url, signature }
    }
}

/// Join parameters as `name=value` pairs separated by `&`.
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

// ── SignedRequest ───────────────────────────────────────────────────

/// A request URL whose final query parameter is its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    url: String,
    signature: String,
}

impl SignedRequest {
    /// The complete URL to fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The hex signature appended to the URL.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Consume the request and return its URL.
    pub fn into_url(self) -> String {
        self.url
    }
}

impl fmt::Display for SignedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

// ── Endpoint constructors ───────────────────────────────────────────

fn with_game(path: &str, credentials: &Credentials) -> RequestSpec {
    RequestSpec::new(path).param("game_id", credentials.game_id())
}

fn with_user(spec: RequestSpec, credentials: &Credentials) -> Result<RequestSpec> {
    spec.required("username", credentials.username())?
        .required("user_token", credentials.user_token())
}

/// `users/`: `game_id`, `username`.
pub fn user_info(credentials: &Credentials) -> Result<RequestSpec> {
    with_game(USERS, credentials).required("username", credentials.username())
}

/// `users/auth/`: `game_id`, `username`, `user_token`.
pub fn authenticate_user(credentials: &Credentials) -> Result<RequestSpec> {
    with_user(with_game(USERS_AUTH, credentials), credentials)
}

/// `trophies/`: `game_id`, `username`, `user_token`, then at most one filter.
///
/// When both filters are set the `achieved` filter wins and the trophy ids
/// are dropped without error.
pub fn fetch_trophies(credentials: &Credentials, filter: &TrophyFilter) -> Result<RequestSpec> {
    let spec = with_user(with_game(TROPHIES, credentials), credentials)?;
    match (filter.achieved, filter.trophy_ids.as_deref()) {
        (Some(achieved), ids) => {
            if ids.is_some() {
                debug!("trophy id filter dropped in favour of achieved filter");
            }
            Ok(spec.param("achieved", achieved))
        }
        (None, Some([])) => Err(GameJoltError::invalid_parameter(
            "trophy_id",
            "trophy id list must not be empty",
        )),
        (None, Some(ids)) => {
            let joined = ids
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            Ok(spec.param("trophy_id", joined))
        }
        (None, None) => Ok(spec),
    }
}

/// `trophies/add-achieved/`: `game_id`, `user_token`, `username`, `trophy_id`.
pub fn add_achieved(credentials: &Credentials, trophy_id: u64) -> Result<RequestSpec> {
    Ok(with_game(TROPHIES_ADD_ACHIEVED, credentials)
        .required("user_token", credentials.user_token())?
        .required("username", credentials.username())?
        .param("trophy_id", trophy_id))
}

/// `scores/`: `game_id`, optional user pair, optional `table_id`, `limit`.
///
/// `limit` above [`MAX_SCORE_LIMIT`] is clamped; below 1 is rejected.
pub fn fetch_scores(
    credentials: &Credentials,
    query: &ScoreQuery,
    default_limit: u32,
) -> Result<RequestSpec> {
    let limit = query.limit.unwrap_or(i64::from(default_limit));
    if limit < 1 {
        return Err(GameJoltError::invalid_parameter(
            "limit",
            format!("must be at least 1, got {limit}"),
        ));
    }
    let limit = limit.min(i64::from(MAX_SCORE_LIMIT));

    let mut spec = with_game(SCORES, credentials);
    if query.user_only {
        spec = with_user(spec, credentials)?;
    }
    Ok(spec.optional("table_id", query.table_id).param("limit", limit))
}

/// `scores/add/`: `game_id`, `score`, `sort`, user pair or `guestname`,
/// then optional `extra_data` and `table_id`.
pub fn add_score(
    credentials: &Credentials,
    submission: &ScoreSubmission,
    mode: &ScoreMode,
) -> Result<RequestSpec> {
    let spec = with_game(SCORES_ADD, credentials)
        .required("score", &submission.score)?
        .param("sort", submission.sort);

    let spec = match mode {
        ScoreMode::Authenticated => {
            if credentials.username().is_empty() || credentials.user_token().is_empty() {
                return Err(GameJoltError::invalid_parameter(
                    "username",
                    "authenticated score needs a username and user token; use a guest name otherwise",
                ));
            }
            with_user(spec, credentials)?
        }
        ScoreMode::Guest(name) => spec.required("guestname", name)?,
    };

    let extra_data = submission
        .extra_data
        .as_deref()
        .filter(|data| !data.is_empty());
    Ok(spec
        .optional("extra_data", extra_data)
        .optional("table_id", submission.table_id))
}

/// `scores/tables/`: `game_id`.
pub fn score_tables(credentials: &Credentials) -> RequestSpec {
    with_game(SCORES_TABLES, credentials)
}

/// `data-store/`: `game_id`, `key`, optional user pair.
pub fn data_store_fetch(
    credentials: &Credentials,
    key: &str,
    scope_to_user: bool,
) -> Result<RequestSpec> {
    let spec = with_game(DATA_STORE, credentials).required("key", key)?;
    if scope_to_user {
        with_user(spec, credentials)
    } else {
        Ok(spec)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use crate::signature::sign;

    fn credentials() -> Credentials {
        Credentials::new(42, "secret")
            .unwrap()
            .with_user("alice", "tok123")
    }

    fn names(spec: &RequestSpec) -> Vec<&str> {
        spec.params().iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn new_spec_starts_with_format_json() {
        let spec = RequestSpec::new("users/");
        assert_eq!(spec.query_string(), "format=json");
    }

    #[test]
    fn query_string_preserves_insertion_order() {
        let spec = RequestSpec::new("x/").param("b", 2).param("a", 1);
        assert_eq!(spec.query_string(), "format=json&b=2&a=1");
    }

    #[test]
    fn values_are_not_escaped() {
        let spec = RequestSpec::new("x/").param("key", "a%26b c");
        assert_eq!(spec.query_string(), "format=json&key=a%26b c");
    }

    #[test]
    fn required_rejects_empty_values() {
        let err = RequestSpec::new("x/").required("key", "").unwrap_err();
        assert!(matches!(
            err,
            GameJoltError::InvalidParameter { field: "key", .. }
        ));
    }

    #[test]
    fn optional_skips_none() {
        let spec = RequestSpec::new("x/")
            .optional("a", None::<u64>)
            .optional("b", Some(7));
        assert_eq!(spec.query_string(), "format=json&b=7");
    }

    #[test]
    fn signature_is_last_and_covers_unsigned_url() {
        let spec = score_tables(&credentials());
        let signed = spec.sign(DEFAULT_BASE_URL, "secret", SignatureAlgorithm::Md5);

        let unsigned = "http://gamejolt.com/api/game/v1/scores/tables/?format=json&game_id=42";
        assert_eq!(signed.signature(), sign(unsigned, "secret"));
        assert_eq!(
            signed.url(),
            format!("{unsigned}&signature={}", signed.signature())
        );
        let last = signed.url().rsplit('&').next().unwrap();
        assert!(last.starts_with("signature="));
        assert_eq!(signed.url().matches("signature=").count(), 1);
    }

    #[test]
    fn signing_twice_is_identical() {
        let spec = user_info(&credentials()).unwrap();
        let a = spec.sign(DEFAULT_BASE_URL, "secret", SignatureAlgorithm::Md5);
        let b = spec.sign(DEFAULT_BASE_URL, "secret", SignatureAlgorithm::Md5);
        assert_eq!(a, b);
    }

    #[test]
    fn sha1_signature_is_forty_hex_chars() {
        let spec = user_info(&credentials()).unwrap();
        let signed = spec.sign(DEFAULT_BASE_URL, "secret", SignatureAlgorithm::Sha1);
        assert_eq!(signed.signature().len(), 40);
    }

    #[test]
    fn user_info_params() {
        let spec = user_info(&credentials()).unwrap();
        assert_eq!(spec.path(), "users/");
        assert_eq!(spec.query_string(), "format=json&game_id=42&username=alice");
    }

    #[test]
    fn user_info_requires_username() {
        let creds = Credentials::new(42, "secret").unwrap();
        let err = user_info(&creds).unwrap_err();
        assert!(matches!(
            err,
            GameJoltError::InvalidParameter {
                field: "username",
                ..
            }
        ));
    }

    #[test]
    fn authenticate_params() {
        let spec = authenticate_user(&credentials()).unwrap();
        assert_eq!(spec.path(), "users/auth/");
        assert_eq!(
            names(&spec),
            ["format", "game_id", "username", "user_token"]
        );
    }

    #[test]
    fn trophies_without_filter() {
        let spec = fetch_trophies(&credentials(), &TrophyFilter::all()).unwrap();
        assert_eq!(
            spec.query_string(),
            "format=json&game_id=42&username=alice&user_token=tok123"
        );
    }

    #[test]
    fn trophies_achieved_filter_is_literal_bool() {
        let spec = fetch_trophies(&credentials(), &TrophyFilter::achieved(false)).unwrap();
        assert_eq!(spec.get("achieved"), Some("false"));
        let spec = fetch_trophies(&credentials(), &TrophyFilter::achieved(true)).unwrap();
        assert_eq!(spec.get("achieved"), Some("true"));
    }

    #[test]
    fn trophies_single_and_list_ids() {
        let spec = fetch_trophies(&credentials(), &TrophyFilter::trophy(7)).unwrap();
        assert_eq!(spec.get("trophy_id"), Some("7"));

        let spec = fetch_trophies(&credentials(), &TrophyFilter::trophies([1, 22, 333])).unwrap();
        assert_eq!(spec.get("trophy_id"), Some("1,22,333"));
    }

    #[test]
    fn trophies_achieved_takes_precedence() {
        let filter = TrophyFilter::trophies([1, 2]).with_achieved(true);
        let spec = fetch_trophies(&credentials(), &filter).unwrap();
        assert_eq!(spec.get("achieved"), Some("true"));
        assert_eq!(spec.get("trophy_id"), None);
    }

    #[test]
    fn trophies_empty_id_list_is_invalid() {
        let filter = TrophyFilter::trophies(Vec::<u64>::new());
        let err = fetch_trophies(&credentials(), &filter).unwrap_err();
        assert!(matches!(
            err,
            GameJoltError::InvalidParameter {
                field: "trophy_id",
                ..
            }
        ));
    }

    #[test]
    fn add_achieved_param_order() {
        let spec = add_achieved(&credentials(), 99).unwrap();
        assert_eq!(spec.path(), "trophies/add-achieved/");
        assert_eq!(
            spec.query_string(),
            "format=json&game_id=42&user_token=tok123&username=alice&trophy_id=99"
        );
    }

    #[test]
    fn scores_limit_clamped() {
        let spec = fetch_scores(&credentials(), &ScoreQuery::new().with_limit(150), 10).unwrap();
        assert_eq!(spec.get("limit"), Some("100"));
    }

    #[test]
    fn scores_limit_below_one_rejected() {
        for limit in [0, -5] {
            let err = fetch_scores(&credentials(), &ScoreQuery::new().with_limit(limit), 10)
                .unwrap_err();
            assert!(matches!(
                err,
                GameJoltError::InvalidParameter { field: "limit", .. }
            ));
        }
    }

    #[test]
    fn scores_default_limit_applies() {
        let spec = fetch_scores(&credentials(), &ScoreQuery::new(), 25).unwrap();
        assert_eq!(spec.get("limit"), Some("25"));
    }

    #[test]
    fn scores_user_scope_and_table() {
        let query = ScoreQuery::new().with_table(5).user_only();
        let spec = fetch_scores(&credentials(), &query, 10).unwrap();
        assert_eq!(
            spec.query_string(),
            "format=json&game_id=42&username=alice&user_token=tok123&table_id=5&limit=10"
        );
    }

    #[test]
    fn scores_global_has_no_user_params() {
        let spec = fetch_scores(&credentials(), &ScoreQuery::new(), 10).unwrap();
        assert_eq!(spec.get("username"), None);
        assert_eq!(spec.get("user_token"), None);
    }

    #[test]
    fn add_score_authenticated() {
        let submission = ScoreSubmission::new("500 coins", 500)
            .with_extra_data("level3")
            .with_table(2);
        let spec = add_score(&credentials(), &submission, &ScoreMode::Authenticated).unwrap();
        assert_eq!(spec.path(), "scores/add/");
        assert_eq!(
            spec.query_string(),
            "format=json&game_id=42&score=500 coins&sort=500&username=alice&user_token=tok123&extra_data=level3&table_id=2"
        );
    }

    #[test]
    fn add_score_guest() {
        let submission = ScoreSubmission::new("12", 12);
        let spec = add_score(
            &credentials(),
            &submission,
            &ScoreMode::Guest("Bob".into()),
        )
        .unwrap();
        assert_eq!(spec.get("guestname"), Some("Bob"));
        assert_eq!(spec.get("username"), None);
    }

    #[test]
    fn add_score_without_any_identity_is_invalid() {
        let anonymous = Credentials::new(42, "secret").unwrap();
        let submission = ScoreSubmission::new("1", 1);
        assert!(add_score(&anonymous, &submission, &ScoreMode::Authenticated)
            .unwrap_err()
            .is_invalid_parameter());
        assert!(
            add_score(&anonymous, &submission, &ScoreMode::Guest(String::new()))
                .unwrap_err()
                .is_invalid_parameter()
        );
    }

    #[test]
    fn add_score_empty_extra_data_omitted() {
        let submission = ScoreSubmission::new("1", 1).with_extra_data("");
        let spec = add_score(&credentials(), &submission, &ScoreMode::Authenticated).unwrap();
        assert_eq!(spec.get("extra_data"), None);
    }

    #[test]
    fn data_store_params() {
        let spec = data_store_fetch(&credentials(), "save1", false).unwrap();
        assert_eq!(spec.query_string(), "format=json&game_id=42&key=save1");

        let spec = data_store_fetch(&credentials(), "save1", true).unwrap();
        assert_eq!(
            spec.query_string(),
            "format=json&game_id=42&key=save1&username=alice&user_token=tok123"
        );
    }

    #[test]
    fn data_store_requires_key() {
        let err = data_store_fetch(&credentials(), "", false).unwrap_err();
        assert!(matches!(
            err,
            GameJoltError::InvalidParameter { field: "key", .. }
        ));
    }
}
