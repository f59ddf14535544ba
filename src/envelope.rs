//! Decoding of the platform's response envelope.
//!
//! Every response has the shape
//!
//! ```json
//! {"response": {"success": "true", "...": "endpoint fields", "message": "optional"}}
//! ```
//!
//! [`decode`] validates that shape and turns an explicit `success: false` into
//! [`GameJoltError::Platform`], so a successfully decoded [`Envelope`] always
//! describes a request the platform accepted.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{GameJoltError, Result};
use crate::types::{lenient, User};

const RESPONSE_KEY: &str = "response";
const SUCCESS_KEY: &str = "success";
const MESSAGE_KEY: &str = "message";

/// The decoded `response` object of a successful platform reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    success: bool,
    success_reported: bool,
    payload: Map<String, Value>,
    message: Option<String>,
}

/// Decode raw response bytes into an [`Envelope`].
///
/// A missing `success` key is accepted; the payload then decides the outcome.
///
/// # Errors
///
/// - [`GameJoltError::MalformedResponse`] if the bytes are not JSON, the
///   top level has no `response` object, or `success` is not a boolean.
/// - [`GameJoltError::Platform`] if the platform reported `success: false`.
pub fn decode(bytes: &[u8]) -> Result<Envelope> {
    let root: Value = serde_json::from_slice(bytes)
        .map_err(|e| GameJoltError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let Value::Object(mut root) = root else {
        return Err(GameJoltError::MalformedResponse(
            "top-level value is not an object".into(),
        ));
    };

    let mut payload = match root.remove(RESPONSE_KEY) {
        Some(Value::Object(payload)) => payload,
        Some(other) => {
            return Err(GameJoltError::MalformedResponse(format!(
                "`{RESPONSE_KEY}` is not an object: {other}"
            )))
        }
        None => {
            return Err(GameJoltError::MalformedResponse(format!(
                "missing `{RESPONSE_KEY}` key"
            )))
        }
    };

    let success_reported = payload.contains_key(SUCCESS_KEY);
    let success = match payload.remove(SUCCESS_KEY) {
        None => true,
        Some(value) => lenient::parse_bool(&value).ok_or_else(|| {
            GameJoltError::MalformedResponse(format!("`{SUCCESS_KEY}` is not a boolean: {value}"))
        })?,
    };

    let message = payload
        .remove(MESSAGE_KEY)
        .as_ref()
        .and_then(lenient::scalar_to_string)
        .filter(|m| !m.is_empty());

    if !success {
        return Err(GameJoltError::Platform { message });
    }

    Ok(Envelope {
        success,
        success_reported,
        payload,
        message,
    })
}

impl Envelope {
    /// Whether the platform reported success. Always `true` for a decoded envelope.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Whether the reply carried an explicit `success` flag.
    ///
    /// Replies without one still decode, but only an explicit flag confirms
    /// that an action such as authentication or a trophy award took effect.
    pub fn reports_success(&self) -> bool {
        self.success_reported && self.success
    }

    /// Informational message sent alongside a successful response.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Endpoint-specific fields, without `success` and `message`.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Consume the envelope and return its payload.
    pub fn into_payload(self) -> Map<String, Value> {
        self.payload
    }

    /// Raw value of a payload field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Deserialize a payload field.
    ///
    /// # Errors
    ///
    /// [`GameJoltError::MalformedResponse`] if the field is missing or has the wrong shape.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self
            .payload
            .get(name)
            .ok_or_else(|| GameJoltError::MalformedResponse(format!("missing `{name}` field")))?;
        from_field(name, value.clone())
    }

    /// Deserialize a payload field holding a list of objects.
    ///
    /// # Errors
    ///
    /// [`GameJoltError::MalformedResponse`] if the field is missing, is not an
    /// array, or an element has the wrong shape.
    pub fn list<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        match self.payload.get(name) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| from_field(name, item.clone()))
                .collect(),
            Some(other) => Err(GameJoltError::MalformedResponse(format!(
                "`{name}` is not an array: {other}"
            ))),
            None => Err(GameJoltError::MalformedResponse(format!(
                "missing `{name}` field"
            ))),
        }
    }

    /// Deserialize the first element of a list field.
    ///
    /// # Errors
    ///
    /// [`GameJoltError::EmptyResult`] if the list is empty or missing;
    /// [`GameJoltError::MalformedResponse`] if it is not an array or the first
    /// element has the wrong shape.
    pub fn first<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        match self.payload.get(name) {
            Some(Value::Array(items)) => match items.first() {
                Some(item) => from_field(name, item.clone()),
                None => Err(GameJoltError::EmptyResult { field: name.into() }),
            },
            Some(other) => Err(GameJoltError::MalformedResponse(format!(
                "`{name}` is not an array: {other}"
            ))),
            None => Err(GameJoltError::EmptyResult { field: name.into() }),
        }
    }

    /// The first user of a `users/` response.
    ///
    /// # Errors
    ///
    /// [`GameJoltError::EmptyResult`] if no user was returned.
    pub fn first_user(&self) -> Result<User> {
        self.first("users")
    }
}

fn from_field<T: DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| GameJoltError::MalformedResponse(format!("field `{name}`: {e}")))
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

    #[test]
    fn decodes_string_success() {
        let env = decode(br#"{"response":{"success":"true","data":"42"}}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.field::<String>("data").unwrap(), "42");
        assert!(env.get("success").is_none());
    }

    #[test]
    fn decodes_boolean_success() {
        let env = decode(br#"{"response":{"success":true}}"#).unwrap();
        assert!(env.payload().is_empty());
    }

    #[test]
    fn missing_success_decodes_but_is_not_reported() {
        let env = decode(br#"{"response":{"users":[]}}"#).unwrap();
        assert!(env.is_success());
        assert!(!env.reports_success());

        let env = decode(br#"{"response":{"success":"true"}}"#).unwrap();
        assert!(env.reports_success());
    }

    #[test]
    fn failure_becomes_platform_error() {
        let err = decode(br#"{"response":{"success":"false","message":"bad key"}}"#).unwrap_err();
        match err {
            GameJoltError::Platform { message } => assert_eq!(message.as_deref(), Some("bad key")),
            other => panic!("expected Platform, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message() {
        let err = decode(br#"{"response":{"success":false}}"#).unwrap_err();
        assert!(matches!(err, GameJoltError::Platform { message: None }));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = decode(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, GameJoltError::MalformedResponse(_)));
    }

    #[test]
    fn missing_wrapper_is_malformed() {
        for body in [
            &br#"{"success":"true"}"#[..],
            &br#"[]"#[..],
            &br#"{"response":"true"}"#[..],
        ] {
            let err = decode(body).unwrap_err();
            assert!(
                matches!(err, GameJoltError::MalformedResponse(_)),
                "body {:?} gave {err:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn unrecognised_success_value_is_malformed() {
        let err = decode(br#"{"response":{"success":"maybe"}}"#).unwrap_err();
        assert!(matches!(err, GameJoltError::MalformedResponse(_)));
    }

    #[test]
    fn missing_success_is_accepted() {
        let env = decode(br#"{"response":{"users":[]}}"#).unwrap();
        assert!(env.is_success());
    }

    #[test]
    fn first_user_on_empty_list() {
        let env = decode(br#"{"response":{"users":[]}}"#).unwrap();
        let err = env.first_user().unwrap_err();
        assert!(matches!(err, GameJoltError::EmptyResult { ref field } if field == "users"));
    }

    #[test]
    fn first_user_picks_first_element() {
        let env = decode(
            br#"{"response":{"success":"true","users":[
                {"id":"1","username":"alice"},
                {"id":"2","username":"bob"}
            ]}}"#,
        )
        .unwrap();
        let user = env.first_user().unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn list_requires_array() {
        let env = decode(br#"{"response":{"success":"true","trophies":{}}}"#).unwrap();
        let err = env.list::<crate::types::Trophy>("trophies").unwrap_err();
        assert!(matches!(err, GameJoltError::MalformedResponse(_)));
    }

    #[test]
    fn success_message_is_kept() {
        let env = decode(br#"{"response":{"success":"true","message":"ok"}}"#).unwrap();
        assert_eq!(env.message(), Some("ok"));
    }
}
