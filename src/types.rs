//! Typed values returned by the platform.
//!
//! The platform sends almost every scalar as a JSON string (`"id": "123"`,
//! `"primary": "true"`). Deserialization here accepts both that form and the
//! native JSON form, so values survive a serialize/deserialize cycle through
//! this crate unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player account as returned by `users/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient::u64")]
    pub id: u64,
    /// Account type (`"User"`, `"Developer"`, `"Moderator"`, `"Administrator"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_up: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_logged_in: Option<String>,
    /// `"Active"` or `"Banned"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any further fields the platform sends (developer profile data, etc.).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A trophy (achievement) and whether the current user holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trophy {
    #[serde(deserialize_with = "lenient::u64")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// `"Bronze"`, `"Silver"`, `"Gold"` or `"Platinum"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub image_url: String,
    /// The platform sends `"false"` or a relative time such as `"3 days ago"`.
    #[serde(default, deserialize_with = "lenient::achieved")]
    pub achieved: bool,
}

/// One row of a high-score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Display form of the score, e.g. `"234 jumps"`.
    #[serde(deserialize_with = "lenient::string")]
    pub score: String,
    /// Numeric ranking key.
    #[serde(deserialize_with = "lenient::i64")]
    pub sort: i64,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub extra_data: Option<String>,
    /// Display name of a guest submission.
    #[serde(
        rename = "guest",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub guest_name: Option<String>,
    /// Username of an authenticated submission.
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub stored: Option<String>,
}

impl ScoreEntry {
    /// Returns `true` if the score was submitted by a guest.
    pub fn is_guest(&self) -> bool {
        self.guest_name.is_some()
    }
}

/// A high-score table of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    #[serde(deserialize_with = "lenient::u64")]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Whether this is the game's default table.
    #[serde(default, deserialize_with = "lenient::bool")]
    pub primary: bool,
}

/// A value read from the data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStoreEntry {
    pub key: String,
    pub data: String,
    /// Owner of the entry when it was read from the user-scoped store.
    pub username: Option<String>,
}

impl DataStoreEntry {
    /// Returns `true` if the entry belongs to a single user.
    pub fn is_user_scoped(&self) -> bool {
        self.username.is_some()
    }
}

/// Deserializers for the platform's string-encoded scalars.
pub(crate) mod lenient {
    use serde::de::{Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    /// Render a scalar as the string the platform would have sent.
    pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub(crate) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        let value = Value::deserialize(d)?;
        scalar_to_string(&value)
            .ok_or_else(|| D::Error::custom(format!("expected a string, got {value}")))
    }

    pub(crate) fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            other => scalar_to_string(&other)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a string, got {other}"))),
        }
    }

    pub(crate) fn u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = Value::deserialize(d)?;
        parse_u64(&value)
            .ok_or_else(|| D::Error::custom(format!("expected an unsigned integer, got {value}")))
    }

    pub(crate) fn opt_u64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        let value = Value::deserialize(d)?;
        match &value {
            Value::Null => Ok(None),
            Value::String(s) if s.is_empty() => Ok(None),
            other => parse_u64(other).map(Some).ok_or_else(|| {
                D::Error::custom(format!("expected an unsigned integer, got {other}"))
            }),
        }
    }

    pub(crate) fn i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(d)?;
        let parsed = match &value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| D::Error::custom(format!("expected an integer, got {value}")))
    }

    fn parse_u64(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        parse_bool(&value)
            .ok_or_else(|| D::Error::custom(format!("expected a boolean, got {value}")))
    }

    /// `true`/`false` as JSON booleans or the strings `"true"`/`"false"`.
    pub(crate) fn parse_bool(value: &Value) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s == "true" || s == "1" => Some(true),
            Value::String(s) if s == "false" || s == "0" => Some(false),
            _ => None,
        }
    }

    pub(crate) fn achieved<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(match value {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::String(s) => !(s.is_empty() || s == "false"),
            _ => true,
        })
    }
}
