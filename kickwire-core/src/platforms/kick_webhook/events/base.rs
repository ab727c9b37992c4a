// File: kickwire-core/src/platforms/kick_webhook/events/base.rs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A participant as Kick describes it in every webhook payload
/// (broadcaster, sender, follower, gifter, moderator, ...).
///
/// Anonymous participants arrive with `null` ids and names; those decode to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UserEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub is_anonymous: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_picture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_slug: String,
    pub identity: Option<IdentityEvent>,
}

/// Chat decorations for a user.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IdentityEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub username_color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Badge {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub badge_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub count: u32,
}

/// `null` becomes `T::default()`; a missing field is handled by `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids that Kick has shipped both as JSON strings and as numbers.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, found {}",
            other
        ))),
    }
}
