// File: kickwire-core/src/platforms/kick_webhook/events/kicks.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default};

/// "kicks.gifted" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct KicksGiftedEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub sender: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub gift: KicksGift,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct KicksGift {
    #[serde(deserialize_with = "null_as_default")]
    pub amount: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub gift_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}
