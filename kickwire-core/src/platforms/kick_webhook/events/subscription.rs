// File: kickwire-core/src/platforms/kick_webhook/events/subscription.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default};

/// "channel.subscription.renewal" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChannelSubscriptionRenewalEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriber: UserEvent,
    /// Months subscribed so far.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub expires_at: Option<String>,
}

/// "channel.subscription.gifts" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChannelSubscriptionGiftsEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    /// `is_anonymous` is set and the other fields are empty for anonymous gifts.
    #[serde(deserialize_with = "null_as_default")]
    pub gifter: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub giftees: Vec<UserEvent>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub expires_at: Option<String>,
}

/// "channel.subscription.new" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChannelSubscriptionCreatedEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriber: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    pub expires_at: Option<String>,
}
