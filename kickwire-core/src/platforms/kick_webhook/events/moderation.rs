// File: kickwire-core/src/platforms/kick_webhook/events/moderation.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default};

/// "moderation.banned" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ModerationBannedEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub moderator: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub banned_user: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: BanMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BanMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    /// `None` for permanent bans.
    pub expires_at: Option<String>,
}

impl ModerationBannedEvent {
    pub fn is_permanent(&self) -> bool {
        self.metadata.expires_at.as_deref().map_or(true, str::is_empty)
    }
}
