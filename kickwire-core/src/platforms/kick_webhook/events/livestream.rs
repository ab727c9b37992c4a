// File: kickwire-core/src/platforms/kick_webhook/events/livestream.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default, string_or_number};

/// "livestream.status.updated" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LivestreamStatusUpdatedEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub is_live: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub started_at: Option<String>,
    /// `None` while the stream is still live.
    pub ended_at: Option<String>,
}

/// "livestream.metadata.updated" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LivestreamMetadataUpdatedEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: LivestreamMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LivestreamMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_mature_content: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub category: LivestreamCategory,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LivestreamCategory {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
}
