// File: kickwire-core/src/platforms/kick_webhook/events/chat.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default, string_or_number};

/// "chat.message.sent" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChatMessageEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: String,
    pub replies_to: Option<ChatReply>,
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub sender: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// `None` when Kick sends `"emotes": null` or omits the field.
    pub emotes: Option<Vec<ChatMessageEmote>>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// The message a chat message answers, when it is a reply.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChatReply {
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sender: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChatMessageEmote {
    #[serde(deserialize_with = "string_or_number")]
    pub emote_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<EmotePosition>,
}

/// Character span of an emote inside `content`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct EmotePosition {
    #[serde(rename = "s", deserialize_with = "null_as_default")]
    pub start: u32,
    #[serde(rename = "e", deserialize_with = "null_as_default")]
    pub end: u32,
}
