// File: kickwire-core/src/platforms/kick_webhook/events/channel_follow.rs

use serde::{Deserialize, Serialize};

use super::base::{UserEvent, null_as_default};

/// "channel.followed" event
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChannelFollowEvent {
    #[serde(deserialize_with = "null_as_default")]
    pub broadcaster: UserEvent,
    #[serde(deserialize_with = "null_as_default")]
    pub follower: UserEvent,
}
