// File: kickwire-common/src/models/event_family.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Every webhook event family Kick can deliver. The serde names are the wire names
/// carried in the event type header.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EventFamily {
    #[serde(rename = "chat.message.sent")]
    ChatMessageSent,
    #[serde(rename = "channel.followed")]
    ChannelFollowed,
    #[serde(rename = "channel.subscription.renewal")]
    ChannelSubscriptionRenewal,
    #[serde(rename = "channel.subscription.gifts")]
    ChannelSubscriptionGifts,
    #[serde(rename = "channel.subscription.new")]
    ChannelSubscriptionCreated,
    #[serde(rename = "livestream.status.updated")]
    LivestreamStatusUpdated,
    #[serde(rename = "livestream.metadata.updated")]
    LivestreamMetadataUpdated,
    #[serde(rename = "moderation.banned")]
    ModerationBanned,
    #[serde(rename = "kicks.gifted")]
    KicksGifted,
}

impl EventFamily {
    pub const ALL: [EventFamily; 9] = [
        EventFamily::ChatMessageSent,
        EventFamily::ChannelFollowed,
        EventFamily::ChannelSubscriptionRenewal,
        EventFamily::ChannelSubscriptionGifts,
        EventFamily::ChannelSubscriptionCreated,
        EventFamily::LivestreamStatusUpdated,
        EventFamily::LivestreamMetadataUpdated,
        EventFamily::ModerationBanned,
        EventFamily::KicksGifted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventFamily::ChatMessageSent => "chat.message.sent",
            EventFamily::ChannelFollowed => "channel.followed",
            EventFamily::ChannelSubscriptionRenewal => "channel.subscription.renewal",
            EventFamily::ChannelSubscriptionGifts => "channel.subscription.gifts",
            EventFamily::ChannelSubscriptionCreated => "channel.subscription.new",
            EventFamily::LivestreamStatusUpdated => "livestream.status.updated",
            EventFamily::LivestreamMetadataUpdated => "livestream.metadata.updated",
            EventFamily::ModerationBanned => "moderation.banned",
            EventFamily::KicksGifted => "kicks.gifted",
        }
    }
}

impl fmt::Display for EventFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the wire names. Anything else fails closed.
impl FromStr for EventFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat.message.sent" => Ok(EventFamily::ChatMessageSent),
            "channel.followed" => Ok(EventFamily::ChannelFollowed),
            "channel.subscription.renewal" => Ok(EventFamily::ChannelSubscriptionRenewal),
            "channel.subscription.gifts" => Ok(EventFamily::ChannelSubscriptionGifts),
            "channel.subscription.new" => Ok(EventFamily::ChannelSubscriptionCreated),
            "livestream.status.updated" => Ok(EventFamily::LivestreamStatusUpdated),
            "livestream.metadata.updated" => Ok(EventFamily::LivestreamMetadataUpdated),
            "moderation.banned" => Ok(EventFamily::ModerationBanned),
            "kicks.gifted" => Ok(EventFamily::KicksGifted),
            _ => Err(Error::UnknownEventFamily(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_parse_back() {
        for family in EventFamily::ALL {
            let parsed: EventFamily = family.to_string().parse().unwrap();
            assert_eq!(parsed, family);
        }
    }

    #[test]
    fn test_unknown_family_fails_closed() {
        let err = "invalid".parse::<EventFamily>().unwrap_err();
        assert!(matches!(err, Error::UnknownEventFamily(ref name) if name == "invalid"));
        assert_eq!(err.to_string(), "Unknown event family: invalid");

        // Parsing is exact; no case folding or trimming.
        assert!("Chat.Message.Sent".parse::<EventFamily>().is_err());
        assert!(" kicks.gifted".parse::<EventFamily>().is_err());
        assert!("".parse::<EventFamily>().is_err());
    }

    #[test]
    fn test_created_subscription_uses_new_suffix() {
        assert_eq!(EventFamily::ChannelSubscriptionCreated.as_str(), "channel.subscription.new");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&EventFamily::ModerationBanned).unwrap();
        assert_eq!(json, "\"moderation.banned\"");
        let back: EventFamily = serde_json::from_str("\"kicks.gifted\"").unwrap();
        assert_eq!(back, EventFamily::KicksGifted);
    }
}
