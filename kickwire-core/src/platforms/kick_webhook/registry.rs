// File: kickwire-core/src/platforms/kick_webhook/registry.rs

use std::fmt;

use kickwire_common::models::EventFamily;

/// The only schema version Kick currently publishes for any family.
pub const CURRENT_SCHEMA_VERSION: &str = "1";

/// The shape a payload body is decoded into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DecodeTarget {
    ChatMessageSent,
    ChannelFollowed,
    ChannelSubscriptionRenewal,
    ChannelSubscriptionGifts,
    ChannelSubscriptionCreated,
    LivestreamStatusUpdated,
    LivestreamMetadataUpdated,
    ModerationBanned,
    KicksGifted,
    /// No registered shape; keep the body as a JSON object.
    Generic,
}

impl fmt::Display for DecodeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecodeTarget::ChatMessageSent => "ChatMessageEvent",
            DecodeTarget::ChannelFollowed => "ChannelFollowEvent",
            DecodeTarget::ChannelSubscriptionRenewal => "ChannelSubscriptionRenewalEvent",
            DecodeTarget::ChannelSubscriptionGifts => "ChannelSubscriptionGiftsEvent",
            DecodeTarget::ChannelSubscriptionCreated => "ChannelSubscriptionCreatedEvent",
            DecodeTarget::LivestreamStatusUpdated => "LivestreamStatusUpdatedEvent",
            DecodeTarget::LivestreamMetadataUpdated => "LivestreamMetadataUpdatedEvent",
            DecodeTarget::ModerationBanned => "ModerationBannedEvent",
            DecodeTarget::KicksGifted => "KicksGiftedEvent",
            DecodeTarget::Generic => "generic",
        };
        f.write_str(s)
    }
}

/// Schema versions with a concrete shape, per family.
pub fn versions(family: EventFamily) -> &'static [&'static str] {
    match family {
        EventFamily::ChatMessageSent
        | EventFamily::ChannelFollowed
        | EventFamily::ChannelSubscriptionRenewal
        | EventFamily::ChannelSubscriptionGifts
        | EventFamily::ChannelSubscriptionCreated
        | EventFamily::LivestreamStatusUpdated
        | EventFamily::LivestreamMetadataUpdated
        | EventFamily::ModerationBanned
        | EventFamily::KicksGifted => &[CURRENT_SCHEMA_VERSION],
    }
}

/// Selects the decode target for a (family, version) pair.
///
/// Versions match exactly; there is no "latest" fallback. A miss is not an error,
/// it selects `DecodeTarget::Generic`.
pub fn lookup(family: EventFamily, version: &str) -> DecodeTarget {
    if !versions(family).contains(&version) {
        return DecodeTarget::Generic;
    }

    match family {
        EventFamily::ChatMessageSent => DecodeTarget::ChatMessageSent,
        EventFamily::ChannelFollowed => DecodeTarget::ChannelFollowed,
        EventFamily::ChannelSubscriptionRenewal => DecodeTarget::ChannelSubscriptionRenewal,
        EventFamily::ChannelSubscriptionGifts => DecodeTarget::ChannelSubscriptionGifts,
        EventFamily::ChannelSubscriptionCreated => DecodeTarget::ChannelSubscriptionCreated,
        EventFamily::LivestreamStatusUpdated => DecodeTarget::LivestreamStatusUpdated,
        EventFamily::LivestreamMetadataUpdated => DecodeTarget::LivestreamMetadataUpdated,
        EventFamily::ModerationBanned => DecodeTarget::ModerationBanned,
        EventFamily::KicksGifted => DecodeTarget::KicksGifted,
    }
}
