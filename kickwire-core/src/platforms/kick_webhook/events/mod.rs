// File: kickwire-core/src/platforms/kick_webhook/events/mod.rs

pub mod base;
pub mod channel_follow;
pub mod chat;
pub mod kicks;
pub mod livestream;
pub mod moderation;
pub mod subscription;

pub use base::*;
pub use channel_follow::*;
pub use chat::*;
pub use kicks::*;
pub use livestream::*;
pub use moderation::*;
pub use subscription::*;

use kickwire_common::models::EventFamily;
use serde::Serialize;
use serde_json::{Map, Value};

/// A verified webhook payload in one of its known shapes, or the raw JSON object
/// when no shape is registered for the delivered (family, version).
///
/// Serializes as the bare payload, without a wrapping tag.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum KickWebhookEvent {
    ChatMessageSent(ChatMessageEvent),
    ChannelFollowed(ChannelFollowEvent),
    ChannelSubscriptionRenewal(ChannelSubscriptionRenewalEvent),
    ChannelSubscriptionGifts(ChannelSubscriptionGiftsEvent),
    ChannelSubscriptionCreated(ChannelSubscriptionCreatedEvent),
    LivestreamStatusUpdated(LivestreamStatusUpdatedEvent),
    LivestreamMetadataUpdated(LivestreamMetadataUpdatedEvent),
    ModerationBanned(ModerationBannedEvent),
    KicksGifted(KicksGiftedEvent),
    Generic(Map<String, Value>),
}

impl KickWebhookEvent {
    /// The family of a concrete payload. `None` for `Generic`, which carries no shape.
    pub fn family(&self) -> Option<EventFamily> {
        match self {
            KickWebhookEvent::ChatMessageSent(_) => Some(EventFamily::ChatMessageSent),
            KickWebhookEvent::ChannelFollowed(_) => Some(EventFamily::ChannelFollowed),
            KickWebhookEvent::ChannelSubscriptionRenewal(_) => {
                Some(EventFamily::ChannelSubscriptionRenewal)
            }
            KickWebhookEvent::ChannelSubscriptionGifts(_) => {
                Some(EventFamily::ChannelSubscriptionGifts)
            }
            KickWebhookEvent::ChannelSubscriptionCreated(_) => {
                Some(EventFamily::ChannelSubscriptionCreated)
            }
            KickWebhookEvent::LivestreamStatusUpdated(_) => {
                Some(EventFamily::LivestreamStatusUpdated)
            }
            KickWebhookEvent::LivestreamMetadataUpdated(_) => {
                Some(EventFamily::LivestreamMetadataUpdated)
            }
            KickWebhookEvent::ModerationBanned(_) => Some(EventFamily::ModerationBanned),
            KickWebhookEvent::KicksGifted(_) => Some(EventFamily::KicksGifted),
            KickWebhookEvent::Generic(_) => None,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, KickWebhookEvent::Generic(_))
    }

    /// Every concrete payload names the channel it happened on.
    pub fn broadcaster(&self) -> Option<&UserEvent> {
        match self {
            KickWebhookEvent::ChatMessageSent(e) => Some(&e.broadcaster),
            KickWebhookEvent::ChannelFollowed(e) => Some(&e.broadcaster),
            KickWebhookEvent::ChannelSubscriptionRenewal(e) => Some(&e.broadcaster),
            KickWebhookEvent::ChannelSubscriptionGifts(e) => Some(&e.broadcaster),
            KickWebhookEvent::ChannelSubscriptionCreated(e) => Some(&e.broadcaster),
            KickWebhookEvent::LivestreamStatusUpdated(e) => Some(&e.broadcaster),
            KickWebhookEvent::LivestreamMetadataUpdated(e) => Some(&e.broadcaster),
            KickWebhookEvent::ModerationBanned(e) => Some(&e.broadcaster),
            KickWebhookEvent::KicksGifted(e) => Some(&e.broadcaster),
            KickWebhookEvent::Generic(_) => None,
        }
    }
}
