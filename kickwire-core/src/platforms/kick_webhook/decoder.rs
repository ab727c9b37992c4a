// File: kickwire-core/src/platforms/kick_webhook/decoder.rs

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Error;
use super::events::*;
use super::registry::DecodeTarget;

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice::<T>(body).map_err(|e| Error::PayloadDecode(e.to_string()))
}

/// Deserializes a raw body into the shape selected by the registry.
///
/// Unknown fields are ignored and missing ones take defaults. The generic target still
/// requires a top-level JSON object.
pub fn decode(target: DecodeTarget, body: &[u8]) -> Result<KickWebhookEvent, Error> {
    let event = match target {
        DecodeTarget::ChatMessageSent => KickWebhookEvent::ChatMessageSent(parse(body)?),
        DecodeTarget::ChannelFollowed => KickWebhookEvent::ChannelFollowed(parse(body)?),
        DecodeTarget::ChannelSubscriptionRenewal => {
            KickWebhookEvent::ChannelSubscriptionRenewal(parse(body)?)
        }
        DecodeTarget::ChannelSubscriptionGifts => {
            KickWebhookEvent::ChannelSubscriptionGifts(parse(body)?)
        }
        DecodeTarget::ChannelSubscriptionCreated => {
            KickWebhookEvent::ChannelSubscriptionCreated(parse(body)?)
        }
        DecodeTarget::LivestreamStatusUpdated => {
            KickWebhookEvent::LivestreamStatusUpdated(parse(body)?)
        }
        DecodeTarget::LivestreamMetadataUpdated => {
            KickWebhookEvent::LivestreamMetadataUpdated(parse(body)?)
        }
        DecodeTarget::ModerationBanned => KickWebhookEvent::ModerationBanned(parse(body)?),
        DecodeTarget::KicksGifted => KickWebhookEvent::KicksGifted(parse(body)?),
        DecodeTarget::Generic => KickWebhookEvent::Generic(parse::<Map<String, Value>>(body)?),
    };
    Ok(event)
}
