// File: kickwire-core/src/platforms/kick_webhook/dispatcher.rs

use std::io::Read;

use http::HeaderMap;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

use crate::Error;
use crate::config::WebhookConfig;
use crate::crypto::{WebhookPublicKey, canonical_message, verify_signature};
use super::decoder::decode;
use super::envelope::{EventEnvelope, HeaderNames, header_str, parse_family};
use super::events::KickWebhookEvent;
use super::registry::lookup;

/// Whether the signature check runs before decoding.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Verification {
    #[default]
    Enforce,
    /// Decode without checking the signature. Only compiled into test builds and builds
    /// with the `insecure-skip-verification` feature.
    #[cfg(any(test, feature = "insecure-skip-verification"))]
    Skip,
}

impl Verification {
    pub fn is_enforced(&self) -> bool {
        matches!(self, Verification::Enforce)
    }
}

/// Verifies an envelope against `key` and decodes its body.
///
/// The signature is checked over the raw bytes before the body is interpreted at all;
/// the first failure is returned unchanged.
pub fn validate_and_parse(
    envelope: &EventEnvelope,
    key: &WebhookPublicKey,
    verification: Verification,
) -> Result<KickWebhookEvent, Error> {
    match verification {
        Verification::Enforce => verify_envelope(envelope, key)?,
        #[cfg(any(test, feature = "insecure-skip-verification"))]
        Verification::Skip => {
            warn!(
                "[KickWebhook] signature check skipped for message_id={}",
                envelope.message_id
            );
        }
    }

    let target = lookup(envelope.family, &envelope.version);
    let event = decode(target, &envelope.body)?;

    debug!(
        "[KickWebhook] dispatched {} v{} message_id={} => {}",
        envelope.family, envelope.version, envelope.message_id, target
    );
    Ok(event)
}

fn verify_envelope(envelope: &EventEnvelope, key: &WebhookPublicKey) -> Result<(), Error> {
    check_signature(
        key,
        &envelope.message_id,
        &envelope.timestamp,
        &envelope.body,
        &envelope.signature,
    )
}

fn check_signature(
    key: &WebhookPublicKey,
    message_id: &str,
    timestamp: &str,
    body: &[u8],
    signature: &str,
) -> Result<(), Error> {
    let message = canonical_message(message_id, timestamp, body);
    verify_signature(key, &message, signature).map_err(|e| {
        warn!("[KickWebhook] rejected delivery message_id={}: {}", message_id, e);
        e
    })
}

/// Authenticates and decodes webhook deliveries with one key and header contract.
///
/// Holds no mutable state; clones share the key.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    key: WebhookPublicKey,
    headers: HeaderNames,
    verification: Verification,
}

impl WebhookDispatcher {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            key: config.public_key,
            headers: config.headers,
            verification: config.verification,
        }
    }

    /// Compiled-in Kick key, Kick header names, verification enforced.
    pub fn kick_default() -> Result<Self, Error> {
        Ok(Self::new(WebhookConfig::kick_default()?))
    }

    pub fn public_key(&self) -> &WebhookPublicKey {
        &self.key
    }

    pub fn header_names(&self) -> &HeaderNames {
        &self.headers
    }

    pub fn verification(&self) -> Verification {
        self.verification
    }

    pub fn validate_and_parse(&self, envelope: &EventEnvelope) -> Result<KickWebhookEvent, Error> {
        validate_and_parse(envelope, &self.key, self.verification)
    }

    /// Builds an envelope from an inbound request and dispatches it.
    ///
    /// The family header is checked first, so an unknown family never reaches the body
    /// read or any cryptographic work. The body is read to the end.
    pub fn event_from_request<R: Read>(
        &self,
        headers: &HeaderMap,
        mut body: R,
    ) -> Result<KickWebhookEvent, Error> {
        let family = parse_family(headers, &self.headers)?;

        let mut raw = Vec::new();
        body.read_to_end(&mut raw).map_err(Error::BodyRead)?;

        let envelope = EventEnvelope::with_family(family, headers, &self.headers, raw);
        self.validate_and_parse(&envelope)
    }

    /// Async variant of [`event_from_request`](Self::event_from_request).
    pub async fn event_from_request_async<R: AsyncRead + Unpin>(
        &self,
        headers: &HeaderMap,
        mut body: R,
    ) -> Result<KickWebhookEvent, Error> {
        let family = parse_family(headers, &self.headers)?;

        let mut raw = Vec::new();
        body.read_to_end(&mut raw).await.map_err(Error::BodyRead)?;

        let envelope = EventEnvelope::with_family(family, headers, &self.headers, raw);
        self.validate_and_parse(&envelope)
    }

    /// Signature check only. The family header is not consulted and the body is not decoded.
    pub fn verify_request(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), Error> {
        check_signature(
            &self.key,
            header_str(headers, &self.headers.message_id),
            header_str(headers, &self.headers.timestamp),
            body,
            header_str(headers, &self.headers.signature),
        )
    }
}
