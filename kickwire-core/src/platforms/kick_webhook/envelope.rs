// File: kickwire-core/src/platforms/kick_webhook/envelope.rs

use std::str::FromStr;

use http::HeaderMap;
use kickwire_common::models::EventFamily;

use crate::Error;

/// Names of the inbound headers that carry the envelope fields.
///
/// Lookups through `http::HeaderMap` are case-insensitive, so the casing here is cosmetic.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HeaderNames {
    pub family: String,
    pub version: String,
    pub signature: String,
    pub message_id: String,
    pub timestamp: String,
}

impl HeaderNames {
    /// The header set Kick documents for its webhooks.
    pub fn kick() -> Self {
        Self {
            family: "Kick-Event-Type".to_string(),
            version: "Kick-Event-Version".to_string(),
            signature: "Kick-Event-Signature".to_string(),
            message_id: "Kick-Event-Message-Id".to_string(),
            timestamp: "Kick-Event-Message-Timestamp".to_string(),
        }
    }

    /// Header set used by older client integrations.
    pub fn legacy() -> Self {
        Self {
            family: "X-Event-Subscription".to_string(),
            version: "X-Event-Version".to_string(),
            signature: "X-Event-Signature".to_string(),
            message_id: "X-Event-Message-Id".to_string(),
            timestamp: "X-Event-Timestamp".to_string(),
        }
    }

    /// `"kick"` or `"legacy"`, case-insensitive.
    pub fn from_preset(name: &str) -> Result<Self, Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "kick" => Ok(Self::kick()),
            "legacy" => Ok(Self::legacy()),
            other => Err(Error::Config(format!(
                "unknown header preset '{}' (expected 'kick' or 'legacy')",
                other
            ))),
        }
    }

    pub fn is_kick(&self) -> bool {
        *self == Self::kick()
    }
}

impl Default for HeaderNames {
    fn default() -> Self {
        Self::kick()
    }
}

/// One inbound notification: routing fields from the headers plus the raw body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEnvelope {
    pub family: EventFamily,
    pub version: String,
    pub signature: String,
    pub message_id: String,
    pub timestamp: String,
    pub body: Vec<u8>,
}

impl EventEnvelope {
    pub fn new(
        family: EventFamily,
        version: impl Into<String>,
        signature: impl Into<String>,
        message_id: impl Into<String>,
        timestamp: impl Into<String>,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            family,
            version: version.into(),
            signature: signature.into(),
            message_id: message_id.into(),
            timestamp: timestamp.into(),
            body: body.into(),
        }
    }

    /// Builds an envelope from request headers.
    ///
    /// Missing or non-UTF-8 headers read as empty. The family header is parsed here, so an
    /// unknown or absent family fails with `UnknownEventFamily` before anything else runs.
    pub fn from_headers(
        headers: &HeaderMap,
        names: &HeaderNames,
        body: impl Into<Vec<u8>>,
    ) -> Result<Self, Error> {
        let family = parse_family(headers, names)?;
        Ok(Self::with_family(family, headers, names, body.into()))
    }

    /// Same as `from_headers` for a family the caller has already parsed.
    pub(crate) fn with_family(
        family: EventFamily,
        headers: &HeaderMap,
        names: &HeaderNames,
        body: Vec<u8>,
    ) -> Self {
        Self {
            family,
            version: header_str(headers, &names.version).to_string(),
            signature: header_str(headers, &names.signature).to_string(),
            message_id: header_str(headers, &names.message_id).to_string(),
            timestamp: header_str(headers, &names.timestamp).to_string(),
            body,
        }
    }
}

pub(crate) fn parse_family(headers: &HeaderMap, names: &HeaderNames) -> Result<EventFamily, Error> {
    EventFamily::from_str(header_str(headers, &names.family))
}

pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn kick_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("kick-event-type", HeaderValue::from_static("channel.followed"));
        headers.insert("kick-event-version", HeaderValue::from_static("1"));
        headers.insert("kick-event-signature", HeaderValue::from_static("c2ln"));
        headers.insert("kick-event-message-id", HeaderValue::from_static("01JH"));
        headers.insert(
            "kick-event-message-timestamp",
            HeaderValue::from_static("2025-01-14T16:08:06Z"),
        );
        headers
    }

    #[test]
    fn test_from_headers_reads_every_field() {
        let env = EventEnvelope::from_headers(&kick_headers(), &HeaderNames::kick(), b"{}".to_vec())
            .unwrap();
        assert_eq!(env.family, EventFamily::ChannelFollowed);
        assert_eq!(env.version, "1");
        assert_eq!(env.signature, "c2ln");
        assert_eq!(env.message_id, "01JH");
        assert_eq!(env.timestamp, "2025-01-14T16:08:06Z");
        assert_eq!(env.body, b"{}");
    }

    #[test]
    fn test_missing_headers_read_as_empty() {
        let mut headers = HeaderMap::new();
        headers.insert("kick-event-type", HeaderValue::from_static("kicks.gifted"));
        headers.insert(
            "kick-event-signature",
            HeaderValue::from_bytes(b"\xffbad").unwrap(),
        );

        let env = EventEnvelope::from_headers(&headers, &HeaderNames::kick(), Vec::new()).unwrap();
        assert_eq!(env.version, "");
        assert_eq!(env.signature, "");
        assert_eq!(env.message_id, "");
    }

    #[test]
    fn test_missing_family_fails_closed() {
        let err = EventEnvelope::from_headers(&HeaderMap::new(), &HeaderNames::kick(), Vec::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEventFamily(ref f) if f.is_empty()));
    }

    #[test]
    fn test_legacy_preset_ignores_kick_headers() {
        let err = EventEnvelope::from_headers(&kick_headers(), &HeaderNames::legacy(), Vec::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEventFamily(_)));
    }

    #[test]
    fn test_presets() {
        assert_eq!(HeaderNames::from_preset("Kick").unwrap(), HeaderNames::kick());
        assert_eq!(HeaderNames::from_preset("legacy").unwrap(), HeaderNames::legacy());
        assert!(HeaderNames::default().is_kick());
        assert!(matches!(HeaderNames::from_preset("twitch"), Err(Error::Config(_))));
    }
}
