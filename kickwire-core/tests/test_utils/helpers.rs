// File: kickwire-core/tests/test_utils/helpers.rs
#![allow(dead_code)]

use std::io::{self, Read};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use http::{HeaderMap, HeaderValue};
use once_cell::sync::Lazy;
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

use kickwire_core::{
    EventEnvelope, EventFamily, HeaderNames, WebhookConfig, WebhookDispatcher, WebhookPublicKey,
    canonical_message,
};

pub const MESSAGE_ID: &str = "01JHSV0V8T8GZQK8TPHQF2XXAB";
pub const TIMESTAMP: &str = "2025-02-21T23:23:36Z";

/// Generated once per test binary; keygen is slow in debug builds.
pub static SIGNING_KEY: Lazy<RsaPrivateKey> =
    Lazy::new(|| RsaPrivateKey::new(&mut OsRng, 1024).expect("generate test signing key"));

pub fn test_public_key() -> WebhookPublicKey {
    WebhookPublicKey::from_rsa(SIGNING_KEY.to_public_key())
}

/// A dispatcher that trusts the test signing key, with Kick header names.
pub fn test_dispatcher() -> WebhookDispatcher {
    test_dispatcher_with(HeaderNames::kick())
}

pub fn test_dispatcher_with(headers: HeaderNames) -> WebhookDispatcher {
    let config = WebhookConfig::kick_default()
        .expect("default config")
        .with_public_key(test_public_key())
        .with_headers(headers);
    WebhookDispatcher::new(config)
}

/// Signs `message_id.timestamp.body` the way Kick does.
pub fn sign(message_id: &str, timestamp: &str, body: &[u8]) -> String {
    let digest = Sha256::digest(canonical_message(message_id, timestamp, body));
    let signature = SIGNING_KEY
        .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
        .expect("sign test message");
    BASE64.encode(signature)
}

pub fn signed_envelope(family: EventFamily, version: &str, body: &str) -> EventEnvelope {
    EventEnvelope::new(
        family,
        version,
        sign(MESSAGE_ID, TIMESTAMP, body.as_bytes()),
        MESSAGE_ID,
        TIMESTAMP,
        body,
    )
}

/// Request headers for a signed delivery of `body`, using the given header names.
pub fn signed_headers(names: &HeaderNames, family: &str, version: &str, body: &[u8]) -> HeaderMap {
    let signature = sign(MESSAGE_ID, TIMESTAMP, body);
    let mut headers = HeaderMap::new();
    for (name, value) in [
        (names.family.as_str(), family),
        (names.version.as_str(), version),
        (names.signature.as_str(), signature.as_str()),
        (names.message_id.as_str(), MESSAGE_ID),
        (names.timestamp.as_str(), TIMESTAMP),
    ] {
        headers.insert(
            http::header::HeaderName::from_bytes(name.as_bytes()).expect("header name"),
            HeaderValue::from_str(value).expect("header value"),
        );
    }
    headers
}

/// A reader that fails on the first read.
pub struct FaultyReader;

impl Read for FaultyReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
    }
}

/// A reader that panics if touched; used to prove nothing read the body.
pub struct UntouchedReader;

impl Read for UntouchedReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        panic!("body should not have been read");
    }
}

pub const CHAT_MESSAGE_BODY: &str = r#"{"message_id":"bb9832e4-e865-48f4-a0c3-392f78bf3b1a","broadcaster":{"is_anonymous":false,"user_id":721956,"username":"Scorfly","is_verified":false,"profile_picture":"https://files.kick.com/images/user/721956/profile_image/conversion/44a9f1fb-0498-47b5-820e-ef9399fd23d4-fullsize.webp","channel_slug":"scorfly"},"sender":{"is_anonymous":false,"user_id":721956,"username":"Scorfly","is_verified":false,"profile_picture":"https://files.kick.com/images/user/721956/profile_image/conversion/44a9f1fb-0498-47b5-820e-ef9399fd23d4-fullsize.webp","channel_slug":"scorfly"},"content":"coucou","emotes":null}"#;

pub const KICKS_GIFTED_BODY: &str = r#"{
    "broadcaster": {
        "user_id": 123456789,
        "username": "broadcaster_name",
        "is_verified": true,
        "profile_picture": "https://example.com/broadcaster_avatar.jpg",
        "channel_slug": "broadcaster_channel"
    },
    "sender": {
        "user_id": 987654321,
        "username": "gift_sender",
        "is_verified": false,
        "profile_picture": "https://example.com/sender_avatar.jpg",
        "channel_slug": "gift_sender_channel"
    },
    "gift": {
        "amount": 100,
        "name": "Full Send",
        "type": "BASIC",
        "tier": "BASIC",
        "message": "w"
    },
    "created_at": "2025-10-20T04:00:08.634Z"
}"#;

/// A broadcaster block every family carries; lets each family test check the same fields.
pub const BROADCASTER_JSON: &str = r#"{"is_anonymous":false,"user_id":721956,"username":"Scorfly","is_verified":true,"profile_picture":"","channel_slug":"scorfly"}"#;
