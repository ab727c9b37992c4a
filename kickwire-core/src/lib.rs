// src/lib.rs

pub mod config;
pub mod crypto;
pub mod platforms;

pub use kickwire_common::error::Error;
pub use kickwire_common::models::EventFamily;
pub use config::WebhookConfig;
pub use crypto::{WebhookPublicKey, canonical_message, load_public_key, verify_signature};
pub use platforms::kick_webhook::{
    EventEnvelope, HeaderNames, KickWebhookEvent, Verification, WebhookDispatcher,
    validate_and_parse,
};
