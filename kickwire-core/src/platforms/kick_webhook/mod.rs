// File: kickwire-core/src/platforms/kick_webhook/mod.rs

pub mod decoder;
pub mod dispatcher;
pub mod envelope;
pub mod events;
pub mod registry;

pub use decoder::decode;
pub use dispatcher::{Verification, WebhookDispatcher, validate_and_parse};
pub use envelope::{EventEnvelope, HeaderNames};
pub use events::KickWebhookEvent;
pub use registry::{CURRENT_SCHEMA_VERSION, DecodeTarget, lookup};
