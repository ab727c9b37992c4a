// File: kickwire-core/src/crypto/mod.rs

pub mod key;
pub mod signature;

pub use key::{KICK_PUBLIC_KEY_PEM, WebhookPublicKey, load_public_key, load_public_key_file};
pub use signature::{canonical_message, verify_signature};
