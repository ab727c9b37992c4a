// File: kickwire-core/src/platforms/mod.rs

pub mod kick_webhook;
