// ================================================================
// File: kickwire-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Webhook dispatch stages:
    #[error("Unknown event family: {0}")]
    UnknownEventFamily(String),

    #[error("Failed to read body: {0}")]
    BodyRead(#[source] std::io::Error),

    #[error("Failed to decode public key: {0}")]
    KeyDecode(String),

    #[error("Unexpected public key type: {0}")]
    KeyType(String),

    #[error("Failed to parse public key: {0}")]
    KeyParse(String),

    #[error("Failed to decode signature: {0}")]
    SignatureDecode(String),

    /// Carries no detail about which check failed.
    #[error("Failed to verify signature")]
    SignatureVerification,

    #[error("Failed to decode event payload: {0}")]
    PayloadDecode(String),

    // REST conventions shared with the API wrappers:
    #[error("API error (status {code}): {message}")]
    Api { code: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown scope: {0}")]
    UnknownScope(String),
}

impl Error {
    /// Short name of the stage that produced this error, suitable for logs and metrics labels.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::UnknownEventFamily(_) => "event_family",
            Error::BodyRead(_) => "body_read",
            Error::KeyDecode(_) | Error::KeyType(_) | Error::KeyParse(_) => "public_key",
            Error::SignatureDecode(_) | Error::SignatureVerification => "signature",
            Error::PayloadDecode(_) => "payload",
            Error::Api { .. } => "api",
            Error::Json(_) => "json",
            Error::Io(_) => "io",
            Error::Config(_) => "config",
            Error::UnknownScope(_) => "scope",
        }
    }

    /// True when the request must be treated as forged rather than merely malformed.
    pub fn is_security_event(&self) -> bool {
        matches!(self, Error::SignatureDecode(_) | Error::SignatureVerification)
    }

    /// Key material faults are configuration problems and should stop startup.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::KeyDecode(_) | Error::KeyType(_) | Error::KeyParse(_))
    }
}
