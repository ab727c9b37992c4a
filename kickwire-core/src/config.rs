// File: kickwire-core/src/config.rs

use tracing::info;

use crate::Error;
use crate::crypto::{WebhookPublicKey, load_public_key, load_public_key_file};
use crate::platforms::kick_webhook::{HeaderNames, Verification};

pub const ENV_PUBLIC_KEY_PATH: &str = "KICKWIRE_PUBLIC_KEY_PATH";
pub const ENV_PUBLIC_KEY: &str = "KICKWIRE_PUBLIC_KEY";
pub const ENV_HEADERS: &str = "KICKWIRE_HEADERS";

/// Key and header contract a dispatcher is built from.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub public_key: WebhookPublicKey,
    pub headers: HeaderNames,
    pub verification: Verification,
}

impl WebhookConfig {
    /// Compiled-in Kick key, Kick header names, verification enforced.
    pub fn kick_default() -> Result<Self, Error> {
        Ok(Self {
            public_key: WebhookPublicKey::kick_default()?,
            headers: HeaderNames::kick(),
            verification: Verification::Enforce,
        })
    }

    /// Reads overrides from the process environment.
    ///
    /// `KICKWIRE_PUBLIC_KEY_PATH` wins over `KICKWIRE_PUBLIC_KEY`. Unset or empty
    /// variables leave the defaults in place.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::kick_default()?;

        if let Some(path) = var(ENV_PUBLIC_KEY_PATH) {
            config = config.with_public_key(load_public_key_file(path.trim())?);
            info!("[WebhookConfig] using public key from {}={}", ENV_PUBLIC_KEY_PATH, path.trim());
        } else if let Some(pem) = var(ENV_PUBLIC_KEY) {
            config = config.with_public_key(load_public_key(pem.as_bytes())?);
            info!("[WebhookConfig] using inline public key from {}", ENV_PUBLIC_KEY);
        }

        if let Some(preset) = var(ENV_HEADERS) {
            config = config.with_headers(HeaderNames::from_preset(&preset)?);
            if !config.headers.is_kick() {
                info!("[WebhookConfig] using '{}' header names", preset.trim());
            }
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_public_key(mut self, key: WebhookPublicKey) -> Self {
        self.public_key = key;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderNames) -> Self {
        self.headers = headers;
        self
    }

    #[cfg(any(test, feature = "insecure-skip-verification"))]
    #[must_use]
    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }
}
