// File: kickwire-core/src/crypto/signature.rs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256};

use crate::Error;
use super::key::WebhookPublicKey;

/// Rebuilds the bytes Kick signed: `message_id.timestamp.body`.
///
/// No escaping is applied. A `.` inside the id or timestamp is passed through as-is,
/// exactly as the sender concatenates it.
pub fn canonical_message(message_id: &str, timestamp: &str, body: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(message_id.len() + timestamp.len() + body.len() + 2);
    message.extend_from_slice(message_id.as_bytes());
    message.push(b'.');
    message.extend_from_slice(timestamp.as_bytes());
    message.push(b'.');
    message.extend_from_slice(body);
    message
}

/// Verifies a base64 (standard alphabet, padded) RSASSA-PKCS1-v1_5 / SHA-256 signature.
///
/// Every cryptographic failure collapses into `Error::SignatureVerification` so callers
/// can't learn which part of the check rejected the input.
pub fn verify_signature(
    key: &WebhookPublicKey,
    message: &[u8],
    signature_b64: &str,
) -> Result<(), Error> {
    let signature = BASE64
        .decode(signature_b64.as_bytes())
        .map_err(|e| Error::SignatureDecode(e.to_string()))?;

    let digest = Sha256::digest(message);

    key.rsa()
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
        .map_err(|_| Error::SignatureVerification)
}
