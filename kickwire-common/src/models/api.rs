// File: kickwire-common/src/models/api.rs
//
// Envelope conventions shared by every Kick REST call. The endpoint wrappers live outside
// this workspace; they hand the raw status + body to `decode_api_response`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;

/// `{ "message": "...", "data": ... }`
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Payload type for calls that answer `204 No Content`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct EmptyResponse {}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: String,
}

/// Turns a raw HTTP status + body into the typed envelope.
///
/// - `status == expected_status` with an empty body yields an envelope with no data.
/// - `status == expected_status` otherwise must parse as `ApiResponse<T>`.
/// - Any other status becomes `Error::Api` carrying the status and the envelope message
///   (or the raw body text when the error body isn't an envelope).
pub fn decode_api_response<T: DeserializeOwned>(
    status: u16,
    expected_status: u16,
    body: &[u8],
) -> Result<ApiResponse<T>, Error> {
    if status != expected_status {
        let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.message,
            Err(_) => String::from_utf8_lossy(body).trim().to_string(),
        };
        return Err(Error::Api { code: status, message });
    }

    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(ApiResponse { message: String::new(), data: None });
    }

    serde_json::from_slice::<ApiResponse<T>>(body).map_err(|e| {
        Error::PayloadDecode(format!(
            "failed to unmarshal response body (status {} and body {:?}): {}",
            status,
            String::from_utf8_lossy(body),
            e
        ))
    })
}
