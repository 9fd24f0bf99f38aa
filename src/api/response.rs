// src/api/response.rs
use crate::error::{PayoffError, PayoffResult};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Longest body excerpt kept in a [`PayoffError::HttpStatus`] error
const BODY_EXCERPT_CHARS: usize = 512;

/// Validate a backend reply at the boundary
///
/// - `401` means the session is gone: [`PayoffError::Unauthorized`].
///   Tearing the session down is the caller's job.
/// - Any other status outside `200..300` becomes [`PayoffError::HttpStatus`].
/// - A success body that does not match `T` becomes
///   [`PayoffError::MalformedResponse`]; nothing partially decoded escapes.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> PayoffResult<T> {
    if status == 401 {
        warn!("backend rejected session credentials");
        return Err(PayoffError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        warn!(status, "backend returned error status");
        return Err(PayoffError::HttpStatus {
            status,
            body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
        });
    }

    let value: T = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "backend body does not match schema");
        PayoffError::MalformedResponse {
            reason: e.to_string(),
        }
    })?;

    debug!(status, bytes = body.len(), "decoded backend response");
    Ok(value)
}

/// Serialize a request body
pub fn encode_request<T: serde::Serialize>(body: &T) -> PayoffResult<String> {
    serde_json::to_string(body).map_err(|e| PayoffError::InvalidConfiguration {
        field: "request body".to_string(),
        reason: e.to_string(),
    })
}
