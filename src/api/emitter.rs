//! Response Emitter
//!
//! Writes artifact bytes to the client with the caching and encoding headers
//! the combiner endpoint has always sent.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use chrono::Utc;

use crate::cache::ARTIFACT_TTL;

/// Content type identifying executable script content.
pub const SCRIPT_CONTENT_TYPE: &str = "application/x-javascript";

// == Emit Artifact ==
/// Builds the 200 response for an artifact.
///
/// `Content-Encoding` is `gzip` for the compressed variant and the literal
/// token `utf-8` otherwise. The latter is not a valid encoding per RFC 9110;
/// it is reproduced verbatim for compatibility with existing clients.
/// Cache directives advertise the same 30-day lifetime the server-side
/// store uses.
pub fn emit_artifact(bytes: Bytes, compressed: bool) -> Response {
    let max_age = ARTIFACT_TTL.as_secs();
    let expires = Utc::now() + chrono::Duration::seconds(max_age as i64);

    let headers = [
        (header::CONTENT_TYPE, SCRIPT_CONTENT_TYPE.to_string()),
        (header::CONTENT_LENGTH, bytes.len().to_string()),
        (
            header::CONTENT_ENCODING,
            if compressed { "gzip" } else { "utf-8" }.to_string(),
        ),
        (header::CACHE_CONTROL, format!("public, max-age={}", max_age)),
        (
            header::EXPIRES,
            expires.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        ),
    ];

    (StatusCode::OK, headers, Body::from(bytes)).into_response()
}
