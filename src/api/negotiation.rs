//! Content Negotiation
//!
//! Decides between the plain and gzip artifact variants from the client's
//! `Accept-Encoding` header.

// == Should Compress ==
/// Returns true iff the header is non-empty and contains the token `gzip`
/// or `deflate`.
///
/// Deliberately a case-sensitive substring check with no q-value parsing,
/// matching the client convention this endpoint has always served. A client
/// that only offers `deflate` still receives gzip.
pub fn should_compress(accept_encoding: Option<&str>) -> bool {
    match accept_encoding {
        Some(value) if !value.is_empty() => value.contains("gzip") || value.contains("deflate"),
        _ => false,
    }
}
