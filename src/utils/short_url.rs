//! Helpers for building short URLs and pulling identifiers back out of them.

/// Joins a base URL and an identifier with exactly one `/` between them.
pub fn build_short_url(base_url: &str, id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}

/// Extracts the identifier from a short URL.
///
/// The identifier is the final `/`-separated segment, so a bare identifier
/// (as used by custom short URLs) is returned as-is.
pub fn extract_id(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or(short_url)
}
