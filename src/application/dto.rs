//! Request and response shapes for the lifecycle service.
//!
//! Field names serialize in camelCase to match the public JSON API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Metadata, ShortUrl};

/// Request to create a short URL.
///
/// An empty or missing `custom_url` selects a generated identifier.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    #[serde(default)]
    pub long_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Metadata>,
}

impl CreateShortUrlRequest {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_url(mut self, custom_url: impl Into<String>) -> Self {
        self.custom_url = Some(custom_url.into());
        self
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.user_metadata = Some(metadata);
        self
    }
}

/// Result of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_url: String,
}

/// Request to resolve a short URL back to its long URL.
///
/// `user_metadata` carries request context (client IP, user agent, referer)
/// into the `url_accessed` analytics event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    #[serde(default)]
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Metadata>,
}

impl ResolveRequest {
    pub fn new(short_url: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            user_metadata: None,
        }
    }
}

/// Full view of a stored short URL, used for listing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub id: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Metadata>,
}

impl From<&ShortUrl> for ShortUrlResponse {
    fn from(url: &ShortUrl) -> Self {
        Self {
            id: url.id().to_string(),
            long_url: url.long_url().to_string(),
            short_url: url.short_url().to_string(),
            created_at: url.created_at(),
            expiry: url.expiry(),
            is_active: url.is_active(),
            user_metadata: url.metadata().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_from_json() {
        let req: CreateShortUrlRequest = serde_json::from_value(json!({
            "longUrl": "https://example.com",
            "customUrl": "promo",
            "expiry": "2030-01-01T00:00:00Z",
            "userMetadata": { "userId": "user123" }
        }))
        .unwrap();

        assert_eq!(req.long_url, "https://example.com");
        assert_eq!(req.custom_url.as_deref(), Some("promo"));
        assert!(req.expiry.is_some());
        assert_eq!(req.user_metadata.unwrap()["userId"], "user123");
    }

    #[test]
    fn test_create_request_missing_fields_default() {
        let req: CreateShortUrlRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.long_url.is_empty());
        assert!(req.custom_url.is_none());
    }

    #[test]
    fn test_short_url_response_shape() {
        let url = ShortUrl::new("abc1234", "https://example.com", "http://t.com/abc1234", None, None)
            .unwrap();
        let value = serde_json::to_value(ShortUrlResponse::from(&url)).unwrap();

        assert_eq!(value["id"], "abc1234");
        assert_eq!(value["longUrl"], "https://example.com");
        assert_eq!(value["shortUrl"], "http://t.com/abc1234");
        assert_eq!(value["isActive"], true);
        assert!(value["createdAt"].is_string());
        assert!(value.get("expiry").is_none());
        assert!(value.get("userMetadata").is_none());
    }
}
