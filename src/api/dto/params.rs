//! Query string parameters.

use serde::Deserialize;

/// `GET /v1/getLongUrl?shortUrl=...`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLongUrlParams {
    #[serde(default)]
    pub short_url: String,
}

/// `DELETE /admin/deactivate?id=...`
#[derive(Debug, Default, Deserialize)]
pub struct DeactivateParams {
    #[serde(default)]
    pub id: String,
}
