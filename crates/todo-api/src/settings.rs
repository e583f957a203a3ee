use serde::Deserialize;

/// HTTP contract switches
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Answer failed mutations, and update/delete of an absent id, with
    /// HTTP 200 and a business error code, which is what existing clients
    /// expect. When off, they answer HTTP 500 and 404 respectively.
    pub legacy_status_codes: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            legacy_status_codes: true,
        }
    }
}
