//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Connection settings for the backend REST API.
pub struct ApiConfig {
    /// Base URL of the API, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}
