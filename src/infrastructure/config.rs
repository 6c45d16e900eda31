use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL all API endpoints are resolved against.
    pub api_base_url: String,
    /// Substitute the fixture-backed mock client for the REST client.
    pub use_mock: bool,
    pub mock_latency_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            use_mock: std::env::var("USE_MOCK_API")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.use_mock),
            mock_latency_ms: std::env::var("MOCK_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mock_latency_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            use_mock: false,
            mock_latency_ms: 500,
        }
    }
}
