use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Runtime environment first, then values baked in at compile time (the
    /// only source available in the browser), then defaults.
    pub fn from_env() -> Self {
        let base_url = layered(
            env_string("SATZBAU_API_BASE_URL"),
            option_env!("SATZBAU_API_BASE_URL"),
        )
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_ms = layered(
            env_string("SATZBAU_API_TIMEOUT_MS"),
            option_env!("SATZBAU_API_TIMEOUT_MS"),
        )
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_MS);

        let log_level = layered(env_string("RUST_LOG"), option_env!("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_millis(timeout_ms),
            log_level,
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// A runtime value wins over the same variable captured at compile time.
fn layered(runtime: Option<String>, compiled: Option<&'static str>) -> Option<String> {
    runtime.or_else(|| {
        compiled
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}
