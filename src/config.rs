use std::path::PathBuf;
use std::time::Duration;

use crate::ui::notifier::DEFAULT_HIDE_AFTER;

pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// Host header for setups where one local ingress routes by host name.
    pub api_host_header: Option<String>,
    /// Upper bound for one request to the activities API.
    pub api_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub message_hide_after: Duration,
    pub static_dir: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Bad numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_base_url: non_empty("ACTIVITIES_API_URL")
                .unwrap_or_else(|| "http://127.0.0.1:8000".to_string()),
            api_host_header: non_empty("ACTIVITIES_API_HOST"),
            api_timeout: non_empty("ACTIVITIES_API_TIMEOUT_MS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms: &u64| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_API_TIMEOUT),
            host: non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: non_empty("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(3000),
            message_hide_after: non_empty("MESSAGE_HIDE_MS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_HIDE_AFTER),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
        }
    }
}
