use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Host configuration, resolved once at startup and passed explicitly into
/// the poller and gateway constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub poll_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `RADAR_INTERVAL` is milliseconds; anything unparsable falls back to
    /// the default so a hosting misconfiguration cannot kill the poller.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup("SENTINEL_BACKEND_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let poll_interval = lookup("RADAR_INTERVAL")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));

        Self {
            backend_url,
            poll_interval,
        }
    }
}
