//! Connection settings, read from the environment (after `.env`) and
//! overridable from the command line.

use std::time::Duration;

use passengers_lib::passengers_api::Client;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PASSENGERS_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(env_u64("PASSENGERS_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
        }
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<&str>, timeout_secs: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    pub fn client(&self) -> Client {
        Client::with_base_url_and_timeout(&self.base_url, self.timeout)
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}
