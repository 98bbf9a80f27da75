//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default backend base address, matching the development server
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5001/api";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base URL of the resolution/download server
    pub server_url: String,

    /// Directory downloads are saved into
    pub download_dir: PathBuf,

    /// Timeout for metadata resolution requests (seconds)
    pub resolve_timeout_secs: u64,

    /// Timeout for a whole download request (seconds)
    pub download_timeout_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from("./downloads")),
            resolve_timeout_secs: 30,
            download_timeout_secs: 1800,
        }
    }
}

impl AppSettings {
    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(!config.server_url.is_empty());
        assert!(config.resolve_timeout_secs > 0);
        assert!(config.download_timeout_secs > config.resolve_timeout_secs);
    }
}
