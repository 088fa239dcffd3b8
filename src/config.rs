use crate::error::{Result, SearchError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ES_URL: &str = "http://localhost:9200";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime configuration, loaded from `COMPANYSEARCH_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Elasticsearch node, e.g. `http://localhost:9200`.
    pub es_url: String,
    /// Optional basic-auth credentials for the engine.
    pub es_username: Option<String>,
    pub es_password: Option<String>,
    /// Per-request timeout for engine calls.
    pub es_timeout: Duration,
    /// Re-seed the fixture even when an index already holds documents.
    pub force_seed: bool,
    pub bind_addr: String,
    /// Directory holding `index_settings.json` and `MOCK_DATA.json`.
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            es_url: DEFAULT_ES_URL.to_string(),
            es_username: None,
            es_password: None,
            es_timeout: Duration::from_secs(10),
            force_seed: false,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl AppConfig {
    /// Load config from environment variables with sensible defaults.
    ///
    /// Fails only when the engine URL is not an http(s) URL.
    pub fn from_env() -> Result<Self> {
        let es_url = std::env::var("COMPANYSEARCH_ES_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ES_URL.to_string());

        if !es_url.starts_with("http://") && !es_url.starts_with("https://") {
            return Err(SearchError::Config(format!(
                "COMPANYSEARCH_ES_URL must be an http(s) URL, got: {}",
                es_url
            )));
        }

        Ok(Self {
            es_url: es_url.trim_end_matches('/').to_string(),
            es_username: std::env::var("COMPANYSEARCH_ES_USERNAME")
                .ok()
                .filter(|v| !v.is_empty()),
            es_password: std::env::var("COMPANYSEARCH_ES_PASSWORD").ok(),
            es_timeout: Duration::from_secs(
                std::env::var("COMPANYSEARCH_ES_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            force_seed: std::env::var("COMPANYSEARCH_FORCE_SEED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            bind_addr: std::env::var("COMPANYSEARCH_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            static_dir: PathBuf::from(
                std::env::var("COMPANYSEARCH_STATIC_DIR").unwrap_or_else(|_| "./static".into()),
            ),
        })
    }

    pub fn settings_path(&self) -> PathBuf {
        self.static_dir.join("index_settings.json")
    }

    pub fn fixture_path(&self) -> PathBuf {
        self.static_dir.join("MOCK_DATA.json")
    }
}
