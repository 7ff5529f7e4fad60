use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::shared::application::DEFAULT_PAGE_SIZE;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "ShowTrack/0.1";

const ENV_BASE_URL: &str = "SHOWTRACK_API_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "SHOWTRACK_API_TIMEOUT_SECS";
const ENV_PAGE_SIZE: &str = "SHOWTRACK_PAGE_SIZE";
const ENV_DATA_DIR: &str = "SHOWTRACK_DATA_DIR";

/// Remote catalog settings
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Item count of a full page; a page of this size implies another page follows
    pub page_size: usize,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Local persistence settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory for the file-backed store; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Build configuration from the process environment, loading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut catalog = CatalogConfig::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            catalog = catalog.with_base_url(base_url.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = parse_number::<u64>(ENV_TIMEOUT_SECS, &raw)?;
            catalog = catalog.with_timeout(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            let page_size = parse_number::<usize>(ENV_PAGE_SIZE, &raw)?;
            if page_size == 0 {
                return Err(AppError::ConfigError(format!(
                    "{} must be greater than zero",
                    ENV_PAGE_SIZE
                )));
            }
            catalog = catalog.with_page_size(page_size);
        }

        let storage = StorageConfig {
            data_dir: lookup(ENV_DATA_DIR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(Self { catalog, storage })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::ConfigError(format!("{} is not a valid number: '{}'", key, raw)))
}
