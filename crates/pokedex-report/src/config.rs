use std::time::Duration;

use catalog_common::client::{CatalogClientConfig, DEFAULT_BASE_URL};

use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: u64 = 1000;
pub const DEFAULT_MAX_CONCURRENCY: usize = 32;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Run configuration.
///
/// Every value has a built-in default, so running with an empty environment
/// reports on the full public Pokédex.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing endpoint, e.g. "https://pokeapi.co/api/v2/pokemon".
    pub base_url: String,
    /// Entries requested per listing page. A shorter page ends pagination.
    pub page_size: u64,
    /// Offset of the first listing page.
    pub start_offset: u64,
    /// Upper bound on detail requests in flight at once.
    pub max_concurrency: usize,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            start_offset: 0,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `POKEDEX_BASE_URL`
    /// - `POKEDEX_PAGE_SIZE` (default: 1000, must be > 0)
    /// - `POKEDEX_START_OFFSET` (default: 0)
    /// - `POKEDEX_MAX_CONCURRENCY` (default: 32, must be > 0)
    /// - `POKEDEX_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let base_url = lookup("POKEDEX_BASE_URL").unwrap_or(defaults.base_url);
        if base_url.trim().is_empty() {
            return Err(AppError::Config("POKEDEX_BASE_URL must not be empty".to_string()));
        }

        let page_size = parse_var(&lookup, "POKEDEX_PAGE_SIZE")?.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(AppError::Config("POKEDEX_PAGE_SIZE must be greater than 0".to_string()));
        }

        let start_offset =
            parse_var(&lookup, "POKEDEX_START_OFFSET")?.unwrap_or(defaults.start_offset);

        let max_concurrency =
            parse_var(&lookup, "POKEDEX_MAX_CONCURRENCY")?.unwrap_or(defaults.max_concurrency);
        if max_concurrency == 0 {
            return Err(AppError::Config(
                "POKEDEX_MAX_CONCURRENCY must be greater than 0".to_string(),
            ));
        }

        let request_timeout = parse_var::<u64>(&lookup, "POKEDEX_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Ok(Self {
            base_url,
            page_size,
            start_offset,
            max_concurrency,
            request_timeout,
        })
    }

    pub fn client_config(&self) -> CatalogClientConfig {
        CatalogClientConfig::new(&self.base_url).with_timeout(self.request_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, AppError> {
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| AppError::Config(format!("{key} is not a valid number: {raw:?}")))
        })
        .transpose()
}
