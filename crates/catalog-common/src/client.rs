use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Clone, Debug)]
pub struct CatalogClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl CatalogClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(30),
            max_error_body_bytes: 8 * 1024,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// One listing entry: a name plus the link to its full detail record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummaryRecord {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_url: String,
}

/// A single page of the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingPage {
    /// Total entries the server reports, when it reports one.
    pub count: Option<u64>,
    pub results: Vec<SummaryRecord>,
}

/// HTTP client for a paginated listing endpoint and its per-entry detail URLs.
///
/// Clones share the same connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    config: CatalogClientConfig,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(config: CatalogClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent("pokedex-report/0.1")
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &CatalogClientConfig {
        &self.config
    }

    /// `GET {base_url}?offset=O&limit=L`.
    pub async fn list_page(&self, offset: u64, limit: u64) -> Result<ListingPage, ClientError> {
        debug!(offset, limit, "requesting listing page");
        let resp = self
            .http
            .get(&self.config.base_url)
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await?;
        self.parse_json_response(resp).await
    }

    /// Fetch a detail record as untyped JSON. Shape checks are left to the caller.
    pub async fn get_detail(&self, url: &str) -> Result<serde_json::Value, ClientError> {
        let resp = self.http.get(url).send().await?;
        self.parse_json_response(resp).await
    }

    /// Decode a success body as JSON; anything else becomes `Upstream` carrying
    /// at most `max_error_body_bytes` of the body for the log line.
    async fn parse_json_response<T: for<'de> Deserialize<'de>>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body = match resp.bytes().await {
            Ok(bytes) => {
                let keep = bytes.len().min(self.config.max_error_body_bytes);
                String::from_utf8_lossy(&bytes[..keep]).into_owned()
            }
            Err(e) => {
                warn!(%status, error = %e, "error body unreadable");
                String::new()
            }
        };
        Err(ClientError::Upstream { status, body })
    }
}
