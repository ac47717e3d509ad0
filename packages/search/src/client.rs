//! HTTP client for the CNPJá registry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};

/// Raw HTTP answer, before any interpretation of the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty when unknown.
    pub reason: String,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for registry clients, enabling mocking in tests.
///
/// Implementations return `Err` only for transport failures; any status the
/// server answers with comes back as an [`HttpReply`].
#[async_trait]
pub trait RegistryApi: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpReply>;
}

/// CNPJá API client.
///
/// NOTE: Do NOT derive `Debug` on this struct, `api_key` would be exposed.
pub struct CnpjaClient {
    http: reqwest::Client,
    api_key: String,
}

impl CnpjaClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
        })
    }
}

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("cnpj-search/", env!("CARGO_PKG_VERSION"));

#[async_trait]
impl RegistryApi for CnpjaClient {
    async fn get(&self, url: &Url) -> Result<HttpReply> {
        let resp = self
            .http
            .get(url.as_str())
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "registry request failed");
                SearchError::Network(e)
            })?;

        let status = resp.status();
        debug!(status = status.as_u16(), "registry responded");

        let body = resp.text().await?;

        Ok(HttpReply {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
