// Client for the MEV analytics API.
//
// A separate upstream with plain JSON responses (no envelope) and no
// authentication. This is the only surface with a retry policy: a fixed
// attempt count, no backoff — transient failures on a public analytics
// feed are common enough to paper over, and staleness is tolerated for
// minutes anyway.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types::{MevBlockResponse, MevTransactionResponse};

pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Async client for the MEV analytics API.
pub struct AnalyticsClient {
    http: reqwest::Client,
    base_url: Url,
    retry_attempts: u32,
}

impl AnalyticsClient {
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        Ok(Self {
            http,
            base_url,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        })
    }

    /// Override the fixed retry count (mostly for tests).
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts.max(1);
        self
    }

    fn url(&self, path: &str) -> Url {
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    /// GET with the fixed-count retry policy.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);

        let mut attempt = 1;
        loop {
            debug!("GET {url} (attempt {attempt}/{})", self.retry_attempts);

            match self.fetch(url.clone(), params).await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.retry_attempts => {
                    debug!(error = %e, "transient analytics failure, retrying");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let resp = self.http.get(url).query(params).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Analytics {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body[..body.len().min(200)].to_owned()
                },
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    // ── Endpoints ────────────────────────────────────────────────────

    pub async fn list_blocks(&self, limit: u32) -> Result<Vec<MevBlockResponse>, Error> {
        self.get("blocks", &[("limit", limit.to_string())]).await
    }

    pub async fn get_block(&self, number: u64) -> Result<MevBlockResponse, Error> {
        self.get(&format!("blocks/{number}"), &[]).await
    }

    pub async fn list_transactions(
        &self,
        limit: u32,
    ) -> Result<Vec<MevTransactionResponse>, Error> {
        self.get("transactions", &[("limit", limit.to_string())])
            .await
    }

    pub async fn get_transaction(&self, hash: &str) -> Result<MevTransactionResponse, Error> {
        self.get(&format!("transactions/{hash}"), &[]).await
    }
}
