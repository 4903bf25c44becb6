// Hand-crafted async HTTP client for the rental backend.
//
// Base path: /api/v1/
// Auth: bearer access token + `accessToken` cookie
//
// Wraps `reqwest::Client` with URL construction and envelope unwrapping.
// All resource endpoints (guests, homes, contracts, etc.) are implemented
// as inherent methods in the `endpoints` modules to keep this file focused
// on transport mechanics.

use secrecy::SecretString;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::auth::token_headers;
use crate::envelope::Envelope;
use crate::transport::TransportConfig;

/// Async client for the rental backend's `/api/v1` REST surface.
///
/// Handles the `{statusCode, message, data}` envelope and 401 detection.
/// All methods return unwrapped `data` payloads -- the envelope is
/// stripped before the caller sees it.
pub struct RentalClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RentalClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build an unauthenticated client (only good for `login`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Build a client that sends the access token on every request.
    pub fn with_token(
        base_url: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let headers = token_headers(token)?;
        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Ensure the base URL ends with `/api/v1/` exactly once.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    /// The backend base URL (including the `/api/v1/` suffix).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"guests"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/v1/`, so joining `guests/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.unwrap_envelope(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.unwrap_envelope(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.unwrap_envelope(resp).await
    }

    pub(crate) async fn post_no_data<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.unwrap_empty(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.unwrap_envelope(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.unwrap_empty(resp).await
    }

    // ── Envelope handling ────────────────────────────────────────────

    /// Parse the `{statusCode, message, data}` envelope and return `data`.
    async fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let envelope = self.parse_envelope::<T>(resp).await?;
        envelope.data.ok_or(Error::MissingData)
    }

    /// Like [`unwrap_envelope`](Self::unwrap_envelope) for endpoints whose
    /// success payload is empty (deletes, logout).
    async fn unwrap_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        self.parse_envelope::<serde_json::Value>(resp).await?;
        Ok(())
    }

    pub(crate) async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Envelope<T>, Error> {
        let http_status = resp.status();

        if http_status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::SessionExpired);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        // The envelope statusCode is authoritative; some middleware paths
        // answer auth failures with HTTP 200 + statusCode 401.
        match envelope.status_code {
            200..=299 => Ok(envelope),
            401 => Err(Error::SessionExpired),
            code => Err(Error::Api {
                status_code: code,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("statusCode={code}")),
            }),
        }
    }
}
