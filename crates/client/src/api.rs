//! [`PasteClient`]: the REST surface of the paste backend.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::protocol::{ApiError, CreatePaste, CreatedPaste, Paste};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the paste backend's REST API.
///
/// Cheap to clone; the underlying connection pool is shared between clones,
/// so one client can serve concurrent create/view flows.
#[derive(Debug, Clone)]
pub struct PasteClient {
    http: reqwest::Client,
    /// API base, e.g. `http://localhost:8080/api`, without trailing slash.
    base_url: String,
    /// Base for user-facing share links, without trailing slash.
    share_base: String,
}

impl PasteClient {
    /// Build a client with the [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute `http`/`https` URL.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        // Share links default to the backend's origin, mirroring how the web
        // viewer builds them from its own address.
        let share_base = parsed.origin().ascii_serialization();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            share_base,
        })
    }

    /// Override the base used for share links (e.g. a public domain in front
    /// of the backend).
    pub fn share_base(mut self, base: &str) -> Self {
        self.share_base = base.trim_end_matches('/').to_owned();
        self
    }

    /// User-facing link for a paste key: `<share_base>/<key>`.
    pub fn share_url(&self, key: &str) -> String {
        format!("{}/{key}", self.share_base)
    }

    /// `POST /pastes` — store a new paste.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure and
    /// [`ClientError::Api`] on a non-2xx response.
    pub async fn create(&self, req: &CreatePaste) -> Result<CreatedPaste, ClientError> {
        debug!(
            content_len = req.content.len(),
            syntax = %req.syntax,
            burn = req.is_burn_after_reading,
            "creating paste"
        );
        let resp = self
            .http
            .post(format!("{}/pastes", self.base_url))
            .json(req)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// `GET /pastes/{key}` — fetch a paste.
    ///
    /// Fetching a burn-after-reading paste deletes it server-side; a second
    /// fetch yields [`ClientError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] (404), [`ClientError::Expired`]
    /// (410), [`ClientError::Api`] (other non-2xx), or [`ClientError::Http`]
    /// on transport failure.
    pub async fn get(&self, key: &str) -> Result<Paste, ClientError> {
        debug!(key, "fetching paste");
        let resp = self
            .http
            .get(format!("{}/pastes/{key}", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::error_from(resp).await);
        }
        Ok(resp.json().await?)
    }

    /// Map a non-2xx response to a [`ClientError`], consuming the body.
    async fn error_from(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound,
            StatusCode::GONE => ClientError::Expired,
            _ => {
                let message = resp
                    .json::<ApiError>()
                    .await
                    .map(|e| e.message)
                    .unwrap_or_else(|_| "unexpected backend error".into());
                ClientError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_defaults_to_backend_origin() {
        let client = PasteClient::new("http://paste.example:8080/api").unwrap();
        assert_eq!(client.share_url("aB3xK9mQ"), "http://paste.example:8080/aB3xK9mQ");
    }

    #[test]
    fn share_base_override_wins() {
        let client = PasteClient::new("http://10.0.0.5:8080/api")
            .unwrap()
            .share_base("https://paste.example.com/");
        assert_eq!(client.share_url("k1"), "https://paste.example.com/k1");
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(matches!(
            PasteClient::new("not-a-url").unwrap_err(),
            ClientError::InvalidBaseUrl(_)
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            PasteClient::new("ftp://paste.example/api").unwrap_err(),
            ClientError::InvalidBaseUrl(_)
        ));
    }
}
