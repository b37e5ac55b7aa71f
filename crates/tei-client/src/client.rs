//! Async client: one awaitable, single-shot HTTP call per operation.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use tei_types::{EmbedRequest, InfoResponse};
use tracing::debug;

use crate::error::{parse_error, Result};

/// Per-request timeout applied when the caller does not override it.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Async client for a text-embeddings-inference server.
///
/// Holds only connection configuration; all fields are read-only after
/// construction, so any number of concurrent calls may share one client
/// without synchronization. Each call acquires its own HTTP session,
/// uses it for exactly one request, and releases it on every exit path.
///
/// # Example
///
/// ```rust,no_run
/// use tei_client::Client;
///
/// async fn example() -> Result<(), tei_client::Error> {
///     let client = Client::new("http://localhost:8080");
///     let embeddings = client.embed("Why is the sky blue?", false).await?;
///     println!("dimension: {}", embeddings[0].len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    headers: Option<HashMap<String, String>>,
    cookies: Option<HashMap<String, String>>,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the server at `base_url`.
    ///
    /// The URL is used verbatim (no trailing-slash normalization);
    /// endpoint paths are appended to it. The per-request timeout
    /// defaults to 10 seconds.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: None,
            cookies: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets additional headers merged into every request.
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets cookies attached to every request.
    pub fn with_cookies(mut self, cookies: HashMap<String, String>) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches model and router metadata from `GET {base_url}/info`.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`](crate::Error::Transport) on network-level failure
    /// - [`Error::Decoding`](crate::Error::Decoding) when a 200 body does not
    ///   decode into [`InfoResponse`]
    /// - the status-code taxonomy of [`Error`](crate::Error) on any non-200
    pub async fn info(&self) -> Result<InfoResponse> {
        let session = self.session()?;
        let url = format!("{}/info", self.base_url);
        debug!(url = %url, "requesting model info");

        let response = self.configure(session.get(&url)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(parse_error(status, &body));
        }

        let info: InfoResponse = serde_json::from_str(&body)?;
        debug!(model_id = %info.model_id, "model info received");
        Ok(info)
    }

    /// Embeds `inputs` via `POST {base_url}/embed`.
    ///
    /// Returns one embedding vector per input, in submission order; the
    /// vector shape is caller-interpreted. `truncate` asks the server to
    /// truncate over-length inputs instead of rejecting them.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) when `inputs` is
    ///   empty; no request is sent
    /// - otherwise the same taxonomy as [`Client::info`]
    pub async fn embed(
        &self,
        inputs: impl Into<String>,
        truncate: bool,
    ) -> Result<Vec<Vec<f32>>> {
        let request = EmbedRequest::new(inputs, truncate)?;
        let session = self.session()?;
        let url = format!("{}/embed", self.base_url);
        debug!(
            url = %url,
            input_len = request.inputs().len(),
            truncate = request.truncate(),
            "requesting embedding"
        );

        let response = self
            .configure(session.post(&url))
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            return Err(parse_error(status, &body));
        }

        let embeddings: Vec<Vec<f32>> = serde_json::from_str(&body)?;
        debug!(count = embeddings.len(), "embedding received");
        Ok(embeddings)
    }

    /// One session per call, dropped on every exit path.
    fn session(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder().timeout(self.timeout).build()?)
    }

    /// Applies the configured headers and cookies to a request.
    fn configure(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if let Some(headers) = &self.headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(cookies) = &self.cookies {
            let cookie = cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        builder
    }
}
