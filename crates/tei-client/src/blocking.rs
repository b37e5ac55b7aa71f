//! Blocking client: one call, one thread, no suspension.
//!
//! Same configuration surface, operations, and error outcomes as the
//! async [`Client`](crate::Client); only the I/O style differs. The
//! timeout unit is seconds in both styles.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::RequestBuilder;
use reqwest::StatusCode;
use tei_types::{EmbedRequest, InfoResponse};
use tracing::debug;

use crate::client::DEFAULT_TIMEOUT;
use crate::error::{parse_error, Result};

/// Blocking client for a text-embeddings-inference server.
///
/// # Example
///
/// ```rust,no_run
/// use tei_client::blocking::Client;
///
/// fn example() -> Result<(), tei_client::Error> {
///     let client = Client::new("http://localhost:8080");
///     let embeddings = client.embed("Why is the sky blue?", false)?;
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
    /// The URL is used verbatim; the per-request timeout defaults to 10
    /// seconds.
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
    /// Same error taxonomy as the async [`Client::info`](crate::Client::info).
    pub fn info(&self) -> Result<InfoResponse> {
        let session = self.session()?;
        let url = format!("{}/info", self.base_url);
        debug!(url = %url, "requesting model info");

        let response = self.configure(session.get(&url)).send()?;
        let status = response.status();
        let body = response.text()?;
        if status != StatusCode::OK {
            return Err(parse_error(status, &body));
        }

        let info: InfoResponse = serde_json::from_str(&body)?;
        debug!(model_id = %info.model_id, "model info received");
        Ok(info)
    }

    /// Embeds `inputs` via `POST {base_url}/embed`.
    ///
    /// Same contract and error taxonomy as the async
    /// [`Client::embed`](crate::Client::embed); validation failure aborts
    /// before any request is sent.
    pub fn embed(&self, inputs: impl Into<String>, truncate: bool) -> Result<Vec<Vec<f32>>> {
        let request = EmbedRequest::new(inputs, truncate)?;
        let session = self.session()?;
        let url = format!("{}/embed", self.base_url);
        debug!(
            url = %url,
            input_len = request.inputs().len(),
            truncate = request.truncate(),
            "requesting embedding"
        );

        let response = self.configure(session.post(&url)).json(&request).send()?;
        let status = response.status();
        let body = response.text()?;
        if status != StatusCode::OK {
            return Err(parse_error(status, &body));
        }

        let embeddings: Vec<Vec<f32>> = serde_json::from_str(&body)?;
        debug!(count = embeddings.len(), "embedding received");
        Ok(embeddings)
    }

    fn session(&self) -> Result<reqwest::blocking::Client> {
        Ok(reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?)
    }

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
