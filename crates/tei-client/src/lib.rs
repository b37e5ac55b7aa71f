//! # Text Embeddings Inference client
//!
//! HTTP client for a text-embeddings-inference server: fetch model and
//! router metadata (`GET /info`) and compute vector embeddings for text
//! inputs (`POST /embed`).
//!
//! Two calling styles share one data model ([`tei_types`]):
//!
//! - [`Client`] — async, one awaitable call per operation
//! - [`blocking::Client`] — synchronous, one thread-blocking call
//!
//! ## Example
//!
//! ```rust,no_run
//! use tei_client::Client;
//!
//! async fn example() -> Result<(), tei_client::Error> {
//!     let client = Client::new("http://localhost:8080");
//!
//!     let info = client.info().await?;
//!     println!("model: {} ({})", info.model_id, info.model_dtype);
//!
//!     let embeddings = client.embed("Why is the sky blue?", false).await?;
//!     println!("dimension: {}", embeddings[0].len());
//!
//!     Ok(())
//! }
//! ```
//!
//! Every operation is single-shot: build request, send, decode or fail.
//! The client never retries; see [`Error`] for the failure taxonomy a
//! caller can base its own retry policy on.

pub mod blocking;
mod client;
mod error;


pub use client::Client;
pub use error::{Error, Result};
pub use tei_types::{DeployedModel, EmbedRequest, ErrorPayload, InfoResponse, ValidationError};
