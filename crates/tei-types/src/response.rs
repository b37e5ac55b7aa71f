//! Inbound payloads: model/router metadata and the error body shape.

use serde::{Deserialize, Serialize};

/// Model and router metadata returned by `GET /info`.
///
/// Required fields must be present in the payload or decoding fails;
/// optional fields decode to `None` when omitted. Unknown extra fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InfoResponse {
    pub model_id: String,
    pub model_sha: Option<String>,
    /// Numeric precision the model weights are loaded in, e.g. "float16".
    pub model_dtype: String,
    pub model_pooling: Option<String>,

    pub max_concurrent_requests: u32,
    pub max_input_length: u32,
    pub max_batch_tokens: u32,
    pub max_batch_requests: Option<u32>,
    pub max_client_batch_size: u32,
    pub tokenization_workers: u32,

    pub version: String,
    pub sha: Option<String>,
    pub docker_label: Option<String>,
}

/// A model version known to an inference-API registry.
///
/// A lightweight reference value; not fetched by any client operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployedModel {
    pub model_id: String,
    pub sha: String,
}

/// Body of a non-200 response from the server.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
    pub error_type: Option<String>,
}
