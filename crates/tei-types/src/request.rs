//! Outbound embed request and its validation.

use serde::Serialize;
use thiserror::Error;

/// Rejections produced when constructing a request from invalid input.
///
/// Raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`inputs` cannot be empty")]
    EmptyInputs,
}

/// Payload for `POST /embed`.
///
/// Built per call via [`EmbedRequest::new`], which validates the input
/// up front; immutable afterwards. Serializes field-for-field with
/// snake_case keys, `truncate` always included.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedRequest {
    inputs: String,
    truncate: bool,
}

impl EmbedRequest {
    /// Validates and builds the request.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Text to embed. Must not be empty.
    /// * `truncate` - Whether the server should truncate inputs longer
    ///   than its maximum input length instead of rejecting them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyInputs`] when `inputs` is empty.
    pub fn new(inputs: impl Into<String>, truncate: bool) -> Result<Self, ValidationError> {
        let inputs = inputs.into();
        if inputs.is_empty() {
            return Err(ValidationError::EmptyInputs);
        }
        Ok(Self { inputs, truncate })
    }

    /// The text to embed.
    pub fn inputs(&self) -> &str {
        &self.inputs
    }

    /// Whether over-length inputs are truncated server-side.
    pub fn truncate(&self) -> bool {
        self.truncate
    }
}
