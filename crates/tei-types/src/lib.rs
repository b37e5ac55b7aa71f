//! # Text Embeddings Inference types
//!
//! Data model shared by the blocking and async clients in `tei-client`:
//! the outbound embed request, the model/router metadata returned by the
//! server, and the shape of its error bodies.
//!
//! Pure data: validation and (de)serialization only, no I/O. Every type
//! is an immutable value object passed by value across the client
//! boundary.

mod request;
mod response;


pub use request::{EmbedRequest, ValidationError};
pub use response::{DeployedModel, ErrorPayload, InfoResponse};
