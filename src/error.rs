//! Errors raised at the JSON boundary.
//!
//! The container itself never fails; only decoding or encoding hydration
//! documents can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The hydration document was not valid JSON or had the wrong shape.
    #[error("malformed initial state: {0}")]
    MalformedInitialState(#[source] serde_json::Error),

    /// A snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}
