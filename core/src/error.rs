//! Error types for the fetch helper.
//!
//! # Design
//! A non-success status deliberately collapses into [`FetchError::NotOk`] with
//! a fixed message and nothing else: the contract discards the status code and
//! response body rather than classifying them. Decode failures forward the
//! JSON decoder's own error untouched, so callers can tell "the server said
//! no" apart from "the server said something unparseable."

use thiserror::Error;

/// Errors returned by `ParkingClient` calls.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The response status was outside the success range. The status code and
    /// body are not preserved.
    #[error("Network response was not ok")]
    NotOk,

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body was not valid JSON for the expected type.
    #[error(transparent)]
    Decode(serde_json::Error),

    /// Transport-level failure from the underlying HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
