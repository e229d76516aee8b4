//! Error types for the Eskimi adapter.
//!
//! # Design
//! Rejected bid requests are not errors: the validity check simply returns
//! `false` and the host drops the bid. Errors cover the cases where the adapter
//! cannot produce a request or read a response at all. A single response bid
//! that cannot be correlated is skipped and logged rather than surfaced here,
//! so one bad bid never hides the others.

use thiserror::Error;

/// Errors returned by `EskimiAdapter` build and parse methods.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The adapter configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The batch handed to the request builder violates its preconditions
    /// (empty batch, missing auction id, missing sizes, duplicate ad unit).
    #[error("invalid bid batch: {0}")]
    InvalidBatch(String),

    /// The exchange returned a status other than 200 or 204.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into a bid response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The auction payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
