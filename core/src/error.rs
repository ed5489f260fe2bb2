//! Error types for the request helper.
//!
//! # Design
//! Application failures (the server answered, but with a non-success status)
//! get a dedicated variant carrying the parsed `errors` payload, because
//! callers display those to users. Transport failures and malformed bodies
//! land in string-carrying variants for debugging.

use std::fmt;

use serde_json::Value;

/// Errors returned by `AjaxClient` calls and `check_status`.
#[derive(Debug)]
pub enum RequestError {
    /// The transport failed before producing a response.
    TransportError(String),

    /// The server reported a non-success status. Carries the parsed body's
    /// `errors` field, or an empty object when the body had none.
    ApplicationError(Value),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The response body could not be parsed as JSON.
    DeserializationError(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::TransportError(msg) => {
                write!(f, "transport failed: {msg}")
            }
            RequestError::ApplicationError(errors) => {
                write!(f, "request failed: {errors}")
            }
            RequestError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            RequestError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for RequestError {}
