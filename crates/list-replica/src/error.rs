//! Client Errors
//!
//! Failures that leave no usable server response. HTTP error statuses are
//! not errors here: they travel back to the caller as plain status codes.

use thiserror::Error;

/// Errors raised while talking to the task API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No response arrived (connection refused, CORS, DNS, ...)
    #[error("request failed: {0}")]
    Transport(String),
    /// A success status whose body could not be read as the expected entity
    #[error("could not decode response body: {0}")]
    Decode(String),
    /// The configured base URL cannot be used to build request URLs
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
