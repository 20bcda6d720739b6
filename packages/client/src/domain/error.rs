//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ServerUrl validation error
    #[error("ServerUrl cannot be empty")]
    ServerUrlEmpty,

    /// ServerUrl could not be parsed as an absolute URL
    #[error("ServerUrl is not a valid URL (got: {0})")]
    ServerUrlInvalid(String),

    /// ServerUrl uses a scheme other than http or https
    #[error("ServerUrl must use http or https (got: {0})")]
    ServerUrlUnsupportedScheme(String),
}

/// Errors returned when sending a message to the reply endpoint
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The request never produced a response (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server responded with HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// Errors related to route resolution
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("No route matches location '{0}'")]
    NoMatch(String),
}
