//! UI layer error definitions.

use thiserror::Error;

use crate::domain::{RouterError, ValueObjectError};

/// Errors that stop the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValueObjectError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("Terminal input error: {0}")]
    Readline(String),

    #[error("Terminal output error: {0}")]
    Io(#[from] std::io::Error),
}
