//! Message sender abstraction.
//!
//! The use case layer depends on this trait, and the infrastructure layer
//! provides the HTTP implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

use super::{MessageContent, SendError};

/// Response returned by the reply endpoint, passed through unexamined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    /// HTTP status code (always a success code)
    pub status: u16,
    /// Value of the `Content-Type` response header, if any
    pub content_type: Option<String>,
    /// Response body as text
    pub body: String,
}

impl RawReply {
    /// Whether the server labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false)
    }

    /// Decode the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Sends one message to the backend and returns its reply.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, content: MessageContent) -> Result<RawReply, SendError>;
}
