//! HTTP message sender for the `/api/reply` endpoint.

use async_trait::async_trait;
use reqwest::{
    Client, Url,
    header::{ACCEPT, CONTENT_TYPE},
};

use crate::{
    domain::{MessageContent, MessageSender, RawReply, SendError, ServerUrl, ValueObjectError},
    infrastructure::dto::MessageRequestDto,
};

/// Path of the reply endpoint, relative to the server origin
pub const REPLY_PATH: &str = "/api/reply";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a message into the request body `{"content": ...}`.
pub fn encode_request(content: &MessageContent) -> String {
    MessageRequestDto {
        content: content.as_str().to_string(),
    }
    .to_body()
}

/// Sends messages to the backend over HTTP.
///
/// Every call issues exactly one `POST`; there is no retry and no timeout
/// beyond what the underlying client does by default.
pub struct HttpMessageSender {
    client: Client,
    endpoint: Url,
}

impl HttpMessageSender {
    /// Create a sender targeting `{server}/api/reply`.
    pub fn new(server: &ServerUrl) -> Result<Self, ValueObjectError> {
        let endpoint = server.endpoint(REPLY_PATH)?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Fully resolved endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl MessageSender for HttpMessageSender {
    async fn send_message(&self, content: MessageContent) -> Result<RawReply, SendError> {
        let body = encode_request(&content);
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending reply request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received reply response");

        if !status.is_success() {
            // best effort: a truncated body must not hide the status
            let body = response.text().await.unwrap_or_default();
            return Err(SendError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Body(e.to_string()))?;

        Ok(RawReply {
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}
