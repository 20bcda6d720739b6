//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Message content value object.
///
/// Any string is a valid message, including the empty string. The backend
/// decides what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent.
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for MessageContent {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for MessageContent {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server URL value object.
///
/// The absolute http(s) origin of the backend serving `/api/reply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new ServerUrl.
    ///
    /// # Arguments
    ///
    /// * `url` - An absolute URL such as `http://127.0.0.1:8000`
    ///
    /// # Returns
    ///
    /// A Result containing the ServerUrl or an error if validation fails
    pub fn new(url: &str) -> Result<Self, ValueObjectError> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::ServerUrlEmpty);
        }
        let parsed =
            Url::parse(trimmed).map_err(|_| ValueObjectError::ServerUrlInvalid(url.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed)),
            other => Err(ValueObjectError::ServerUrlUnsupportedScheme(
                other.to_string(),
            )),
        }
    }

    /// Resolve an absolute path (e.g. `/api/reply`) against this server.
    ///
    /// Any path already present on the server URL is replaced, matching how a
    /// browser resolves a root-relative request path.
    pub fn endpoint(&self, path: &str) -> Result<Url, ValueObjectError> {
        self.0
            .join(path)
            .map_err(|_| ValueObjectError::ServerUrlInvalid(path.to_string()))
    }

    /// Get the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Router history base value object.
///
/// Kept exactly as configured, the empty string included; the router never
/// rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a new BaseUrl.
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
