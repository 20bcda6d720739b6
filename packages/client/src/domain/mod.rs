//! Domain layer for the fsagent client.
//!
//! This module contains the message and routing vocabulary that is
//! independent of HTTP transport and terminal rendering.

pub mod error;
pub mod sender;
pub mod value_object;

pub use error::{RouterError, SendError, ValueObjectError};
pub use sender::{MessageSender, RawReply};
pub use value_object::{BaseUrl, MessageContent, ServerUrl};
