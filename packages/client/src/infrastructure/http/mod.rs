//! HTTP implementations of domain traits.

pub mod reply_client;

pub use reply_client::{HttpMessageSender, REPLY_PATH, encode_request};
