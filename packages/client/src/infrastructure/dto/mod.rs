//! Data transfer objects exchanged with the backend.

pub mod http;

pub use http::{FileSystemItemDto, FileType, MessageRequestDto, ReplyResponseDto};
