//! UseCase 層
//!
//! UI 層から呼び出され、Domain 層の trait を通じてバックエンドと通信します。

pub mod send_message;

pub use send_message::SendMessageUseCase;
