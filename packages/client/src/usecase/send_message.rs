//! UseCase: メッセージ送信処理
//!
//! 入力された文字列を 1 回だけバックエンドへ送信し、返信をそのまま返す。
//! 失敗は握りつぶさずに呼び出し元へ伝播する。

use std::sync::Arc;

use crate::domain::{MessageContent, MessageSender, RawReply, SendError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    sender: Arc<dyn MessageSender>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `message` - ユーザーが入力した文字列（空文字列も可）
    ///
    /// # Returns
    ///
    /// * `Ok(RawReply)` - サーバーからの返信（未解釈）
    /// * `Err(SendError)` - 通信失敗または非 2xx ステータス
    pub async fn execute(&self, message: &str) -> Result<RawReply, SendError> {
        let content = MessageContent::new(message);

        match self.sender.send_message(content).await {
            Ok(reply) => {
                tracing::info!(status = reply.status, "Reply received");
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!("Failed to send message: {}", e);
                Err(e)
            }
        }
    }
}
