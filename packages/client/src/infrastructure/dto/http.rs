//! HTTP API request and response DTOs for the reply endpoint.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/reply`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRequestDto {
    pub content: String,
}

impl MessageRequestDto {
    /// Encode as the JSON request body.
    pub fn to_body(&self) -> String {
        serde_json::json!({ "content": self.content }).to_string()
    }
}

/// Reply produced by the file system agent backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResponseDto {
    pub reply: String,
    pub with_file_system: bool,
    #[serde(default)]
    pub file_system: Option<Vec<FileSystemItemDto>>,
}

/// Kind of a file system entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Directory,
    Link,
}

/// One entry of a directory listing attached to a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemItemDto {
    pub file_name: String,
    pub full_name: String,
    pub file_type: FileType,
    /// Size in bytes
    pub size: u64,
    /// Link target, only present for links
    #[serde(default)]
    pub target: Option<String>,
}

impl ReplyResponseDto {
    /// Directory listing, if the reply carries one.
    pub fn listing(&self) -> &[FileSystemItemDto] {
        match (&self.with_file_system, &self.file_system) {
            (true, Some(items)) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_request_serializes_content_field() {
        // テスト項目: リクエスト本文は content フィールドのみを持つ JSON になる
        // given (前提条件):
        let dto = MessageRequestDto {
            content: "hello".to_string(),
        };

        // when (操作):
        let json = dto.to_body();

        // then (期待する結果):
        assert_eq!(json, r#"{"content":"hello"}"#);
    }

    #[test]
    fn test_message_request_special_characters_round_trip() {
        // テスト項目: 空文字列や JSON 特殊文字を含む content が元の文字列に戻る
        for raw in ["", "\"quoted\"", "back\\slash", "line\nbreak", "{\"content\":\"x\"}", "日本語 ✓"] {
            // when (操作):
            let json = MessageRequestDto {
                content: raw.to_string(),
            }
            .to_body();
            let parsed: MessageRequestDto = serde_json::from_str(&json).unwrap();

            // then (期待する結果):
            assert_eq!(parsed.content, raw);
        }
    }

    #[test]
    fn test_reply_response_without_file_system() {
        // テスト項目: file_system が null の返信をデコードできる
        // given (前提条件):
        let json = r#"{"reply":"done","with_file_system":false,"file_system":null}"#;

        // when (操作):
        let dto: ReplyResponseDto = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(dto.reply, "done");
        assert!(!dto.with_file_system);
        assert!(dto.listing().is_empty());
    }

    #[test]
    fn test_reply_response_missing_file_system_field() {
        // テスト項目: file_system フィールドが省略されていてもデコードできる
        let dto: ReplyResponseDto =
            serde_json::from_str(r#"{"reply":"hi","with_file_system":false}"#).unwrap();
        assert_eq!(dto.file_system, None);
    }

    #[test]
    fn test_reply_response_with_listing() {
        // テスト項目: ファイル一覧付きの返信をデコードできる
        // given (前提条件):
        let json = r#"{
            "reply": "here is the directory",
            "with_file_system": true,
            "file_system": [
                {"file_name":"src","full_name":"/repo/src","file_type":"directory","size":4096,"target":null},
                {"file_name":"a.txt","full_name":"/repo/a.txt","file_type":"file","size":12},
                {"file_name":"cur","full_name":"/repo/cur","file_type":"link","size":0,"target":"/repo/src"}
            ]
        }"#;

        // when (操作):
        let dto: ReplyResponseDto = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        let listing = dto.listing();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].file_type, FileType::Directory);
        assert_eq!(listing[1].target, None);
        assert_eq!(listing[2].file_type, FileType::Link);
        assert_eq!(listing[2].target.as_deref(), Some("/repo/src"));
    }

    #[test]
    fn test_listing_ignored_when_flag_is_false() {
        // テスト項目: with_file_system が false の場合は一覧を表示対象にしない
        let dto = ReplyResponseDto {
            reply: "x".to_string(),
            with_file_system: false,
            file_system: Some(vec![FileSystemItemDto {
                file_name: "a".to_string(),
                full_name: "/a".to_string(),
                file_type: FileType::File,
                size: 1,
                target: None,
            }]),
        };
        assert!(dto.listing().is_empty());
    }
}
