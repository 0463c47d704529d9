//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_PAGE_LIMIT;
use crate::domain::book::{Book, BookDraft, BookError};

// ============================================================================
// Book DTOs
// ============================================================================

/// 入站图书记录（BookCreate）
///
/// 字段缺失在这里保留为 None，由 BookDraft::parse 统一报错；
/// 类型不符由 Json 提取器拒绝。
#[derive(Debug, Deserialize)]
pub struct BookCreateRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub price: Option<f64>,
}

impl BookCreateRequest {
    pub fn into_draft(self) -> Result<BookDraft, BookError> {
        BookDraft::parse(self.title, self.author, self.genre, self.price)
    }
}

/// 出站图书记录（Book）
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub price: Option<f64>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().value(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            genre: book.genre().map(str::to_string),
            price: book.price().map(|p| p.value()),
        }
    }
}

/// 分页参数
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

// ============================================================================
// 通用响应
// ============================================================================

/// 仅含提示信息的响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_type_is_rejected_by_deserializer() {
        let result: Result<BookCreateRequest, _> = serde_json::from_str(
            r#"{"title":"A","author":"B","genre":"C","price":"cheap"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field_is_reported_by_name() {
        let req: BookCreateRequest =
            serde_json::from_str(r#"{"title":"A","author":"B","price":1.5}"#).unwrap();
        assert_eq!(req.into_draft().unwrap_err(), BookError::MissingField("genre"));
    }

    #[test]
    fn test_pagination_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
    }
}
