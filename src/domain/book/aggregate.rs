//! Book Context - Entity

use super::{Author, BookError, BookId, Price, Title};

/// 待写入的图书记录（已校验，尚无 id）
///
/// 创建与整体更新共用同一形状：除 id 外的全部字段。
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: Title,
    pub author: Author,
    pub genre: Option<String>,
    pub price: Option<Price>,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Option<String>,
        price: Option<f64>,
    ) -> Result<Self, BookError> {
        Ok(Self {
            title: Title::new(title)?,
            author: Author::new(author)?,
            genre,
            price: price.map(Price::new).transpose()?,
        })
    }

    /// 按入站契约解析：四个字段都必须提供
    pub fn parse(
        title: Option<String>,
        author: Option<String>,
        genre: Option<String>,
        price: Option<f64>,
    ) -> Result<Self, BookError> {
        let title = title.ok_or(BookError::MissingField("title"))?;
        let author = author.ok_or(BookError::MissingField("author"))?;
        let genre = genre.ok_or(BookError::MissingField("genre"))?;
        let price = price.ok_or(BookError::MissingField("price"))?;
        Self::new(title, author, Some(genre), Some(price))
    }
}

/// Book 实体
///
/// 不变量:
/// - id 由存储层分配，之后不可变
/// - title / author 始终存在且非空
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    genre: Option<String>,
    price: Option<Price>,
}

impl Book {
    /// 由存储层分配的 id 与已校验字段组装
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            genre: draft.genre,
            price: draft.price,
        }
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn price(&self) -> Option<Price> {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_every_field() {
        let err = BookDraft::parse(None, Some("B".into()), Some("C".into()), Some(1.0)).unwrap_err();
        assert_eq!(err, BookError::MissingField("title"));

        let err = BookDraft::parse(Some("A".into()), None, Some("C".into()), Some(1.0)).unwrap_err();
        assert_eq!(err, BookError::MissingField("author"));

        let err = BookDraft::parse(Some("A".into()), Some("B".into()), None, Some(1.0)).unwrap_err();
        assert_eq!(err, BookError::MissingField("genre"));

        let err = BookDraft::parse(Some("A".into()), Some("B".into()), Some("C".into()), None).unwrap_err();
        assert_eq!(err, BookError::MissingField("price"));
    }

    #[test]
    fn test_parse_checks_field_constraints() {
        let err = BookDraft::parse(Some(" ".into()), Some("B".into()), Some("C".into()), Some(1.0))
            .unwrap_err();
        assert_eq!(err, BookError::EmptyTitle);

        let draft =
            BookDraft::parse(Some("A".into()), Some("B".into()), Some(String::new()), Some(9.99))
                .unwrap();
        assert_eq!(draft.genre.as_deref(), Some(""));
        assert_eq!(draft.price.map(|p| p.value()), Some(9.99));
    }

    #[test]
    fn test_book_from_draft_keeps_fields() {
        let draft = BookDraft::new("Dune", "Frank Herbert", None, Some(12.5)).unwrap();
        let book = Book::from_draft(BookId::new(7), draft);

        assert_eq!(book.id().value(), 7);
        assert_eq!(book.title().as_str(), "Dune");
        assert_eq!(book.author().as_str(), "Frank Herbert");
        assert_eq!(book.genre(), None);
        assert_eq!(book.price().map(|p| p.value()), Some(12.5));
    }
}
