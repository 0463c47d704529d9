//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::book::{Book, BookDraft, BookId};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    genre: Option<String>,
    price: Option<f64>,
}

impl TryFrom<BookRow> for Book {
    type Error = RepositoryError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let id = BookId::new(row.id);
        let draft = BookDraft::new(row.title, row.author, row.genre, row.price)
            .map_err(|e| RepositoryError::SerializationError(format!("book {}: {}", id, e)))?;
        Ok(Book::from_draft(id, draft))
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn create(&self, draft: &BookDraft) -> Result<Book, RepositoryError> {
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (title, author, genre, price)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, author, genre, price
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.genre.as_deref())
        .bind(draft.price.map(|p| p.value()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Book::try_from(row)
    }

    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(
            "SELECT id, title, author, genre, price FROM books ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(i64::from(limit))
        .bind(i64::from(skip))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> =
            sqlx::query_as("SELECT id, title, author, genre, price FROM books WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET title = ?, author = ?, genre = ?, price = ?
            WHERE id = ?
            RETURNING id, title, author, genre, price
            "#,
        )
        .bind(draft.title.as_str())
        .bind(draft.author.as_str())
        .bind(draft.genre.as_deref())
        .bind(draft.price.map(|p| p.value()))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(Book::try_from).transpose()
    }

    async fn delete(&self, id: BookId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
