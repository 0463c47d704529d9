//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::BookRepositoryPort;
use crate::domain::book::Book;

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<Book, ApplicationError> {
        let book = self.book_repo.create(&command.draft).await?;

        tracing::info!(
            book_id = %book.id(),
            title = %book.title(),
            "Book created"
        );

        Ok(book)
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
pub struct UpdateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<Book, ApplicationError> {
        let book_id = command.book_id;

        // UPDATE ... RETURNING 未命中即视为不存在
        let book = self
            .book_repo
            .update(book_id, &command.draft)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", book_id))?;

        tracing::info!(
            book_id = %book_id,
            title = %book.title(),
            "Book updated"
        );

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book_id = command.book_id;

        if !self.book_repo.delete(book_id).await? {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        tracing::info!(book_id = %book_id, "Book deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookDraft, BookId};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, ensure_schema, DatabaseConfig, SqliteBookRepository,
    };

    async fn repo() -> Arc<dyn BookRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        Arc::new(SqliteBookRepository::new(pool))
    }

    fn draft(title: &str) -> BookDraft {
        BookDraft::new(title, "Author", Some("Genre".to_string()), Some(10.0)).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let handler = CreateBookHandler::new(repo().await);

        let first = handler.handle(CreateBook { draft: draft("One") }).await.unwrap();
        let second = handler.handle(CreateBook { draft: draft("Two") }).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(second.title().as_str(), "Two");
    }

    #[tokio::test]
    async fn test_update_missing_book_is_not_found() {
        let repo = repo().await;
        let handler = UpdateBookHandler::new(repo.clone());

        let err = handler
            .handle(UpdateBook {
                book_id: BookId::new(99),
                draft: draft("Ghost"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Book", .. }));
        assert!(repo.list(0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = repo().await;
        let created = CreateBookHandler::new(repo.clone())
            .handle(CreateBook { draft: draft("Once") })
            .await
            .unwrap();
        let handler = DeleteBookHandler::new(repo);

        handler
            .handle(DeleteBook { book_id: created.id() })
            .await
            .unwrap();
        let err = handler
            .handle(DeleteBook { book_id: created.id() })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }
}
