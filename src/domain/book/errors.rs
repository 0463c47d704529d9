//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("author must not be empty")]
    EmptyAuthor,

    #[error("price must be a finite number, got {0}")]
    InvalidPrice(f64),
}
