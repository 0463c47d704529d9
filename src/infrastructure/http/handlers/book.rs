//! Book HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateBook};
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{
    BookCreateRequest, BookResponse, MessageResponse, PaginationParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 新增图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookCreateRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Json(req) = payload?;
    let command = CreateBook {
        draft: req.into_draft()?,
    };

    let book = state.create_book_handler.handle(command).await?;

    Ok(Json(BookResponse::from(book)))
}

/// 分页列出图书
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let Query(params) = params?;
    let query = ListBooks {
        skip: params.skip,
        limit: params.limit,
    };

    let books = state.list_books_handler.handle(query).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// 获取图书详情
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Path(book_id) = book_id?;
    let query = GetBook {
        book_id: BookId::new(book_id),
    };

    let book = state.get_book_handler.handle(query).await?;

    Ok(Json(BookResponse::from(book)))
}

/// 整体更新图书
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookCreateRequest>, JsonRejection>,
) -> Result<Json<BookResponse>, ApiError> {
    let Path(book_id) = book_id?;
    let Json(req) = payload?;
    let command = UpdateBook {
        book_id: BookId::new(book_id),
        draft: req.into_draft()?,
    };

    let book = state.update_book_handler.handle(command).await?;

    Ok(Json(BookResponse::from(book)))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(book_id) = book_id?;
    let command = DeleteBook {
        book_id: BookId::new(book_id),
    };

    state.delete_book_handler.handle(command).await?;

    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
