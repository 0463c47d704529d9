//! HTTP Routes
//!
//! API Endpoints:
//! - /books         POST    新增图书
//! - /books         GET     分页列出图书（skip, limit）
//! - /books/        同 /books
//! - /books/{id}    GET     获取图书
//! - /books/{id}    PUT     整体更新图书
//! - /books/{id}    DELETE  删除图书
//! - /health        GET     健康检查

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    // 集合路径带不带结尾斜杠都接受
    let collection = get(handlers::list_books).post(handlers::create_book);

    Router::new()
        .route("/books", collection.clone())
        .route("/books/", collection)
        .route(
            "/books/:book_id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
}
