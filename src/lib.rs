//! Bookstore - 图书 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: 图书实体与字段校验
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: CreateBook, UpdateBook, DeleteBook
//! - Queries: GetBook, ListBooks
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Persistence: SQLite 存储（sqlx）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{load_config, AppConfig};
