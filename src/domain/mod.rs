//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Book Context: 图书管理

pub mod book;
