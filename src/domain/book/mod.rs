//! Book Context - 图书限界上下文
//!
//! 职责:
//! - Book 实体与字段约束
//! - 入站记录（BookDraft）校验

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Book, BookDraft};
pub use errors::BookError;
pub use value_objects::{Author, BookId, Price, Title};
