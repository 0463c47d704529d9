//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{Book, BookDraft, BookId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Book Repository Port
///
/// 每个方法只执行一条语句，不开启跨语句事务。
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 插入新图书，由存储层分配 id
    async fn create(&self, draft: &BookDraft) -> Result<Book, RepositoryError>;

    /// 分页获取图书（顺序不作保证）
    async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Book>, RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 整体覆盖除 id 外的全部字段；id 不存在时返回 None，不会新建记录
    async fn update(&self, id: BookId, draft: &BookDraft) -> Result<Option<Book>, RepositoryError>;

    /// 删除图书；返回是否确实删除了一行
    async fn delete(&self, id: BookId) -> Result<bool, RepositoryError>;
}
