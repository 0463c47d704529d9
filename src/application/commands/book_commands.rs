//! Book Commands

use crate::domain::book::{BookDraft, BookId};

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub draft: BookDraft,
}

/// 整体更新图书命令
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub draft: BookDraft,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}
