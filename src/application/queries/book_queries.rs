//! Book Queries

use crate::domain::book::BookId;

/// 默认分页大小
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}

/// 分页列出图书查询
#[derive(Debug, Clone)]
pub struct ListBooks {
    pub skip: u32,
    pub limit: u32,
}

impl Default for ListBooks {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}
