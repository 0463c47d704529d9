//! SQLite Database - 数据库连接和建表

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }

    /// 内存数据库：每个连接各自一份，所以只能有一个连接
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项下发，池中每个新连接都会生效
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        // WAL 模式，允许并发读写
        .journal_mode(SqliteJournalMode::Wal)
        // 遇到锁时等待 5000ms 而不是立即失败
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 建表（仅在不存在时创建，不做 schema 迁移）
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT 保证删除后 id 不被复用
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT,
            price REAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        // 重复执行不报错
        ensure_schema(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_db_is_created_and_persists_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.db");
        let config = DatabaseConfig::new(format!("sqlite:{}?mode=rwc", path.display()), 2);

        let pool = create_pool(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO books (title, author) VALUES ('A', 'B')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;
        assert!(path.exists());

        let pool = create_pool(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_config_keeps_url_and_pool_size() {
        let config = DatabaseConfig::new("sqlite:data/books.db?mode=rwc", 3);
        assert_eq!(config.database_url, "sqlite:data/books.db?mode=rwc");
        assert_eq!(config.max_connections, 3);
    }
}
