//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量 DATABASE_URL
//! 2. 环境变量（前缀 `BOOKSTORE_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 存储连接目标的环境变量
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// 加载应用配置
///
/// # 环境变量示例
/// - `DATABASE_URL=sqlite:/data/books.db?mode=rwc`
/// - `BOOKSTORE_SERVER__HOST=127.0.0.1`
/// - `BOOKSTORE_SERVER__PORT=8080`
/// - `BOOKSTORE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("database.url", "sqlite:books.db?mode=rwc")?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: BOOKSTORE_DATABASE__MAX_CONNECTIONS=10
    builder = builder.add_source(
        Environment::with_prefix("BOOKSTORE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. DATABASE_URL 覆盖一切
    builder = builder.set_override_option("database.url", std::env::var(DATABASE_URL_ENV).ok())?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.database.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database URL cannot be empty".to_string(),
        ));
    }

    // 只编译了 sqlx 的 sqlite 驱动
    if !config.database.url.starts_with("sqlite:") {
        return Err(ConfigError::ValidationError(format!(
            "Unsupported database URL (expected sqlite:...): {}",
            config.database.url
        )));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Database: {}", config.database.url);
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // 环境变量是进程级的，读取环境的加载测试串行执行
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_url() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_non_sqlite_url() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/books".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validation_error_for_zero_connections() {
        let mut config = AppConfig::default();
        config.database.max_connections = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let file = toml_file(
            r#"
[server]
host = "127.0.0.1"
port = 9100

[log]
level = "debug"
"#,
        );

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.log.level, "debug");
        // 未设置的字段取默认值
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_load_from_file_rejects_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let file = toml_file("[server]\nport = 0");

        let err = load_config_from_path(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let file = toml_file(
            r#"
[server]
port = 9100

[database]
url = "sqlite:from-file.db?mode=rwc"
"#,
        );

        std::env::set_var(DATABASE_URL_ENV, "sqlite:/tmp/from-env.db?mode=rwc");
        std::env::set_var("BOOKSTORE_SERVER__PORT", "9001");
        let result = load_config_from_path(Some(file.path()));
        std::env::remove_var(DATABASE_URL_ENV);
        std::env::remove_var("BOOKSTORE_SERVER__PORT");

        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite:/tmp/from-env.db?mode=rwc");
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn test_database_url_env_is_validated() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let file = toml_file("[server]\nport = 9100");

        std::env::set_var(DATABASE_URL_ENV, "postgres://localhost/books");
        let result = load_config_from_path(Some(file.path()));
        std::env::remove_var(DATABASE_URL_ENV);

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let err = load_config_from_path(Some(Path::new("/nonexistent/bookstore.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
