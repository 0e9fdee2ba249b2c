use std::path::PathBuf;

/// Roster configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ROSTER_DATA_DIR | ./data | 本地存储目录 |
/// | ROSTER_DB_FILE | roster.redb | 数据库文件名 |
/// | ROSTER_LOG_LEVEL | info | 日志级别 |
/// | ROSTER_LOG_DIR | (none) | 日志目录，设置后写入滚动日志文件 |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the local database
    pub data_dir: PathBuf,
    /// Database file name inside `data_dir`
    pub db_file: String,
    /// trace | debug | info | warn | error
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("ROSTER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            db_file: std::env::var("ROSTER_DB_FILE").unwrap_or_else(|_| "roster.redb".into()),
            log_level: std::env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("ROSTER_LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Override the data directory, keeping everything else
    ///
    /// 常用于测试场景
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Full path of the database file
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
