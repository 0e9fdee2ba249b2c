//! Roster Core - employee roster engine
//!
//! # 模块结构
//!
//! ```text
//! roster-core/src/
//! ├── core/          # 配置、状态
//! ├── db/            # redb 存储、schema check、record store
//! ├── query.rs       # search / filter / sort
//! ├── stats.rs       # summary counts
//! ├── services/      # mutations, export, preferences
//! └── utils/         # 日志、时间、校验
//! ```
//!
//! Everything is synchronous and single-threaded; the presentation layer
//! holds a [`RosterState`] and calls into it.

pub mod core;
pub mod db;
pub mod query;
pub mod services;
pub mod stats;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, RosterState};
pub use db::{LoadReport, LoadSource, LocalStorage, RecordStore};
pub use query::{query_view, Filter, QueryParams, SortDirection, SortKey};
pub use services::{export_csv, export_json, EmployeeService, Preferences};
pub use stats::{summarize, summarize_at, GroupCount, RosterSummary};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then initialize logging from the resulting configuration
pub fn setup_environment() -> Config {
    let dotenv_result = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    match dotenv_result {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        // A missing .env is normal outside development
        Err(e) => tracing::debug!("No .env loaded: {}", e),
    }
    config
}
