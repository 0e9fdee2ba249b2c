//! 核心模块 - 配置与状态
//!
//! - [`Config`] - 环境配置
//! - [`RosterState`] - storage, records and preferences

pub mod config;
pub mod state;

pub use config::Config;
pub use state::RosterState;
