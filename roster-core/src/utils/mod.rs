//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing 初始化
//! - [`time`] - hire date parsing
//! - [`validation`] - field checks and limits

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};
