//! 服务层
//!
//! - [`EmployeeService`] - validated create / update / delete
//! - [`export`] - JSON / CSV export
//! - [`Preferences`] - dark mode and capability flag

pub mod employee;
pub mod export;
pub mod preferences;

pub use employee::EmployeeService;
pub use export::{export_csv, export_json, EXPORT_CSV_FILENAME, EXPORT_JSON_FILENAME};
pub use preferences::Preferences;
