//! Export Service - JSON and CSV serialization of the full collection
//!
//! Callers pass the store snapshot, never a filtered view.

use shared::models::Employee;
use shared::{AppError, AppResult};

pub const EXPORT_JSON_FILENAME: &str = "employees.json";
pub const EXPORT_CSV_FILENAME: &str = "employees.csv";

/// CSV columns, in order
pub const CSV_COLUMNS: [&str; 14] = [
    "id",
    "name",
    "employeeId",
    "department",
    "role",
    "supervisor",
    "status",
    "contractType",
    "hireDate",
    "email",
    "phone",
    "emergencyName",
    "emergencyPhone",
    "photoUrl",
];

/// Pretty-printed JSON array with every field
pub fn export_json(records: &[Employee]) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Comma-delimited text: header row, one row per employee, every field quoted
pub fn export_csv(records: &[Employee]) -> AppResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS).map_err(csv_error)?;
    for e in records {
        writer
            .write_record([
                e.id.as_str(),
                e.name.as_str(),
                e.employee_id.as_str(),
                e.department.as_str(),
                e.role.as_str(),
                e.supervisor.as_deref().unwrap_or_default(),
                e.status.as_str(),
                e.contract_type.as_str(),
                e.hire_date.as_str(),
                e.contact.email.as_str(),
                e.contact.phone.as_str(),
                e.contact.emergency_name.as_str(),
                e.contact.emergency_phone.as_str(),
                e.photo_url.as_deref().unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::serialization(e.to_string()))
}

fn csv_error(err: csv::Error) -> AppError {
    AppError::serialization(format!("CSV export failed: {err}"))
}
