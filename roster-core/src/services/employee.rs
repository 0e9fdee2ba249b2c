//! Employee Service - validated create / update / delete
//!
//! Every write is gated on the [`Capability`] flag, validated in full, then
//! applied to a copy of the collection that is persisted as a whole through
//! [`RecordStore::replace_all`]. A failed operation leaves the collection as
//! it was.

use crate::db::RecordStore;
use crate::utils::time::parse_hire_date;
use crate::utils::validation::{
    check_optional_text, check_required_text, FieldViolations, MAX_EMAIL_LEN,
    MAX_NAME_LEN, MAX_PHOTO_LEN, MAX_SHORT_TEXT_LEN,
};
use serde_json::json;
use shared::error::FIELDS_DETAIL;
use shared::models::{
    Capability, ContactInfo, ContractType, Department, Employee, EmployeeDraft, EmploymentStatus,
    JobRole,
};
use shared::util::generate_id;
use shared::{AppError, AppResult, ErrorCode};
use std::str::FromStr;

pub struct EmployeeService<'a> {
    store: &'a mut RecordStore,
    capability: Capability,
}

impl<'a> EmployeeService<'a> {
    pub fn new(store: &'a mut RecordStore, capability: Capability) -> Self {
        Self { store, capability }
    }

    /// All employees, most recent first
    pub fn list(&self) -> &[Employee] {
        self.store.snapshot()
    }

    /// Find employee by id
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.store.get(id)
    }

    /// Create an employee from a draft; the new record goes first
    pub fn create(&mut self, draft: EmployeeDraft) -> AppResult<Employee> {
        self.require_write("create employees")?;

        let employee = build_record(generate_id(), &draft, None)?;
        self.ensure_unique_code(&employee)?;

        let mut records = Vec::with_capacity(self.store.len() + 1);
        records.push(employee.clone());
        records.extend(self.store.snapshot().iter().cloned());
        self.store.replace_all(records)?;

        tracing::info!(id = %employee.id, employee_id = %employee.employee_id, "Employee created");
        Ok(employee)
    }

    /// Merge a draft over an existing employee, keeping its position
    ///
    /// Returns `Ok(None)` without touching anything when `id` is unknown.
    pub fn update(&mut self, id: &str, draft: EmployeeDraft) -> AppResult<Option<Employee>> {
        self.require_write("edit employees")?;

        let Some(index) = self.position(id) else {
            tracing::debug!(id, "Update skipped: employee not found");
            return Ok(None);
        };

        let existing = &self.store.snapshot()[index];
        let updated = build_record(existing.id.clone(), &draft, Some(existing))?;
        self.ensure_unique_code(&updated)?;

        let mut records = self.store.snapshot().to_vec();
        records[index] = updated.clone();
        self.store.replace_all(records)?;

        tracing::info!(id, "Employee updated");
        Ok(Some(updated))
    }

    /// Remove an employee; returns whether one was removed
    ///
    /// Confirmation happens in the caller before this is invoked.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        self.require_write("delete employees")?;

        let Some(index) = self.position(id) else {
            tracing::debug!(id, "Delete skipped: employee not found");
            return Ok(false);
        };

        let mut records = self.store.snapshot().to_vec();
        let removed = records.remove(index);
        self.store.replace_all(records)?;

        tracing::info!(id, employee_id = %removed.employee_id, "Employee deleted");
        Ok(true)
    }

    fn require_write(&self, operation: &str) -> AppResult<()> {
        if self.capability.can_write() {
            Ok(())
        } else {
            tracing::debug!(operation, capability = %self.capability, "Write refused");
            Err(AppError::admin_required(operation))
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.store.snapshot().iter().position(|e| e.id == id)
    }

    /// employeeId must not be held by any other record (Unicode case-insensitive)
    fn ensure_unique_code(&self, candidate: &Employee) -> AppResult<()> {
        let code = candidate.employee_id.to_lowercase();
        let taken = self
            .store
            .snapshot()
            .iter()
            .any(|e| e.id != candidate.id && e.employee_id.to_lowercase() == code);
        if taken {
            return Err(AppError::with_message(
                ErrorCode::EmployeeCodeExists,
                format!("Employee ID '{}' already exists", candidate.employee_id),
            )
            .with_detail(FIELDS_DETAIL, json!(["employeeId"])));
        }
        Ok(())
    }
}

/// Draft value if given, otherwise the stored one; trimmed
fn merged_text(draft: &Option<String>, base: Option<&str>) -> Option<String> {
    draft
        .as_deref()
        .or(base)
        .map(|s| s.trim().to_string())
}

/// Like [`merged_text`], but an empty value clears the field
fn merged_optional(draft: &Option<String>, base: Option<&Option<String>>) -> Option<String> {
    match draft {
        Some(value) => Some(value.trim().to_string()).filter(|v| !v.is_empty()),
        None => base.cloned().flatten(),
    }
}

fn merged_choice<T>(
    violations: &mut FieldViolations,
    field: &str,
    draft: &Option<String>,
    base: Option<T>,
) -> Option<T>
where
    T: FromStr<Err = shared::models::UnknownVariant>,
{
    match draft.as_deref().map(str::trim) {
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                violations.check(field, Err(format!("is invalid: {e}")));
                None
            }
        },
        None => {
            if base.is_none() {
                violations.check(field, Err("is required".to_string()));
            }
            base
        }
    }
}

/// Validate a draft (merged over `base` when updating) into a full record
fn build_record(id: String, draft: &EmployeeDraft, base: Option<&Employee>) -> AppResult<Employee> {
    let mut v = FieldViolations::new();

    let name = merged_text(&draft.name, base.map(|b| b.name.as_str()));
    v.check("name", check_required_text(name.as_deref(), MAX_NAME_LEN));

    let employee_id = merged_text(&draft.employee_id, base.map(|b| b.employee_id.as_str()));
    v.check(
        "employeeId",
        check_required_text(employee_id.as_deref(), MAX_SHORT_TEXT_LEN),
    );

    let department = merged_choice::<Department>(
        &mut v,
        "department",
        &draft.department,
        base.map(|b| b.department),
    );
    let role = merged_choice::<JobRole>(&mut v, "role", &draft.role, base.map(|b| b.role));
    let status = merged_choice::<EmploymentStatus>(
        &mut v,
        "status",
        &draft.status,
        base.map(|b| b.status),
    );
    let contract_type = merged_choice::<ContractType>(
        &mut v,
        "contractType",
        &draft.contract_type,
        base.map(|b| b.contract_type),
    );

    let supervisor = merged_optional(&draft.supervisor, base.map(|b| &b.supervisor));
    v.check(
        "supervisor",
        check_optional_text(supervisor.as_deref(), MAX_NAME_LEN),
    );

    let hire_date = merged_text(&draft.hire_date, base.map(|b| b.hire_date.as_str()));
    if v.check("hireDate", check_required_text(hire_date.as_deref(), MAX_SHORT_TEXT_LEN))
        && hire_date.as_deref().and_then(parse_hire_date).is_none()
    {
        v.check("hireDate", Err("is not an ISO-8601 date".to_string()));
    }

    let contact = &draft.contact;
    let base_contact = base.map(|b| &b.contact);
    let email = merged_text(&contact.email, base_contact.map(|c| c.email.as_str()));
    v.check(
        "contact.email",
        check_required_text(email.as_deref(), MAX_EMAIL_LEN),
    );
    let phone = merged_text(&contact.phone, base_contact.map(|c| c.phone.as_str()));
    v.check(
        "contact.phone",
        check_required_text(phone.as_deref(), MAX_SHORT_TEXT_LEN),
    );
    let emergency_name = merged_text(
        &contact.emergency_name,
        base_contact.map(|c| c.emergency_name.as_str()),
    );
    v.check(
        "contact.emergencyName",
        check_required_text(emergency_name.as_deref(), MAX_NAME_LEN),
    );
    let emergency_phone = merged_text(
        &contact.emergency_phone,
        base_contact.map(|c| c.emergency_phone.as_str()),
    );
    v.check(
        "contact.emergencyPhone",
        check_required_text(emergency_phone.as_deref(), MAX_SHORT_TEXT_LEN),
    );

    let photo_url = merged_optional(&draft.photo_url, base.map(|b| &b.photo_url));
    v.check(
        "photoUrl",
        check_optional_text(photo_url.as_deref(), MAX_PHOTO_LEN),
    );

    v.into_result()?;

    let (
        Some(name),
        Some(employee_id),
        Some(department),
        Some(role),
        Some(status),
        Some(contract_type),
        Some(hire_date),
        Some(email),
        Some(phone),
        Some(emergency_name),
        Some(emergency_phone),
    ) = (
        name,
        employee_id,
        department,
        role,
        status,
        contract_type,
        hire_date,
        email,
        phone,
        emergency_name,
        emergency_phone,
    )
    else {
        return Err(AppError::internal("validated draft is missing a field"));
    };

    Ok(Employee {
        id,
        employee_id,
        name,
        department,
        role,
        supervisor,
        status,
        contract_type,
        hire_date,
        contact: ContactInfo {
            phone,
            email,
            emergency_name,
            emergency_phone,
        },
        photo_url,
    })
}
