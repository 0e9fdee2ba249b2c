//! Structural check for persisted employee records
//!
//! Stored data is untrusted: it may predate a schema change or have been
//! edited by hand. Each entry is checked on its own and malformed entries are
//! reported instead of failing the whole collection.

use serde_json::{Map, Value};
use shared::models::{ContractType, Department, Employee, EmploymentStatus, JobRole};

/// Required top-level string fields
const REQUIRED_STRINGS: &[&str] = &["id", "employeeId", "name", "hireDate"];

/// Required string fields of `contact`
const REQUIRED_CONTACT_STRINGS: &[&str] = &["phone", "email", "emergencyName", "emergencyPhone"];

/// Optional string fields (absent, null or string)
const OPTIONAL_STRINGS: &[&str] = &["supervisor", "photoUrl"];

/// Outcome of checking one stored entry
#[derive(Debug, Clone, PartialEq)]
pub enum RecordCheck {
    Valid(Employee),
    Invalid(String),
}

/// Outcome of parsing a stored collection blob
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCollection {
    /// Blob is not JSON, or not a JSON array
    NotAnArray(String),
    /// Array parsed; malformed entries were dropped
    Records { valid: Vec<Employee>, dropped: usize },
}

/// Check that a stored entry has the shape of an [`Employee`]
pub fn check_record(value: &Value) -> RecordCheck {
    let Some(obj) = value.as_object() else {
        return RecordCheck::Invalid("entry is not an object".to_string());
    };

    for field in REQUIRED_STRINGS {
        if let Err(reason) = require_string(obj, field) {
            return RecordCheck::Invalid(reason);
        }
    }

    for field in OPTIONAL_STRINGS {
        match obj.get(*field) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return RecordCheck::Invalid(format!("{field} is not a string")),
        }
    }

    let Some(contact) = obj.get("contact").and_then(Value::as_object) else {
        return RecordCheck::Invalid("contact is missing or not an object".to_string());
    };
    for field in REQUIRED_CONTACT_STRINGS {
        if let Err(reason) = require_string(contact, field) {
            return RecordCheck::Invalid(format!("contact.{reason}"));
        }
    }

    let choices = [
        check_choice::<Department>(obj, "department"),
        check_choice::<JobRole>(obj, "role"),
        check_choice::<EmploymentStatus>(obj, "status"),
        check_choice::<ContractType>(obj, "contractType"),
    ];
    if let Some(Err(reason)) = choices.into_iter().find(Result::is_err) {
        return RecordCheck::Invalid(reason);
    }

    match serde_json::from_value::<Employee>(value.clone()) {
        Ok(employee) => RecordCheck::Valid(employee),
        Err(e) => RecordCheck::Invalid(e.to_string()),
    }
}

/// Parse a stored collection, keeping only well-formed entries
pub fn parse_collection(bytes: &[u8]) -> ParsedCollection {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(v) => v,
        Err(e) => return ParsedCollection::NotAnArray(format!("invalid JSON: {e}")),
    };
    let Value::Array(entries) = value else {
        return ParsedCollection::NotAnArray("stored collection is not an array".to_string());
    };

    let mut valid = Vec::with_capacity(entries.len());
    let mut dropped = 0;
    for (index, entry) in entries.iter().enumerate() {
        match check_record(entry) {
            RecordCheck::Valid(employee) => valid.push(employee),
            RecordCheck::Invalid(reason) => {
                tracing::warn!(index, %reason, "Dropping malformed stored employee");
                dropped += 1;
            }
        }
    }
    ParsedCollection::Records { valid, dropped }
}

fn require_string(obj: &Map<String, Value>, field: &str) -> Result<(), String> {
    match obj.get(field) {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(format!("{field} is not a string")),
        None => Err(format!("{field} is missing")),
    }
}

fn check_choice<T>(obj: &Map<String, Value>, field: &str) -> Result<(), String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    require_string(obj, field)?;
    let raw = obj.get(field).and_then(Value::as_str).unwrap_or_default();
    raw.parse::<T>().map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn well_formed() -> Value {
        json!({
            "id": "a1",
            "employeeId": "EMP-100",
            "name": "Zara Bello",
            "department": "Sales",
            "role": "Sales Manager",
            "status": "Active",
            "contractType": "Contract",
            "hireDate": "2024-03-01",
            "contact": {
                "phone": "0700",
                "email": "zara@example.com",
                "emergencyName": "Musa",
                "emergencyPhone": "0701"
            }
        })
    }

    #[test]
    fn test_well_formed_record_is_valid() {
        match check_record(&well_formed()) {
            RecordCheck::Valid(emp) => {
                assert_eq!(emp.name, "Zara Bello");
                assert!(emp.supervisor.is_none());
            }
            RecordCheck::Invalid(reason) => panic!("unexpected: {reason}"),
        }
    }

    #[test]
    fn test_null_optionals_accepted() {
        let mut v = well_formed();
        v["supervisor"] = Value::Null;
        v["photoUrl"] = json!("data:image/png;base64,AAAA");
        assert!(matches!(check_record(&v), RecordCheck::Valid(_)));
    }

    #[test]
    fn test_missing_required_field() {
        let mut v = well_formed();
        v.as_object_mut().unwrap().remove("name");
        assert_eq!(
            check_record(&v),
            RecordCheck::Invalid("name is missing".to_string())
        );
    }

    #[test]
    fn test_wrong_primitive_shape() {
        let mut v = well_formed();
        v["hireDate"] = json!(20240301);
        assert_eq!(
            check_record(&v),
            RecordCheck::Invalid("hireDate is not a string".to_string())
        );

        let mut v = well_formed();
        v["supervisor"] = json!(42);
        assert!(matches!(check_record(&v), RecordCheck::Invalid(_)));
    }

    #[test]
    fn test_contact_checked() {
        let mut v = well_formed();
        v["contact"].as_object_mut().unwrap().remove("email");
        assert_eq!(
            check_record(&v),
            RecordCheck::Invalid("contact.email is missing".to_string())
        );

        let mut v = well_formed();
        v["contact"] = json!("0700");
        assert!(matches!(check_record(&v), RecordCheck::Invalid(_)));
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let mut v = well_formed();
        v["status"] = json!("Retired");
        assert_eq!(
            check_record(&v),
            RecordCheck::Invalid("'Retired' is not a valid status".to_string())
        );
    }

    #[test]
    fn test_parse_collection_drops_malformed() {
        let blob = serde_json::to_vec(&json!([well_formed(), {"id": 7}, "junk"])).unwrap();
        match parse_collection(&blob) {
            ParsedCollection::Records { valid, dropped } => {
                assert_eq!(valid.len(), 1);
                assert_eq!(valid[0].id, "a1");
                assert_eq!(dropped, 2);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_collection_not_an_array() {
        assert!(matches!(
            parse_collection(b"{\"id\":\"a1\"}"),
            ParsedCollection::NotAnArray(_)
        ));
        assert!(matches!(
            parse_collection(b"not json"),
            ParsedCollection::NotAnArray(_)
        ));
    }
}
