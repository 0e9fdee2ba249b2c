//! End-to-end roster session against an on-disk database

use roster_core::db::storage::EMPLOYEES_KEY;
use roster_core::{Config, LoadSource, LocalStorage, QueryParams, RosterState, SortDirection, SortKey};
use shared::models::{Capability, ContactDraft, Department, EmployeeDraft, EmploymentStatus};
use shared::ErrorCode;

fn config(dir: &tempfile::TempDir) -> Config {
    Config::with_data_dir(dir.path())
}

fn draft(name: &str, code: &str, department: &str) -> EmployeeDraft {
    EmployeeDraft {
        employee_id: Some(code.to_string()),
        name: Some(name.to_string()),
        department: Some(department.to_string()),
        role: Some("Marketing Specialist".to_string()),
        supervisor: None,
        status: Some("Active".to_string()),
        contract_type: Some("Permanent".to_string()),
        hire_date: Some("2023-11-15T09:00:00.000Z".to_string()),
        contact: ContactDraft {
            phone: Some("0810".to_string()),
            email: Some(format!("{}@example.com", code.to_lowercase())),
            emergency_name: Some("Next Of Kin".to_string()),
            emergency_phone: Some("0811".to_string()),
        },
        photo_url: Some("https://example.com/p.png".to_string()),
    }
}

#[test]
fn test_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created_id = {
        let mut roster = RosterState::initialize(&config(&dir)).unwrap();
        assert_eq!(roster.load_report().source, LoadSource::Seeded);
        assert_eq!(roster.load_all().len(), 3);

        let created = roster
            .create(draft("Ngozi Eze", "EMP-004", "Marketing"))
            .unwrap();
        assert!(roster.delete("seed-3").unwrap());
        roster.set_dark_mode(true).unwrap();
        created.id
    };

    let roster = RosterState::initialize(&config(&dir)).unwrap();
    assert_eq!(roster.load_report().source, LoadSource::Persisted { dropped: 0 });
    let ids: Vec<_> = roster.load_all().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec![created_id, "seed-1".to_string(), "seed-2".to_string()]);
    assert!(roster.dark_mode().unwrap());
}

#[test]
fn test_mutation_visible_to_next_query_and_summary() {
    let mut roster = RosterState::open_in_memory().unwrap();
    let before = roster.aggregates();

    roster
        .create(draft("Amaka Ude", "EMP-010", "Finance"))
        .unwrap();

    let view = roster.query_view(&QueryParams::default().department(Department::Finance));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Amaka Ude");

    let after = roster.aggregates();
    assert_eq!(after.total, before.total + 1);
    let sum: usize = after.by_department.iter().map(|g| g.count).sum();
    assert_eq!(sum, after.total);

    roster
        .update(
            &view[0].id,
            EmployeeDraft {
                status: Some("Probation".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    let probation = roster.query_view(&QueryParams::default().status(EmploymentStatus::Probation));
    assert_eq!(probation.len(), before.on_probation + 1);
    assert_eq!(roster.aggregates().on_probation, before.on_probation + 1);
}

#[test]
fn test_viewer_mode_refuses_writes() {
    let mut roster = RosterState::open_in_memory().unwrap();
    roster.set_capability(Capability::Viewer).unwrap();

    let err = roster
        .create(draft("Blocked", "EMP-020", "Sales"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AdminRequired);
    assert!(!roster.delete("seed-1").unwrap_err().is_validation());
    assert_eq!(roster.load_all().len(), 3);

    roster.set_capability(Capability::Admin).unwrap();
    assert!(roster.delete("seed-1").unwrap());
}

#[test]
fn test_export_ignores_view() {
    let roster = RosterState::open_in_memory().unwrap();
    let narrow = roster.query_view(
        &QueryParams::default()
            .search("zara")
            .sort_by(SortKey::HireDate, SortDirection::Desc),
    );
    assert_eq!(narrow.len(), 1);

    let csv = String::from_utf8(roster.export_csv().unwrap()).unwrap();
    assert_eq!(csv.lines().count(), 4);

    let json: serde_json::Value = serde_json::from_slice(&roster.export_json().unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[test]
fn test_corrupted_state_keeps_well_formed_records() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir);

    {
        let storage = LocalStorage::open(config.db_path()).unwrap();
        let blob = serde_json::json!([
            {
                "id": "keep",
                "employeeId": "EMP-777",
                "name": "Well Formed",
                "department": "Operations",
                "role": "Operations Manager",
                "status": "Inactive",
                "contractType": "Permanent",
                "hireDate": "2020-01-01",
                "contact": {
                    "phone": "1",
                    "email": "wf@example.com",
                    "emergencyName": "E",
                    "emergencyPhone": "2"
                }
            },
            { "id": "broken", "name": null }
        ]);
        storage
            .put(EMPLOYEES_KEY, &serde_json::to_vec(&blob).unwrap())
            .unwrap();
    }

    let roster = RosterState::initialize(&config).unwrap();
    assert_eq!(roster.load_report().source, LoadSource::Persisted { dropped: 1 });
    assert_eq!(roster.load_all().len(), 1);
    assert_eq!(roster.load_all()[0].id, "keep");
}
