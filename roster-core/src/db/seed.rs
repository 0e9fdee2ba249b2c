//! Seed collection installed when no valid persisted collection exists

use shared::models::{
    ContactInfo, ContractType, Department, Employee, EmploymentStatus, JobRole,
};

/// The fixed three-record example roster
pub fn seed_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "seed-1".to_string(),
            employee_id: "EMP-001".to_string(),
            name: "Odesomi Kamorudeen".to_string(),
            department: Department::Engineering,
            role: JobRole::SeniorEngineer,
            supervisor: None,
            status: EmploymentStatus::Active,
            contract_type: ContractType::Permanent,
            hire_date: "2021-04-12".to_string(),
            contact: ContactInfo {
                phone: "+234 801 000 0001".to_string(),
                email: "odesomi.k@example.com".to_string(),
                emergency_name: "Aisha Kamorudeen".to_string(),
                emergency_phone: "+234 801 000 1001".to_string(),
            },
            photo_url: None,
        },
        Employee {
            id: "seed-2".to_string(),
            employee_id: "EMP-002".to_string(),
            name: "Bolagbade Latunde".to_string(),
            department: Department::Hr,
            role: JobRole::HrSpecialist,
            supervisor: Some("Odesomi Kamorudeen".to_string()),
            status: EmploymentStatus::Probation,
            contract_type: ContractType::Contract,
            hire_date: "2024-09-02".to_string(),
            contact: ContactInfo {
                phone: "+234 801 000 0002".to_string(),
                email: "bolagbade.l@example.com".to_string(),
                emergency_name: "Tunde Latunde".to_string(),
                emergency_phone: "+234 801 000 1002".to_string(),
            },
            photo_url: None,
        },
        Employee {
            id: "seed-3".to_string(),
            employee_id: "EMP-003".to_string(),
            name: "Zara Bello".to_string(),
            department: Department::Sales,
            role: JobRole::SalesRepresentative,
            supervisor: Some("Bolagbade Latunde".to_string()),
            status: EmploymentStatus::Active,
            contract_type: ContractType::Intern,
            hire_date: "2025-01-20".to_string(),
            contact: ContactInfo {
                phone: "+234 801 000 0003".to_string(),
                email: "zara.b@example.com".to_string(),
                emergency_name: "Halima Bello".to_string(),
                emergency_phone: "+234 801 000 1003".to_string(),
            },
            photo_url: None,
        },
    ]
}
