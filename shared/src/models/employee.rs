//! Employee Model

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of an enumeration's canonical values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Closed string enumeration with a canonical display label.
///
/// The label is what JSON, CSV and filter state carry.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every allowed value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

choice_enum! {
    /// Department an employee belongs to
    Department, "department" {
        Engineering => "Engineering",
        Hr => "HR",
        Sales => "Sales",
        Marketing => "Marketing",
        Finance => "Finance",
        Operations => "Operations",
    }
}

choice_enum! {
    /// Job title
    JobRole, "role" {
        SoftwareEngineer => "Software Engineer",
        SeniorEngineer => "Senior Engineer",
        EngineeringManager => "Engineering Manager",
        HrSpecialist => "HR Specialist",
        HrManager => "HR Manager",
        SalesRepresentative => "Sales Representative",
        SalesManager => "Sales Manager",
        MarketingSpecialist => "Marketing Specialist",
        MarketingManager => "Marketing Manager",
        Accountant => "Accountant",
        FinancialAnalyst => "Financial Analyst",
        OperationsCoordinator => "Operations Coordinator",
        OperationsManager => "Operations Manager",
    }
}

choice_enum! {
    /// Employment status
    EmploymentStatus, "status" {
        Active => "Active",
        Probation => "Probation",
        OnLeave => "On Leave",
        Inactive => "Inactive",
    }
}

choice_enum! {
    /// Contract type
    ContractType, "contract type" {
        Permanent => "Permanent",
        Contract => "Contract",
        Intern => "Intern",
    }
}

/// Contact details (all four required)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub emergency_name: String,
    pub emergency_phone: String,
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque id, assigned once at creation
    pub id: String,
    /// User-facing code, e.g. "EMP-001"
    pub employee_id: String,
    pub name: String,
    pub department: Department,
    pub role: JobRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    pub status: EmploymentStatus,
    pub contract_type: ContractType,
    /// ISO-8601 date or date-time string
    pub hire_date: String,
    pub contact: ContactInfo,
    /// URL or data URI, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Contact part of a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub emergency_name: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Create / update payload
///
/// Every field is optional: on update, absent fields keep their stored value.
/// Categorical fields are raw strings so unknown values are reported per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub supervisor: Option<String>,
    pub status: Option<String>,
    pub contract_type: Option<String>,
    pub hire_date: Option<String>,
    #[serde(default)]
    pub contact: ContactDraft,
    pub photo_url: Option<String>,
}

impl EmployeeDraft {
    /// Draft carrying every field of an existing record
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: Some(employee.employee_id.clone()),
            name: Some(employee.name.clone()),
            department: Some(employee.department.to_string()),
            role: Some(employee.role.to_string()),
            supervisor: employee.supervisor.clone(),
            status: Some(employee.status.to_string()),
            contract_type: Some(employee.contract_type.to_string()),
            hire_date: Some(employee.hire_date.clone()),
            contact: ContactDraft {
                phone: Some(employee.contact.phone.clone()),
                email: Some(employee.contact.email.clone()),
                emergency_name: Some(employee.contact.emergency_name.clone()),
                emergency_phone: Some(employee.contact.emergency_phone.clone()),
            },
            photo_url: employee.photo_url.clone(),
        }
    }
}
