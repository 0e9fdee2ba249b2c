//! Query Engine - filtered, searched, sorted views over the collection
//!
//! Pure functions: nothing here touches the record store.

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use shared::models::{ContractType, Department, Employee, EmploymentStatus, JobRole};
use std::cmp::Ordering;
use std::str::FromStr;

/// Label the presentation layer uses for an inactive filter
pub const FILTER_ALL: &str = "All";

/// Categorical filter: everything, or a single value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Filter::Only(_))
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FILTER_ALL {
            Ok(Filter::All)
        } else {
            s.parse().map(Filter::Only)
        }
    }
}

/// Sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    HireDate,
    EmployeeId,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "hireDate" => Ok(SortKey::HireDate),
            "employeeId" => Ok(SortKey::EmployeeId),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Search / filter / sort state held by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub department: Filter<Department>,
    #[serde(default)]
    pub role: Filter<JobRole>,
    #[serde(default)]
    pub status: Filter<EmploymentStatus>,
    #[serde(default)]
    pub contract_type: Filter<ContractType>,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub direction: SortDirection,
}

impl QueryParams {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn department(mut self, department: Department) -> Self {
        self.department = Filter::Only(department);
        self
    }

    pub fn role(mut self, role: JobRole) -> Self {
        self.role = Filter::Only(role);
        self
    }

    pub fn status(mut self, status: EmploymentStatus) -> Self {
        self.status = Filter::Only(status);
        self
    }

    pub fn contract_type(mut self, contract_type: ContractType) -> Self {
        self.contract_type = Filter::Only(contract_type);
        self
    }

    pub fn sort_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }
}

/// Derive the view: search, then filters, then a stable sort
pub fn query_view(records: &[Employee], params: &QueryParams) -> Vec<Employee> {
    let term = params.search.trim().to_lowercase();

    let mut view: Vec<Employee> = records
        .iter()
        .filter(|e| term.is_empty() || matches_search(e, &term))
        .filter(|e| {
            params.department.matches(&e.department)
                && params.role.matches(&e.role)
                && params.status.matches(&e.status)
                && params.contract_type.matches(&e.contract_type)
        })
        .cloned()
        .collect();

    let collator = NameCollator::root();
    // slice::sort_by is stable; Desc flips the comparator so ties keep input order
    view.sort_by(|a, b| {
        let ord = compare_by(&collator, params.sort_key, a, b);
        match params.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    view
}

/// `term` must already be trimmed and lowercased
fn matches_search(employee: &Employee, term: &str) -> bool {
    [
        employee.name.as_str(),
        employee.employee_id.as_str(),
        employee.contact.email.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

fn compare_by(collator: &NameCollator, key: SortKey, a: &Employee, b: &Employee) -> Ordering {
    match key {
        SortKey::Name => collator.compare(&a.name, &b.name),
        SortKey::EmployeeId => collator.compare(&a.employee_id, &b.employee_id),
        // ISO-8601 strings sort chronologically as plain bytes
        SortKey::HireDate => a.hire_date.cmp(&b.hire_date),
    }
}

/// Locale-aware ordering for names and employee codes
///
/// CLDR root collation at tertiary strength: base letters decide first, so
/// "Émile" sorts with the E names; accents, then case (lowercase first),
/// only break ties.
#[derive(Debug)]
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn root() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Root collation data unavailable, sorting by code point");
                Self { collator: None }
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

/// One-off comparison; [`query_view`] builds its collator once per call
pub fn collate(a: &str, b: &str) -> Ordering {
    NameCollator::root().compare(a, b)
}
