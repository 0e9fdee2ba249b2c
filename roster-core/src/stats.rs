//! Aggregator - summary counts over the full collection

use crate::utils::time::days_since_hire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::models::{Department, Employee, EmploymentStatus};

/// Hires at most this many days old count as newly hired
pub const NEWLY_HIRED_WINDOW_DAYS: i64 = 30;

/// Count of records holding one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount<T> {
    pub value: T,
    pub count: usize,
}

/// Dashboard summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total: usize,
    /// Groups in first-encounter order
    pub by_department: Vec<GroupCount<Department>>,
    /// Groups in first-encounter order
    pub by_status: Vec<GroupCount<EmploymentStatus>>,
    pub newly_hired: usize,
    pub on_probation: usize,
}

/// Summarize against the current clock
pub fn summarize(records: &[Employee]) -> RosterSummary {
    summarize_at(records, Utc::now())
}

/// Summarize against an explicit `now`
pub fn summarize_at(records: &[Employee], now: DateTime<Utc>) -> RosterSummary {
    RosterSummary {
        total: records.len(),
        by_department: group_counts(records.iter().map(|e| e.department)),
        by_status: group_counts(records.iter().map(|e| e.status)),
        newly_hired: records
            .iter()
            .filter(|e| is_newly_hired(&e.hire_date, now))
            .count(),
        on_probation: records
            .iter()
            .filter(|e| e.status == EmploymentStatus::Probation)
            .count(),
    }
}

/// Hired within the window, not in the future
pub fn is_newly_hired(hire_date: &str, now: DateTime<Utc>) -> bool {
    matches!(
        days_since_hire(hire_date, now),
        Some(days) if (0..=NEWLY_HIRED_WINDOW_DAYS).contains(&days)
    )
}

// Linear scan keeps first-encounter order; at most six distinct values
fn group_counts<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<GroupCount<T>> {
    let mut groups: Vec<GroupCount<T>> = Vec::new();
    for value in values {
        match groups.iter_mut().find(|g| g.value == value) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount { value, count: 1 }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed_employees;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_groups_in_first_encounter_order() {
        let mut records = seed_employees();
        // Engineering, HR, Sales, then Engineering again
        let mut extra = records[0].clone();
        extra.id = "x".to_string();
        records.push(extra);

        let summary = summarize_at(&records, now());
        assert_eq!(
            summary.by_department,
            vec![
                GroupCount { value: Department::Engineering, count: 2 },
                GroupCount { value: Department::Hr, count: 1 },
                GroupCount { value: Department::Sales, count: 1 },
            ]
        );
        assert_eq!(
            summary.by_status,
            vec![
                GroupCount { value: EmploymentStatus::Active, count: 3 },
                GroupCount { value: EmploymentStatus::Probation, count: 1 },
            ]
        );
    }

    #[test]
    fn test_department_counts_sum_to_total() {
        let summary = summarize_at(&seed_employees(), now());
        let sum: usize = summary.by_department.iter().map(|g| g.count).sum();
        assert_eq!(sum, summary.total);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn test_newly_hired_and_probation() {
        // Seed hires: 2021-04-12, 2024-09-02, 2025-01-20
        let summary = summarize_at(&seed_employees(), now());
        assert_eq!(summary.newly_hired, 1);
        assert_eq!(summary.on_probation, 1);
    }

    #[test]
    fn test_newly_hired_window_edges() {
        let now = now();
        // 30 days 10 hours rounds to 30
        assert!(is_newly_hired("2025-01-02", now));
        assert!(is_newly_hired("2025-02-01", now));
        assert!(!is_newly_hired("2024-12-31", now));
        assert!(!is_newly_hired("2025-03-01", now));
        assert!(!is_newly_hired("not a date", now));
    }

    #[test]
    fn test_hire_half_a_day_ahead_counts_as_today() {
        let now = Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap();
        assert!(is_newly_hired("2025-02-01", now));
        assert!(!is_newly_hired("2025-02-02", now));
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize_at(&[], now());
        assert_eq!(summary.total, 0);
        assert!(summary.by_department.is_empty());
        assert_eq!(summary.newly_hired, 0);
    }
}
