//! Board Models
//!
//! Assignment entity and the value types behind the view controls.

use chrono::NaiveDate;
use serde::Deserialize;

/// Assignment priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Unknown values fall back to the default priority
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Sort rank: high first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// CSS class for the priority badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::Low => "priority-badge low",
            Priority::Medium => "priority-badge medium",
            Priority::High => "priority-badge high",
        }
    }
}

/// Select options, in display order
pub const PRIORITIES: &[Priority] = &[Priority::Low, Priority::Medium, Priority::High];

/// Completion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => Filter::Active,
            "completed" => Filter::Completed,
            _ => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, assignment: &Assignment) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !assignment.completed,
            Filter::Completed => assignment.completed,
        }
    }
}

pub const FILTERS: &[Filter] = &[Filter::All, Filter::Active, Filter::Completed];

/// Sort key for the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
pub enum SortBy {
    #[default]
    #[serde(rename = "dueDate")]
    DueDate,
    #[serde(rename = "priority")]
    Priority,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::DueDate => "dueDate",
            SortBy::Priority => "priority",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "priority" => SortBy::Priority,
            _ => SortBy::DueDate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::DueDate => "Sort by Due Date",
            SortBy::Priority => "Sort by Priority",
        }
    }
}

pub const SORT_KEYS: &[SortBy] = &[SortBy::DueDate, SortBy::Priority];

/// A single school assignment
///
/// Only `completed` changes after creation; position in the board's list is
/// the user's drag order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Opaque id, unique within the board
    pub id: String,
    pub text: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

impl Assignment {
    pub fn new(id: impl Into<String>, text: impl Into<String>, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            due_date,
            priority,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_rank_puts_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_string_forms() {
        assert_eq!(Priority::from_str("high"), Priority::High);
        assert_eq!(Priority::from_str("bogus"), Priority::Medium);
        assert_eq!(Filter::from_str(Filter::Completed.as_str()), Filter::Completed);
        assert_eq!(SortBy::from_str("priority"), SortBy::Priority);
        assert_eq!(SortBy::DueDate.as_str(), "dueDate");
    }

    #[test]
    fn test_config_string_forms_deserialize() {
        let p: Priority = serde_json::from_str(r#""high""#).unwrap();
        let f: Filter = serde_json::from_str(r#""completed""#).unwrap();
        let s: SortBy = serde_json::from_str(r#""dueDate""#).unwrap();
        assert_eq!((p, f, s), (Priority::High, Filter::Completed, SortBy::DueDate));
    }

    #[test]
    fn test_filter_matches() {
        let due = NaiveDate::from_ymd_opt(2024, 10, 27).unwrap();
        let mut a = Assignment::new("1", "Math", due, Priority::Low);
        assert!(Filter::All.matches(&a));
        assert!(Filter::Active.matches(&a));
        assert!(!Filter::Completed.matches(&a));
        a.completed = true;
        assert!(!Filter::Active.matches(&a));
        assert!(Filter::Completed.matches(&a));
    }
}
