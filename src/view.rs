//! Derived View
//!
//! Search, filter and sort over the canonical list, plus the statistics and
//! empty-list messages computed from it. Nothing here mutates the board.

use crate::models::{Assignment, Filter, SortBy};

/// Visible rows for the given controls, as a sorted copy.
///
/// Search runs first (case-insensitive substring on the text, blank term
/// passes everything), then the completion filter, then a stable sort.
pub fn derive_view(assignments: &[Assignment], filter: Filter, search_term: &str, sort_by: SortBy) -> Vec<Assignment> {
    let needle = search_term.to_lowercase();
    let searching = !search_term.trim().is_empty();

    let mut result: Vec<Assignment> = assignments
        .iter()
        .filter(|a| !searching || a.text.to_lowercase().contains(&needle))
        .filter(|a| filter.matches(a))
        .cloned()
        .collect();

    // sort_by_key is stable
    match sort_by {
        SortBy::DueDate => result.sort_by_key(|a| a.due_date),
        SortBy::Priority => result.sort_by_key(|a| a.priority.rank()),
    }
    result
}

/// Completion counts over the full list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl Stats {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        Self {
            completed: assignments.iter().filter(|a| a.completed).count(),
            total: assignments.len(),
        }
    }

    /// Percentage completed, 0 for an empty board
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn progress_rounded(&self) -> u32 {
        self.progress().round() as u32
    }

    pub fn summary(&self) -> String {
        format!("{} of {} assignments completed.", self.completed, self.total)
    }
}

/// What to show when the derived view is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoResults(String),
    AllCaughtUp(Filter),
}

impl EmptyState {
    /// Any non-empty term, even whitespace, counts as searching
    pub fn for_controls(filter: Filter, search_term: &str) -> Self {
        if search_term.is_empty() {
            EmptyState::AllCaughtUp(filter)
        } else {
            EmptyState::NoResults(search_term.to_string())
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoResults(_) => "No Results Found",
            EmptyState::AllCaughtUp(_) => "All Caught Up!",
        }
    }

    pub fn message(&self) -> String {
        match self {
            EmptyState::NoResults(term) => {
                format!("Your search for \"{}\" did not match any assignments.", term)
            }
            EmptyState::AllCaughtUp(Filter::All) => {
                "You have no assignments. Add one to get started.".to_string()
            }
            EmptyState::AllCaughtUp(Filter::Active) => "You have no active assignments.".to_string(),
            EmptyState::AllCaughtUp(Filter::Completed) => {
                "You have no completed assignments.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    fn make(id: &str, text: &str, due: (i32, u32, u32), priority: Priority, completed: bool) -> Assignment {
        let mut a = Assignment::new(id, text, NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(), priority);
        a.completed = completed;
        a
    }

    fn ids(list: &[Assignment]) -> Vec<&str> {
        list.iter().map(|a| a.id.as_str()).collect()
    }

    fn sample() -> Vec<Assignment> {
        vec![
            make("1", "Math worksheet", (2024, 10, 27), Priority::High, false),
            make("2", "History reading", (2024, 10, 25), Priority::Medium, true),
            make("3", "Physics lab", (2024, 10, 26), Priority::High, true),
            make("4", "English essay", (2024, 11, 1), Priority::Low, false),
            make("5", "Chemistry quiz", (2024, 10, 28), Priority::Low, true),
        ]
    }

    #[test]
    fn test_sort_by_due_date() {
        let list = sample();
        let view = derive_view(&list, Filter::All, "", SortBy::DueDate);
        assert_eq!(ids(&view), vec!["2", "3", "1", "5", "4"]);
        // canonical order untouched
        assert_eq!(ids(&list), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let view = derive_view(&sample(), Filter::All, "", SortBy::Priority);
        assert_eq!(ids(&view), vec!["1", "3", "2", "4", "5"]);
    }

    #[test]
    fn test_due_date_ties_keep_relative_order() {
        let list = vec![
            make("x", "Later", (2024, 10, 30), Priority::Low, false),
            make("b", "Tie second", (2024, 10, 27), Priority::Low, false),
            make("a", "Tie first", (2024, 10, 27), Priority::High, false),
        ];
        let view = derive_view(&list, Filter::All, "", SortBy::DueDate);
        assert_eq!(ids(&view), vec!["b", "a", "x"]);
    }

    #[test]
    fn test_filters() {
        let list = sample();
        assert_eq!(derive_view(&list, Filter::Active, "", SortBy::DueDate).len(), 2);
        assert_eq!(derive_view(&list, Filter::Completed, "", SortBy::DueDate).len(), 3);
        assert_eq!(derive_view(&list, Filter::All, "", SortBy::DueDate).len(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let view = derive_view(&sample(), Filter::All, "MATH", SortBy::DueDate);
        assert_eq!(ids(&view), vec!["1"]);
    }

    #[test]
    fn test_blank_search_passes_everything() {
        assert_eq!(derive_view(&sample(), Filter::All, "   ", SortBy::DueDate).len(), 5);
    }

    #[test]
    fn test_search_and_filter_compose() {
        let list = sample();
        let view = derive_view(&list, Filter::Active, "math", SortBy::DueDate);
        assert_eq!(ids(&view), vec!["1"]);

        let view = derive_view(&list, Filter::Completed, "math", SortBy::DueDate);
        assert!(view.is_empty());
    }

    #[test]
    fn test_progress() {
        assert_eq!(Stats::from_assignments(&[]).progress(), 0.0);

        let mut list = sample();
        list.truncate(4);
        list[2].completed = false;
        let stats = Stats::from_assignments(&list);
        assert_eq!(stats, Stats { completed: 1, total: 4 });
        assert_eq!(stats.progress(), 25.0);
        assert_eq!(stats.summary(), "1 of 4 assignments completed.");
    }

    #[test]
    fn test_progress_rounding() {
        let stats = Stats { completed: 2, total: 3 };
        assert_eq!(stats.progress_rounded(), 67);
    }

    #[test]
    fn test_empty_state_messages() {
        let searching = EmptyState::for_controls(Filter::Active, "calc");
        assert_eq!(searching.title(), "No Results Found");
        assert_eq!(searching.message(), "Your search for \"calc\" did not match any assignments.");

        // whitespace is still a search term here, though it filters nothing
        let spaces = EmptyState::for_controls(Filter::Active, "   ");
        assert_eq!(spaces, EmptyState::NoResults("   ".to_string()));
        assert_eq!(spaces.title(), "No Results Found");

        let idle = EmptyState::for_controls(Filter::Completed, "");
        assert_eq!(idle.title(), "All Caught Up!");
        assert_eq!(idle.message(), "You have no completed assignments.");
        assert_eq!(
            EmptyState::for_controls(Filter::All, "").message(),
            "You have no assignments. Add one to get started."
        );
    }
}
