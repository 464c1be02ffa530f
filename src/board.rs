//! Board State
//!
//! The single owned state record behind the board and every transition on it.
//! Components never touch the list directly; they go through these methods
//! (see `store.rs`), so all behaviour here is testable without rendering.

use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::dates::parse_input_date;
use crate::error::{BoardError, BoardResult};
use crate::models::{Assignment, Filter, Priority, SortBy};

/// Uncommitted form input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    /// Raw `YYYY-MM-DD` value from the date input
    pub due_date: String,
    pub priority: Priority,
}

impl Draft {
    pub fn new(priority: Priority) -> Self {
        Self {
            priority,
            ..Default::default()
        }
    }
}

/// Drag gesture state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Canonical (drag) order
    pub assignments: Vec<Assignment>,
    pub draft: Draft,
    pub filter: Filter,
    pub sort_by: SortBy,
    pub search_term: String,
    /// Last validation failure, cleared by the next edit or successful add
    pub error: Option<BoardError>,
    pub drag: DragState,
    /// Priority the draft resets to
    pub default_priority: Priority,
}

impl BoardState {
    pub fn new(config: &BoardConfig) -> Self {
        let assignments = if config.seed_examples { seed_assignments() } else { Vec::new() };
        Self {
            assignments,
            draft: Draft::new(config.default_priority),
            filter: config.default_filter,
            sort_by: config.default_sort,
            default_priority: config.default_priority,
            ..Default::default()
        }
    }

    /// Board over an explicit list, other fields at their defaults
    pub fn with_assignments(assignments: Vec<Assignment>) -> Self {
        Self {
            assignments,
            ..Default::default()
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.assignments.iter().position(|a| a.id == id)
    }

    // ========================
    // Draft editing
    // ========================

    pub fn set_draft_text(&mut self, text: String) {
        self.draft.text = text;
        self.error = None;
    }

    pub fn set_draft_due_date(&mut self, due_date: String) {
        self.draft.due_date = due_date;
        self.error = None;
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Checks the draft in submit order, returning the parsed due date
    pub fn validate_draft(&self) -> BoardResult<chrono::NaiveDate> {
        if self.draft.text.trim().is_empty() {
            return Err(BoardError::EmptyDescription);
        }
        if self.draft.due_date.is_empty() {
            return Err(BoardError::MissingDueDate);
        }
        parse_input_date(&self.draft.due_date)
            .ok_or_else(|| BoardError::InvalidDueDate(self.draft.due_date.clone()))
    }

    // ========================
    // Assignment operations
    // ========================

    /// Commit the draft as a new assignment at the head of the list.
    ///
    /// `now_ms` seeds the id; it is bumped past any id already on the board.
    /// On failure the list is untouched and the error is kept for display.
    pub fn add_assignment(&mut self, now_ms: i64) -> BoardResult<&Assignment> {
        let due_date = match self.validate_draft() {
            Ok(date) => date,
            Err(e) => {
                self.error = Some(e.clone());
                return Err(e);
            }
        };

        let id = self.next_id(now_ms);
        let draft = std::mem::replace(&mut self.draft, Draft::new(self.default_priority));
        self.assignments
            .insert(0, Assignment::new(id, draft.text, due_date, draft.priority));
        self.error = None;
        Ok(&self.assignments[0])
    }

    fn next_id(&self, now_ms: i64) -> String {
        let mut stamp = now_ms;
        loop {
            let id = stamp.to_string();
            if self.position(&id).is_none() {
                return id;
            }
            stamp += 1;
        }
    }

    /// Flip `completed`; returns false if the id is unknown
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        match self.assignments.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                a.completed = !a.completed;
                true
            }
            None => false,
        }
    }

    /// Remove by id; returns false if the id is unknown
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.assignments.len();
        self.assignments.retain(|a| a.id != id);
        self.assignments.len() != before
    }

    // ========================
    // Drag and drop
    // ========================

    pub fn dragged_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    pub fn start_drag(&mut self, id: &str) {
        self.drag = DragState::Dragging(id.to_string());
    }

    /// Whether hovering `target_id` offers a drop. Never mutates.
    pub fn can_drop_on(&self, target_id: &str) -> bool {
        matches!(self.dragged_id(), Some(dragged) if dragged != target_id)
            && self.position(target_id).is_some()
    }

    /// Move the dragged assignment into the target's current slot.
    ///
    /// The target and everything after it shift one toward the tail. Dropping
    /// onto itself, with nothing dragged, or with a stale id is a no-op.
    pub fn drop_on(&mut self, target_id: &str) -> bool {
        let Some(dragged) = self.dragged_id() else {
            return false;
        };
        if dragged == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(dragged), self.position(target_id)) else {
            return false;
        };

        let moved = self.assignments.remove(from);
        self.assignments.insert(to, moved);
        self.drag = DragState::Idle;
        true
    }

    /// Gesture released or cancelled
    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }
}

/// Example assignments present at startup
pub fn seed_assignments() -> Vec<Assignment> {
    let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    let mut physics = Assignment::new("3", "Prepare for Physics Lab", date(2024, 10, 26), Priority::High);
    physics.completed = true;
    vec![
        Assignment::new("1", "Complete Math Homework 5", date(2024, 10, 27), Priority::High),
        Assignment::new("2", "Read Chapter 4 of History book", date(2024, 10, 25), Priority::Medium),
        physics,
        Assignment::new("4", "Start drafting English essay", date(2024, 11, 1), Priority::Low),
    ]
}
