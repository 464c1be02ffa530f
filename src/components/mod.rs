//! UI Components
//!
//! Leptos components for the board.

mod assignment_list;
mod assignment_row;
mod new_assignment_form;
mod priority_selector;
mod stats_panel;
mod view_controls;

pub use assignment_list::AssignmentList;
pub use assignment_row::AssignmentRow;
pub use new_assignment_form::NewAssignmentForm;
pub use priority_selector::PrioritySelector;
pub use stats_panel::StatsPanel;
pub use view_controls::ViewControls;
