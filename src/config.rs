//! Board Configuration
//!
//! Startup defaults for the board, provided to components via context.

use leptos::prelude::*;
use serde::Deserialize;

use crate::models::{Filter, Priority, SortBy};

/// Movement in pixels before a mousedown becomes a drag
const DEFAULT_DRAG_THRESHOLD_PX: i32 = 5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Priority the form starts with and resets to after a submit
    pub default_priority: Priority,
    pub default_filter: Filter,
    pub default_sort: SortBy,
    /// Start with the four example assignments
    pub seed_examples: bool,
    pub drag_threshold_px: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_priority: Priority::Medium,
            default_filter: Filter::All,
            default_sort: SortBy::DueDate,
            seed_examples: true,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

/// Get the board config from context
pub fn use_board_config() -> BoardConfig {
    expect_context::<BoardConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.default_filter, Filter::All);
        assert_eq!(config.default_sort, SortBy::DueDate);
        assert!(config.seed_examples);
        assert_eq!(config.drag_threshold_px, 5);
    }

    #[test]
    fn test_partial_override() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"default_sort":"priority","seed_examples":false}"#).unwrap();
        assert_eq!(config.default_sort, SortBy::Priority);
        assert!(!config.seed_examples);
        assert_eq!(config.default_priority, Priority::Medium);
    }
}
