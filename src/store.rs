//! Board Store
//!
//! Wraps `BoardState` in a reactive_stores `Store` shared through context.
//! UI events go through the helpers below, which apply the pure transitions
//! from `board.rs` and log what happened.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info};

use crate::board::BoardState;
use crate::models::{Filter, Priority, SortBy};

pub use crate::board::BoardStateStoreFields;

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Form
// ========================

pub fn store_set_draft_text(store: &BoardStore, text: String) {
    store.write().set_draft_text(text);
}

pub fn store_set_draft_due_date(store: &BoardStore, due_date: String) {
    store.write().set_draft_due_date(due_date);
}

pub fn store_set_draft_priority(store: &BoardStore, priority: Priority) {
    store.write().set_draft_priority(priority);
}

/// Submit the draft form. Returns whether an assignment was added.
pub fn store_add_assignment(store: &BoardStore) -> bool {
    let now_ms = chrono::Utc::now().timestamp_millis();
    let mut state = store.write();
    match state.add_assignment(now_ms) {
        Ok(added) => {
            info!(id = %added.id, due = %added.due_date, priority = added.priority.as_str(), "assignment added");
            true
        }
        Err(e) => {
            debug!(error = %e, "assignment rejected");
            false
        }
    }
}

// ========================
// Rows
// ========================

pub fn store_toggle_complete(store: &BoardStore, id: &str) {
    let changed = store.write().toggle_complete(id);
    debug!(id, changed, "toggle complete");
}

pub fn store_delete(store: &BoardStore, id: &str) {
    if store.write().delete(id) {
        info!(id, "assignment deleted");
    }
}

// ========================
// Drag and drop
// ========================

pub fn store_start_drag(store: &BoardStore, id: &str) {
    debug!(id, "drag start");
    store.write().start_drag(id);
}

pub fn store_drop_on(store: &BoardStore, target_id: &str) {
    let moved = store.write().drop_on(target_id);
    debug!(target = target_id, moved, "drop");
}

pub fn store_end_drag(store: &BoardStore) {
    if store.with_untracked(|s| s.dragged_id().is_some()) {
        debug!("drag end");
        store.write().end_drag();
    }
}

// ========================
// View controls
// ========================

pub fn store_set_filter(store: &BoardStore, filter: Filter) {
    store.filter().set(filter);
}

pub fn store_set_sort(store: &BoardStore, sort_by: SortBy) {
    store.sort_by().set(sort_by);
}

pub fn store_set_search(store: &BoardStore, term: String) {
    store.search_term().set(term);
}
