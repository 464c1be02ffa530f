//! Assignment List Component
//!
//! Renders the derived view and hosts drag-and-drop reordering.
//! Uses leptos-dragdrop for the gesture; drops are applied to the canonical
//! list through the store, whatever sort is active.

use leptos::prelude::*;

use leptos_dragdrop::*;

use crate::components::AssignmentRow;
use crate::config::use_board_config;
use crate::store::{store_drop_on, store_end_drag, store_start_drag, use_board_store, BoardStateStoreFields};
use crate::view::{derive_view, EmptyState};

#[component]
pub fn AssignmentList() -> impl IntoView {
    let store = use_board_store();
    let config = use_board_config();

    let dnd = create_dnd_signals::<String>(config.drag_threshold_px);
    bind_global_handlers(
        dnd,
        move |id: String| store_start_drag(&store, &id),
        move |_dragged: String, target: String| store_drop_on(&store, &target),
        move || store_end_drag(&store),
    );

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        let sort_by = store.sort_by().get();
        let search = store.search_term().get();
        store.assignments().with(|list| derive_view(list, filter, &search, sort_by))
    });

    let empty_state = move || {
        let state = EmptyState::for_controls(store.filter().get(), &store.search_term().get());
        let icon = match state {
            EmptyState::NoResults(_) => "🔍",
            EmptyState::AllCaughtUp(_) => "✓",
        };
        view! {
            <div class="empty-state">
                <div class="empty-icon">{icon}</div>
                <h3>{state.title()}</h3>
                <p>{state.message()}</p>
            </div>
        }
    };

    view! {
        <div class=move || if dnd.any_dragging() { "assignment-list dragging" } else { "assignment-list" }>
            <Show when=move || !visible.with(|v| v.is_empty()) fallback=empty_state>
                <For
                    each=move || visible.get()
                    // completed is part of the key so toggles re-render the row
                    key=|a| (a.id.clone(), a.completed)
                    children=move |assignment| view! { <AssignmentRow assignment=assignment dnd=dnd /> }
                />
            </Show>
        </div>
    }
}
