//! View Controls Component
//!
//! Search box, completion filter and sort selector. Each control writes a
//! single store field; the list recomputes from those.

use leptos::prelude::*;

use crate::models::{Filter, SortBy, FILTERS, SORT_KEYS};
use crate::store::{store_set_filter, store_set_search, store_set_sort, use_board_store, BoardStateStoreFields};

#[component]
pub fn ViewControls() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="view-controls">
            <label for="search-assignments" class="sr-only">"Search assignments"</label>
            <input
                id="search-assignments"
                type="text"
                class="search-input"
                placeholder="Search assignments..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />

            <select
                class="filter-select"
                prop:value=move || store.filter().get().as_str()
                on:change=move |ev| store_set_filter(&store, Filter::from_str(&event_target_value(&ev)))
            >
                {FILTERS.iter().map(|f| view! {
                    <option value=f.as_str()>{f.label()}</option>
                }).collect_view()}
            </select>

            <label for="sort-by" class="sort-label">"Sort by:"</label>
            <select
                id="sort-by"
                class="sort-select"
                prop:value=move || store.sort_by().get().as_str()
                on:change=move |ev| store_set_sort(&store, SortBy::from_str(&event_target_value(&ev)))
            >
                {SORT_KEYS.iter().map(|s| view! {
                    <option value=s.as_str()>{s.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
