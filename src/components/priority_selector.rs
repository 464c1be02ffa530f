//! Priority Selector Component
//!
//! Select box for the draft priority.

use leptos::prelude::*;

use crate::models::{Priority, PRIORITIES};

#[component]
pub fn PrioritySelector(
    current: Signal<Priority>,
    on_change: impl Fn(Priority) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="priority"
            class="priority-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_change(Priority::from_str(&event_target_value(&ev)))
        >
            {PRIORITIES.iter().map(|p| view! {
                <option value=p.as_str() selected=move || current.get() == *p>
                    {p.label()}
                </option>
            }).collect_view()}
        </select>
    }
}
