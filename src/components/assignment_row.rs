//! Assignment Row Component
//!
//! A single draggable row: grip, completion toggle, text, due countdown,
//! priority badge and delete button.

use leptos::prelude::*;

use leptos_dragdrop::{make_on_item_mouseenter, make_on_mousedown, make_on_mouseleave, DndSignals};

use crate::dates::days_remaining_from_today;
use crate::models::Assignment;
use crate::store::{store_delete, store_toggle_complete, use_board_store};

#[component]
pub fn AssignmentRow(assignment: Assignment, dnd: DndSignals<String>) -> impl IntoView {
    let store = use_board_store();

    let id = assignment.id.clone();
    let completed = assignment.completed;
    let priority = assignment.priority;

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone(), move |target: &String| {
        store.with_untracked(|s| s.can_drop_on(target))
    });
    let on_mouseleave = make_on_mouseleave(dnd);

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("assignment-row");
            if completed { c.push_str(" completed"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            if dnd.is_drop_target(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let toggle_id = id.clone();
    let delete_id = id;

    view! {
        <div
            class=row_class
            aria-label=format!("Assignment: {}", assignment.text)
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <span class="drag-handle" aria-label="Drag to reorder">"⋮⋮"</span>

            <button
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                aria-label=if completed { "Mark as not complete" } else { "Mark as complete" }
                on:click=move |_| store_toggle_complete(&store, &toggle_id)
            >
                {completed.then_some("✓")}
            </button>

            <div class="assignment-body">
                <p class="assignment-text">{assignment.text.clone()}</p>
                <div class="assignment-meta">
                    <span class="due">"📅 " {days_remaining_from_today(assignment.due_date)}</span>
                    <span class=priority.badge_class()>{priority.label()}</span>
                </div>
            </div>

            <button
                class="delete-btn"
                aria-label="Delete assignment"
                on:click=move |_| store_delete(&store, &delete_id)
            >
                "×"
            </button>
        </div>
    }
}
