//! New Assignment Form Component
//!
//! Description, due date and priority inputs. Validation lives in the board;
//! this form only shows the resulting error.

use leptos::prelude::*;

use crate::components::PrioritySelector;
use crate::store::{
    store_add_assignment, store_set_draft_due_date, store_set_draft_priority, store_set_draft_text,
    use_board_store, BoardStateStoreFields,
};

#[component]
pub fn NewAssignmentForm() -> impl IntoView {
    let store = use_board_store();

    let draft_text = move || store.draft().with(|d| d.text.clone());
    let draft_due = move || store.draft().with(|d| d.due_date.clone());
    let draft_priority = Signal::derive(move || store.draft().with(|d| d.priority));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_assignment(&store);
    };

    view! {
        <section class="panel">
            <h2>"Add New Assignment"</h2>
            <form class="new-assignment-form" on:submit=on_submit>
                <div class="field">
                    <label for="assignment-text">"Description"</label>
                    <input
                        id="assignment-text"
                        type="text"
                        placeholder="e.g., Finish chemistry report"
                        prop:value=draft_text
                        on:input=move |ev| store_set_draft_text(&store, event_target_value(&ev))
                    />
                </div>
                <div class="field-row">
                    <div class="field">
                        <label for="due-date">"Due Date"</label>
                        <input
                            id="due-date"
                            type="date"
                            prop:value=draft_due
                            on:input=move |ev| store_set_draft_due_date(&store, event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="priority">"Priority"</label>
                        <PrioritySelector
                            current=draft_priority
                            on_change=move |p| store_set_draft_priority(&store, p)
                        />
                    </div>
                </div>

                {move || store.error().get().map(|e| view! {
                    <div class="form-error" role="alert">{e.to_string()}</div>
                })}

                <button type="submit" class="add-btn">"+ Add Assignment"</button>
            </form>
        </section>
    }
}
