//! Assignment Board App
//!
//! Root component: owns the store and lays out the form, statistics, view
//! controls and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::BoardState;
use crate::components::{AssignmentList, NewAssignmentForm, StatsPanel, ViewControls};
use crate::config::BoardConfig;

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::new(&config));
    tracing::info!(
        assignments = store.with_untracked(|s| s.assignments.len()),
        "board initialised"
    );

    // Provide context to all children
    provide_context(config);
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Assignment Tracker"</h1>
                <p class="tagline">"Stay organized and conquer your workload."</p>
            </header>

            <main class="board">
                // Right: form and statistics
                <aside class="board-sidebar">
                    <NewAssignmentForm />
                    <StatsPanel />
                </aside>

                // Left: controls and list
                <section class="board-main">
                    <ViewControls />
                    <AssignmentList />
                </section>
            </main>
        </div>
    }
}
