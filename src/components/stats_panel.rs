//! Statistics Panel Component

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};
use crate::view::Stats;

/// Progress bar and completion count over the whole board
#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_board_store();
    let stats = Memo::new(move |_| store.assignments().with(|list| Stats::from_assignments(list)));

    view! {
        <section class="panel">
            <h2>"Statistics"</h2>
            <div class="progress-header">
                <span>"Progress"</span>
                <span class="progress-value">{move || format!("{}%", stats.get().progress_rounded())}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", stats.get().progress())
                />
            </div>
            <p class="stats-summary">{move || stats.get().summary()}</p>
        </section>
    }
}
