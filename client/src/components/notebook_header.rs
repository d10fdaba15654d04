//! Top bar with the notebook title, chunk count, and backend health.

#[cfg(test)]
#[path = "notebook_header_test.rs"]
mod notebook_header_test;

use leptos::prelude::*;

use crate::state::stats::StatsState;

#[component]
pub fn NotebookHeader() -> impl IntoView {
    let stats = expect_context::<RwSignal<StatsState>>();

    let healthy = move || stats.get().healthy;

    view! {
        <header class="notebook-header">
            <div class="notebook-header__brand">
                <span class="notebook-header__logo">"📓"</span>
                <h1>"RAG Bot Notebook"</h1>
            </div>
            <div class="notebook-header__status">
                {move || stats.get().chunk_count().map(|n| view! { <span class="badge">{chunk_label(n)}</span> })}
                <span class="notebook-header__health">
                    <span class=move || health_dot_class(healthy())></span>
                    {move || health_label(healthy())}
                </span>
            </div>
        </header>
    }
}

pub fn chunk_label(count: u64) -> String {
    format!("{count} chunks")
}

pub fn health_label(healthy: bool) -> &'static str {
    if healthy { "Connected" } else { "Disconnected" }
}

pub fn health_dot_class(healthy: bool) -> &'static str {
    if healthy {
        "health-dot health-dot--ok"
    } else {
        "health-dot health-dot--down"
    }
}
