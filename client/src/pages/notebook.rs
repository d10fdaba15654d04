//! Notebook page at `/app`: sources, chat, and studio side by side.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every visit starts from an empty knowledge base. On mount the page drops
//! whatever the backend still holds, probes health, and then refreshes stats
//! on a fixed interval until the page unmounts.

#[cfg(test)]
#[path = "notebook_test.rs"]
mod notebook_test;

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::notebook_header::NotebookHeader;
use crate::components::sources_panel::SourcesPanel;
use crate::components::studio_panel::StudioPanel;
use crate::net::api::api_base_url;
use crate::state::chat::ChatState;
use crate::state::sources::SourcesState;
use crate::state::stats::StatsState;
use crate::state::ui::UiState;

#[component]
pub fn NotebookPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sources = expect_context::<RwSignal<SourcesState>>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Set once the startup health probe has answered either way.
    let probed = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::clear_knowledge_base().await {
                log::warn!("startup clear failed: {e}");
            }
            sources.update(SourcesState::clear);
            match crate::net::api::health_check().await {
                Ok(snapshot) => stats.update(|s| s.mark_healthy(snapshot)),
                Err(e) => {
                    log::error!("health check failed: {e}");
                    stats.update(StatsState::mark_unreachable);
                }
            }
            probed.set(true);
        });

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(crate::state::stats::STATS_POLL_INTERVAL).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                match crate::net::api::get_stats().await {
                    Ok(snapshot) => {
                        stats.try_update(|s| s.replace(snapshot));
                    }
                    Err(e) => log::warn!("stats refresh failed: {e}"),
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));

        let unload = window_event_listener(leptos::ev::beforeunload, move |ev| {
            if sources.with_untracked(|s| !s.is_empty()) {
                ev.prevent_default();
                ev.set_return_value("");
            }
        });
        on_cleanup(move || unload.remove());
    }

    // Emptying the source list ends the conversation built on it.
    let source_count = Memo::new(move |_| sources.with(|s| s.docs.len()));
    let last_source_count = RwSignal::new(0_usize);
    Effect::new(move || {
        let next = source_count.get();
        let prev = last_source_count.get_untracked();
        last_source_count.set(next);
        if should_reset_chat(prev, next, chat.with_untracked(|c| !c.messages.is_empty())) {
            chat.update(ChatState::clear);
            ui.update(UiState::reset_conversation);
        }
    });

    view! {
        <div class="notebook-page">
            <NotebookHeader/>
            <Show when=move || probed.get() && !stats.get().healthy>
                <div class="toast toast--error" role="alert">{unreachable_notice(api_base_url())}</div>
            </Show>
            <main class="notebook-page__columns">
                <SourcesPanel/>
                <ChatPanel/>
                <StudioPanel/>
            </main>
        </div>
    }
}

/// The chat resets when the last source goes away and there is a log to drop.
pub fn should_reset_chat(prev_sources: usize, next_sources: usize, has_messages: bool) -> bool {
    prev_sources > 0 && next_sources == 0 && has_messages
}

pub fn unreachable_notice(base_url: &str) -> String {
    format!("API connection failed. Make sure the backend is running at {base_url}")
}
