//! Left panel: document upload, search, per-source toggles, and "clear all".
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploads go straight to the backend's ingestion endpoint; the list here only
//! mirrors what was sent. Clearing drops the backend knowledge base first and
//! resets local state only once that succeeds.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::sources::{SourceDoc, SourcesState};
use crate::state::stats::StatsState;
use crate::state::ui::UiState;
use crate::util::upload::accept_attribute;

/// Sources column with upload and management controls.
#[component]
pub fn SourcesPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sources = expect_context::<RwSignal<SourcesState>>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_add = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = file_ref.get() {
                el.click();
            }
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let files = crate::util::upload::take_selected_files(&ev);
            if files.is_empty() || sources.with_untracked(|s| s.uploading) {
                return;
            }
            sources.update(|s| s.uploading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_documents(&files, true, false).await {
                    Ok(resp) => {
                        let docs = files.iter().map(crate::util::upload::source_doc).collect::<Vec<_>>();
                        log::info!("uploaded {} document(s)", docs.len());
                        sources.update(|s| s.add_uploaded(docs));
                        stats.update(|s| s.apply_upload(&resp));
                    }
                    Err(e) => {
                        log::error!("upload failed: {e}");
                        crate::util::delivery::alert(&format!("Upload failed: {e}"));
                    }
                }
                sources.update(|s| s.uploading = false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_confirm_clear = move |_| {
        ui.update(|u| u.confirm_clear_open = false);
        sources.update(|s| s.clearing = true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::clear_knowledge_base().await {
                Ok(_) => {
                    reset_notebook(chat, sources, ui);
                    match crate::net::api::get_stats().await {
                        Ok(snapshot) => stats.update(|s| s.replace(snapshot)),
                        Err(e) => log::warn!("stats refresh failed: {e}"),
                    }
                }
                Err(e) => {
                    log::error!("clear failed: {e}");
                    crate::util::delivery::alert(&format!("Failed to clear: {e}"));
                }
            }
            sources.update(|s| s.clearing = false);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = stats;
            reset_notebook(chat, sources, ui);
            sources.update(|s| s.clearing = false);
        }
    };

    let busy = move || sources.with(|s| s.uploading || s.clearing);

    view! {
        <aside class="sources-panel">
            <header class="sources-panel__header">
                <h2>"Sources"</h2>
            </header>

            <input
                class="hidden"
                type="file"
                multiple=true
                accept=accept_attribute()
                node_ref=file_ref
                on:change=on_files
            />
            <div class="sources-panel__actions">
                <button class="btn sources-panel__add" disabled=busy on:click=on_add>
                    {move || if sources.get().uploading { "Uploading..." } else { "+ Add sources" }}
                </button>
                <button
                    class="btn sources-panel__new-chat"
                    disabled=busy
                    on:click=move |_| ui.update(|u| u.confirm_clear_open = true)
                >
                    {move || if sources.get().clearing { "Clearing..." } else { "New Chat" }}
                </button>
            </div>

            <input
                class="sources-panel__search"
                type="search"
                placeholder="Search sources"
                prop:value=move || sources.get().query
                on:input=move |ev| sources.update(|s| s.query = event_target_value(&ev))
            />

            <div class="sources-panel__list">
                {move || {
                    let state = sources.get();
                    if state.is_empty() {
                        return view! {
                            <div class="sources-panel__empty">
                                <p>"No sources yet"</p>
                                <p class="sources-panel__hint">"Upload documents to get started"</p>
                            </div>
                        }
                            .into_any();
                    }
                    state
                        .visible()
                        .into_iter()
                        .map(|doc| view! { <SourceCard doc=doc sources=sources/> })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <Show when=move || ui.get().confirm_clear_open>
                <div class="dialog-backdrop" on:click=move |_| ui.update(|u| u.confirm_clear_open = false)></div>
                <div class="dialog confirm-dialog" role="alertdialog">
                    <h3>"Clear All Data?"</h3>
                    <p>"This will clear all uploaded documents and chat history. This action cannot be undone."</p>
                    <div class="confirm-dialog__actions">
                        <button class="btn" on:click=move |_| ui.update(|u| u.confirm_clear_open = false)>
                            "Cancel"
                        </button>
                        <button class="btn btn--danger" on:click=on_confirm_clear>
                            "Clear All"
                        </button>
                    </div>
                </div>
            </Show>
        </aside>
    }
}

#[component]
fn SourceCard(doc: SourceDoc, sources: RwSignal<SourcesState>) -> impl IntoView {
    let toggle_id = doc.id.clone();
    let remove_id = doc.id.clone();

    view! {
        <div class="source-card" class:source-card--off=!doc.selected>
            <input
                type="checkbox"
                prop:checked=doc.selected
                on:change=move |_| sources.update(|s| s.toggle(&toggle_id))
            />
            <div class="source-card__body">
                <span class="source-card__name" title=doc.name.clone()>{doc.name.clone()}</span>
                <span class="source-card__size">{doc.size_label()}</span>
            </div>
            <button
                class="btn btn--ghost source-card__remove"
                title="Remove source"
                on:click=move |_| sources.update(|s| s.remove(&remove_id))
            >
                "✕"
            </button>
        </div>
    }
}

/// Local reset after the knowledge base was dropped.
fn reset_notebook(chat: RwSignal<ChatState>, sources: RwSignal<SourcesState>, ui: RwSignal<UiState>) {
    sources.update(SourcesState::clear);
    chat.update(ChatState::clear);
    ui.update(UiState::reset_conversation);
}
