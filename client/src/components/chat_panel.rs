//! Center chat panel: message log, composer, and export entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Typed questions are shown as typed and sent to the backend wrapped in the
//! Q&A guidelines. Submission goes through [`ChatState`]'s single-flight state
//! machine, so the composer is locked while a request is pending.

use leptos::prelude::*;

use crate::components::export_dialog::ExportDialog;
use crate::components::message_bubble::MessageBubble;
use crate::components::quick_actions::QuickActions;
use crate::state::chat::ChatState;
#[cfg(feature = "csr")]
use crate::state::chat::Submission;
use crate::state::sources::SourcesState;
use crate::state::stats::StatsState;
use crate::state::ui::UiState;
use crate::util::prompts::wrap_query;
use crate::util::upload::accept_attribute;

/// Chat panel showing the conversation and the question composer.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sources = expect_context::<RwSignal<SourcesState>>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_pending()));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        if send_question(chat, text.clone(), wrap_query(&text)) {
            input.set(String::new());
        }
    };

    let on_input = move |ev| {
        input.set(event_target_value(&ev));
        if chat.with_untracked(|c| c.error().is_some()) {
            chat.update(ChatState::acknowledge_error);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_attach = move |_| {
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
            let text = input.get_untracked();
            if files.is_empty() || text.trim().is_empty() {
                log::info!("upload-and-ask needs both files and a question");
                return;
            }
            let Some(submission) = chat.try_update(|c| c.begin_submit(text.clone(), wrap_query(&text))).flatten() else {
                return;
            };
            input.set(String::new());
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::upload_and_ask(&files, &submission.prompt, true).await;
                finish_submission(chat, &submission, outcome);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let pending = move || chat.get().is_pending();
    let can_send = move || !input.get().trim().is_empty() && !pending();
    let has_messages = move || chat.with(|c| !c.messages.is_empty());

    view! {
        <section class="chat-panel">
            <Show when=move || ui.get().export_open>
                <ExportDialog/>
            </Show>

            <header class="chat-panel__header">
                <h2 class="chat-panel__title">"Chat"</h2>
                <button
                    class="btn chat-panel__share"
                    title="Share chat"
                    disabled=move || !has_messages()
                    on:click=move |_| ui.update(UiState::open_export)
                >
                    "Share"
                </button>
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! { <EmptyNotebook sources=sources/> }.into_any();
                    }
                    messages
                        .into_iter()
                        .enumerate()
                        .map(|(index, message)| view! { <MessageBubble index=index message=message/> })
                        .collect_view()
                        .into_any()
                }}

                {move || {
                    pending()
                        .then(|| {
                            view! {
                                <div class="chat-panel__loading">
                                    <span class="chat-panel__dot"></span>
                                    <span class="chat-panel__dot"></span>
                                    <span class="chat-panel__dot"></span>
                                    <span>"Thinking..."</span>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="chat-panel__composer">
                <input
                    class="hidden"
                    type="file"
                    multiple=true
                    accept=accept_attribute()
                    node_ref=file_ref
                    on:change=on_files
                />
                <button class="btn chat-panel__attach" title="Upload documents" disabled=pending on:click=on_attach>
                    "📎"
                </button>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Start typing..."
                    disabled=pending
                    prop:value=move || input.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <span class="chat-panel__docs">{move || format!("{} docs", stats.get().documents_in_kb())}</span>
                <button class="btn btn--primary chat-panel__send" disabled=move || !can_send() on:click=move |_| do_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// Placeholder shown before the first question.
#[component]
fn EmptyNotebook(sources: RwSignal<SourcesState>) -> impl IntoView {
    view! {
        <div class="chat-panel__empty">
            <div class="chat-panel__empty-icon">"📖"</div>
            <h3>"Untitled notebook"</h3>
            <p class="chat-panel__source-count">{move || sources.get().count_label()}</p>
            <Show when=move || !sources.get().is_empty()>
                <div class="chat-panel__quick-actions">
                    <p class="chat-panel__quick-title">"Quick Actions"</p>
                    <div class="quick-actions">
                        <QuickActions/>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Log `display` as the user's turn and ask the backend `prompt`.
///
/// Returns `false` when the chat refused the submission (a request is already
/// pending, an error is unacknowledged, or `display` is blank).
pub(crate) fn send_question(chat: RwSignal<ChatState>, display: String, prompt: String) -> bool {
    let Some(submission) = chat.try_update(|c| c.begin_submit(display, prompt)).flatten() else {
        return false;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::ask_question(&submission.prompt).await;
        finish_submission(chat, &submission, outcome);
    });
    #[cfg(not(feature = "csr"))]
    let _ = submission;

    true
}

#[cfg(feature = "csr")]
fn finish_submission(
    chat: RwSignal<ChatState>,
    submission: &Submission,
    outcome: Result<transcript::RagResult, String>,
) {
    if let Err(e) = &outcome {
        log::error!("query failed: {e}");
    }
    let applied = chat.try_update(|c| c.complete(submission, outcome)).unwrap_or(false);
    if !applied {
        log::info!("dropped response for a cleared conversation");
    }
}
