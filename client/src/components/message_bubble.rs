//! One chat log entry: user question, assistant answer, or error placeholder.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;
use transcript::{Message, Source};

use crate::components::markdown_view::MarkdownView;
use crate::state::ui::UiState;

/// Bubble for the message at `index` in the log.
///
/// Assistant answers with citations get a collapsible reference list; its
/// open/closed state is kept per index in [`UiState`].
#[component]
pub fn MessageBubble(index: usize, message: Message) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    if message.is_user() {
        return view! {
            <div class="message message--user">
                <div class="message__bubble">{message.content}</div>
            </div>
        }
        .into_any();
    }

    if message.error {
        return view! {
            <div class="message message--error">
                <div class="message__bubble">{message.content}</div>
            </div>
        }
        .into_any();
    }

    let sources = message.sources;
    let references = (!sources.is_empty()).then(|| {
        let label = references_label(sources.len());
        let expanded = move || ui.get().sources_expanded(index);
        view! {
            <div class="message__sources">
                <button class="message__sources-toggle" on:click=move |_| ui.update(|u| u.toggle_sources(index))>
                    {label}
                    <span class="message__chevron">{move || if expanded() { "▲" } else { "▼" }}</span>
                </button>
                {move || {
                    expanded()
                        .then(|| {
                            sources
                                .iter()
                                .enumerate()
                                .map(|(i, source)| source_view(i, source))
                                .collect_view()
                        })
                }}
            </div>
        }
    });

    view! {
        <div class="message message--assistant">
            <div class="message__bubble">
                <MarkdownView content=message.content/>
            </div>
            {references}
        </div>
    }
    .into_any()
}

fn source_view(index: usize, source: &Source) -> impl IntoView + use<> {
    let citation = source.citation(index);
    let score = percent_label(source);
    let excerpt = source.excerpt.as_deref().map(quoted);

    view! {
        <div class="message__source">
            <div class="message__source-head">
                <span class="message__source-label">{citation}</span>
                {score.map(|s| view! { <span class="message__source-score">{s}</span> })}
            </div>
            {excerpt.map(|e| view! { <p class="message__source-excerpt">{e}</p> })}
        </div>
    }
}

pub fn references_label(count: usize) -> String {
    format!("References ({count})")
}

/// Rerank badge text, e.g. `"88%"`.
pub fn percent_label(source: &Source) -> Option<String> {
    source.rerank_percent().map(|p| format!("{p}%"))
}

pub fn quoted(excerpt: &str) -> String {
    format!("\"{excerpt}\"")
}
