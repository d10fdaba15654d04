//! Share dialog offering the conversation as PDF, clipboard text, or a file.

#[cfg(test)]
#[path = "export_dialog_test.rs"]
mod export_dialog_test;

use leptos::prelude::*;
use time::OffsetDateTime;
use transcript::{ExportContext, ExportDocument, ExportFormat};

use crate::state::chat::ChatState;
use crate::state::sources::SourcesState;
use crate::state::ui::UiState;

/// Modal listing the export actions for the current conversation.
#[component]
pub fn ExportDialog() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sources = expect_context::<RwSignal<SourcesState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let build = move |format: ExportFormat| -> Option<ExportDocument> {
        let names = sources.with_untracked(SourcesState::names);
        let ctx = ExportContext::new(OffsetDateTime::now_utc()).with_sources(names);
        chat.with_untracked(|c| transcript::export(&c.messages, format, &ctx))
            .unwrap_or_else(|e| {
                #[cfg(feature = "csr")]
                log::error!("export failed: {e}");
                #[cfg(not(feature = "csr"))]
                let _ = e;
                None
            })
    };

    let on_print = move |_| {
        let Some(doc) = build(ExportFormat::Pdf) else { return };
        #[cfg(feature = "csr")]
        if let Err(e) = crate::util::delivery::print_html(&doc.body) {
            log::warn!("print failed: {e}");
        }
        #[cfg(not(feature = "csr"))]
        let _ = doc;
    };

    let on_copy = move |_| {
        let Some(doc) = build(ExportFormat::Text) else { return };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::util::delivery::copy_text(&doc.body).await {
                Ok(()) => {
                    ui.update(|u| u.copied = true);
                    gloo_timers::future::sleep(crate::state::ui::COPIED_RESET).await;
                    ui.try_update(|u| u.copied = false);
                }
                Err(e) => {
                    log::warn!("clipboard write failed: {e}");
                    crate::util::delivery::alert("Failed to copy to clipboard");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = doc;
    };

    let on_download = move |format: ExportFormat| {
        let Some(doc) = build(format) else { return };
        #[cfg(feature = "csr")]
        if let Err(e) = crate::util::delivery::download(&doc) {
            log::warn!("download failed: {e}");
        }
        #[cfg(not(feature = "csr"))]
        let _ = doc;
        ui.update(UiState::close_export);
    };

    let close = move |_| ui.update(UiState::close_export);
    let count = move || chat.with(|c| c.messages.len());

    view! {
        <div class="dialog-backdrop" on:click=close></div>
        <div class="dialog export-dialog" role="dialog">
            <header class="export-dialog__header">
                <h3>"Share Chat"</h3>
                <button class="btn btn--ghost" title="Close" on:click=close>"✕"</button>
            </header>
            <p class="export-dialog__count">{move || export_summary(count())}</p>
            <div class="export-dialog__actions">
                <button class="btn export-dialog__action" on:click=on_print>
                    {export_button_label(ExportFormat::Pdf)}
                </button>
                <button class="btn export-dialog__action" on:click=on_copy>
                    {move || if ui.get().copied { "Copied to Clipboard!" } else { "Copy to Clipboard" }}
                </button>
                {[ExportFormat::Text, ExportFormat::Markdown, ExportFormat::Json]
                    .into_iter()
                    .map(|format| {
                        view! {
                            <button class="btn export-dialog__action" on:click=move |_| on_download(format)>
                                {export_button_label(format)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Button text for a download or print action.
pub fn export_button_label(format: ExportFormat) -> String {
    match format {
        ExportFormat::Pdf => "Export as PDF".to_owned(),
        ExportFormat::Text => "Download as TXT".to_owned(),
        other => format!("Download as {}", other.label()),
    }
}

pub fn export_summary(count: usize) -> String {
    if count == 1 {
        "1 message in this conversation".to_owned()
    } else {
        format!("{count} messages in this conversation")
    }
}
