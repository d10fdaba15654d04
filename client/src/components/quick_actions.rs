//! Summary and Q&A one-click prompts.

use leptos::prelude::*;

use crate::components::chat_panel::send_question;
use crate::state::chat::ChatState;
use crate::util::prompts::QuickAction;

/// Row of quick-action buttons, disabled while a request is in flight.
#[component]
pub fn QuickActions() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    QuickAction::ALL
        .into_iter()
        .map(|action| {
            view! {
                <button
                    class="btn quick-actions__button"
                    disabled=move || chat.get().is_pending()
                    on:click=move |_| run_quick_action(chat, action)
                >
                    {action.label()}
                </button>
            }
        })
        .collect_view()
}

/// Clicking a quick action counts as acknowledging a previous failure.
fn run_quick_action(chat: RwSignal<ChatState>, action: QuickAction) {
    if chat.with_untracked(|c| c.error().is_some()) {
        chat.update(ChatState::acknowledge_error);
    }
    let prompt = action.prompt();
    send_question(chat, prompt.clone(), prompt);
}
