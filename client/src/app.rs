//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{landing::LandingPage, notebook::NotebookPage};
use crate::state::{chat::ChatState, sources::SourcesState, stats::StatsState, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let sources = RwSignal::new(SourcesState::default());
    let stats = RwSignal::new(StatsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(chat);
    provide_context(sources);
    provide_context(stats);
    provide_context(ui);

    view! {
        <Title text="RAG Bot Notebook"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("app") view=NotebookPage/>
            </Routes>
        </Router>
    }
}
