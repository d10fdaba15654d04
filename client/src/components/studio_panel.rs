//! Right panel: quick actions plus the notebook's studio tiles.

use leptos::prelude::*;

use crate::components::quick_actions::QuickActions;

/// Studio tiles shown for layout parity. Only the quick actions above them
/// talk to the backend.
pub const STUDIO_OPTIONS: [(&str, &str); 8] = [
    ("🎧", "Audio Overview"),
    ("📹", "Video Overview"),
    ("📊", "Reports"),
    ("⚡", "Flashcards"),
    ("📈", "Infographic"),
    ("🎯", "Quiz"),
    ("🎨", "Slide Deck"),
    ("🗺️", "Mind Map"),
];

#[component]
pub fn StudioPanel() -> impl IntoView {
    view! {
        <aside class="studio-panel">
            <header class="studio-panel__header">
                <h2>"Studio"</h2>
            </header>

            <section class="studio-panel__section">
                <p class="studio-panel__label">"Quick Actions"</p>
                <div class="quick-actions quick-actions--stacked">
                    <QuickActions/>
                </div>
            </section>

            <div class="studio-panel__grid">
                {STUDIO_OPTIONS
                    .into_iter()
                    .map(|(icon, label)| {
                        view! {
                            <div class="studio-panel__tile">
                                <span class="studio-panel__icon">{icon}</span>
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="studio-panel__note">
                "Studio output will be saved here. After adding sources, click a quick action to generate a summary or Q&A."
            </p>
        </aside>
    }
}
