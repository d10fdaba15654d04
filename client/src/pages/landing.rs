//! Landing page at `/` with a short pitch and the way into the notebook.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    ("Upload anything", "PDFs, scans, images, text, and Word documents, with OCR for scanned pages."),
    ("Ask with citations", "Every answer lists the passages it was drawn from, with relevance scores."),
    ("Take it with you", "Export the conversation as PDF, Markdown, JSON, or plain text."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"RAG Bot Notebook"</h1>
                <p class="landing-page__tagline">
                    "Upload your documents and ask questions grounded in their content."
                </p>
                <a href="/app" class="btn btn--primary landing-page__cta">
                    "Open Notebook"
                </a>
            </header>
            <section class="landing-page__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="landing-page__feature">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
