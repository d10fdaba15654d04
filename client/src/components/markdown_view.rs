//! Interactive rendering of assistant answers.
//!
//! Answers are parsed with the same block parser the exports use; this module
//! only maps blocks to DOM.

#[cfg(test)]
#[path = "markdown_view_test.rs"]
mod markdown_view_test;

use leptos::prelude::*;
use transcript::markdown::{Block, Inline, NESTED_INDENT_PX, Table, join_lines, parse, parse_inline};

/// Render `content` as formatted blocks.
#[component]
pub fn MarkdownView(#[prop(into)] content: String) -> impl IntoView {
    let blocks = parse(&content);
    view! { <div class="markdown">{blocks.into_iter().map(block_view).collect_view()}</div> }
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Paragraph { lines } => {
            view! { <p class="markdown__paragraph">{inline_views(join_lines(&lines))}</p> }.into_any()
        }
        Block::Heading2 { text } => view! { <h2 class="markdown__h2">{text}</h2> }.into_any(),
        Block::Heading3 { text } => view! { <h3 class="markdown__h3">{section_title(&text)}</h3> }.into_any(),
        Block::NumberedItem { number, runs } => view! {
            <div class="markdown__numbered">
                <span class="markdown__number">{format!("{number}.")}</span>
                <span class="markdown__item">{inline_views(runs)}</span>
            </div>
        }
        .into_any(),
        Block::BulletItem { runs } => view! {
            <div class="markdown__bullet">
                <span class="markdown__marker">"•"</span>
                <span class="markdown__item">{inline_views(runs)}</span>
            </div>
        }
        .into_any(),
        Block::NestedBulletItem { indent, runs } => view! {
            <div class="markdown__bullet markdown__bullet--nested" style=nested_margin(indent)>
                <span class="markdown__marker">"◦"</span>
                <span class="markdown__item">{inline_views(runs)}</span>
            </div>
        }
        .into_any(),
        Block::Table(table) => table_view(table),
        Block::Spacer => view! { <div class="markdown__spacer"></div> }.into_any(),
    }
}

fn table_view(table: Table) -> AnyView {
    let header = table
        .header
        .iter()
        .map(|cell| view! { <th>{inline_views(parse_inline(cell))}</th> })
        .collect_view();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|cell| view! { <td>{inline_views(parse_inline(cell))}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="markdown__table-wrap">
            <table class="markdown__table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn inline_views(runs: Vec<Inline>) -> Vec<AnyView> {
    runs.into_iter()
        .map(|run| match run {
            Inline::Text(text) => text.into_any(),
            Inline::Bold(text) => view! { <strong>{text}</strong> }.into_any(),
        })
        .collect()
}

/// Inline style offsetting a nested bullet by its indent level.
pub fn nested_margin(indent: usize) -> String {
    format!("margin-left: {}px", indent * NESTED_INDENT_PX)
}

/// Section headings are stored without their colon.
pub fn section_title(text: &str) -> String {
    format!("{text}:")
}
