//! Printable HTML rendering of a chat log as numbered question/answer units.
//!
//! The output is a standalone document (inline stylesheet, no external
//! assets) meant to be handed to the browser's print dialog. Answers go
//! through the same block parser as the interactive view.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

use time::OffsetDateTime;

use crate::export::{ExportError, display_timestamp, iso_date};
use crate::markdown::{Block, Inline, NESTED_INDENT_PX, Table, join_lines, parse, parse_inline};
use crate::message::{Message, Source};

const STYLESHEET: &str = include_str!("print.css");

pub const DEFAULT_TITLE: &str = "Questions & Answers";

/// Document-level settings for [`render_printable`].
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    pub title: String,
    /// Names of the uploaded documents, listed in the header.
    pub source_names: Vec<String>,
    pub generated_at: OffsetDateTime,
    /// Faint diagonal text behind the content.
    pub watermark: Option<String>,
}

impl PrintOptions {
    #[must_use]
    pub fn new(generated_at: OffsetDateTime) -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            source_names: Vec::new(),
            generated_at,
            watermark: None,
        }
    }

    #[must_use]
    pub fn with_sources(mut self, names: Vec<String>) -> Self {
        self.source_names = names;
        self
    }

    #[must_use]
    pub fn with_watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }
}

/// A question with the assistant message that immediately follows it, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QaUnit<'a> {
    /// 1-based position among units.
    pub number: usize,
    pub question: &'a Message,
    pub answer: Option<&'a Message>,
}

/// Group the log into question/answer units.
///
/// Every user message starts a unit. An assistant message directly after it
/// becomes the answer; any other assistant message is skipped.
#[must_use]
pub fn pair_messages(messages: &[Message]) -> Vec<QaUnit<'_>> {
    let mut units = Vec::new();
    let mut skipped = 0_usize;
    let mut i = 0;

    while i < messages.len() {
        let msg = &messages[i];
        if !msg.is_user() {
            skipped += 1;
            i += 1;
            continue;
        }
        let answer = messages.get(i + 1).filter(|next| next.is_assistant());
        units.push(QaUnit {
            number: units.len() + 1,
            question: msg,
            answer,
        });
        i += if answer.is_some() { 2 } else { 1 };
    }

    if skipped > 0 {
        tracing::debug!(skipped, "assistant messages without a question left out of print");
    }
    units
}

/// Render the full printable document.
///
/// # Errors
///
/// Returns an error if the header or footer timestamp cannot be formatted.
pub fn render_printable(messages: &[Message], options: &PrintOptions) -> Result<String, ExportError> {
    let units = pair_messages(messages);
    let generated = display_timestamp(options.generated_at)?;

    let mut out = String::with_capacity(STYLESHEET.len() + messages.len() * 512);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    out.push_str(&format!(
        "<title>Q&amp;A Export - {}</title>\n",
        iso_date(options.generated_at)?
    ));
    out.push_str("<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");

    if let Some(mark) = &options.watermark {
        out.push_str(&format!("<div class=\"watermark\">{}</div>\n", escape_html(mark)));
    }

    out.push_str("<div class=\"header\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&options.title)));
    out.push_str("<div class=\"meta\">\n");
    out.push_str(&format!("<strong>Date:</strong> {generated}<br>\n"));
    out.push_str(&format!("<strong>Total Q&amp;A:</strong> {}<br>\n", units.len()));
    if !options.source_names.is_empty() {
        let names: Vec<String> = options.source_names.iter().map(|n| escape_html(n)).collect();
        out.push_str(&format!("<strong>Sources:</strong> {}\n", names.join(", ")));
    }
    out.push_str("</div>\n</div>\n<div class=\"content\">\n");

    for unit in &units {
        render_unit(&mut out, unit);
    }

    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"footer\">Generated on {generated} | Total {} Q&amp;A pairs</div>\n",
        units.len()
    ));
    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_unit(out: &mut String, unit: &QaUnit<'_>) {
    out.push_str("<div class=\"qna-item\">\n<div class=\"question-section\">\n");
    out.push_str(&format!(
        "<div class=\"question-label\"><span class=\"question-number\">Q{}</span><span>QUESTION</span></div>\n",
        unit.number
    ));
    out.push_str(&format!(
        "<div class=\"question-text\">{}</div>\n</div>\n",
        escape_html(&unit.question.content)
    ));

    out.push_str("<div class=\"answer-section\">\n<div class=\"answer-label\">ANSWER</div>\n");
    match unit.answer {
        Some(answer) => {
            let class = if answer.error {
                "answer-text answer-text--error"
            } else {
                "answer-text"
            };
            out.push_str(&format!("<div class=\"{class}\">\n"));
            render_blocks(out, &parse(&answer.content));
            out.push_str("</div>\n");
            render_sources(out, &answer.sources);
        }
        None => out.push_str("<div class=\"answer-text\"></div>\n"),
    }
    out.push_str("</div>\n</div>\n");
}

fn render_sources(out: &mut String, sources: &[Source]) {
    if sources.is_empty() {
        return;
    }
    out.push_str("<div class=\"sources\">\n<div class=\"sources-title\">References</div>\n");
    for (idx, source) in sources.iter().enumerate() {
        let excerpt = source
            .excerpt
            .as_deref()
            .map(|text| format!(" - <em>&quot;{}&quot;</em>", escape_html(text)))
            .unwrap_or_default();
        out.push_str(&format!(
            "<div class=\"source-item\"><span class=\"source-number\">[{}]</span> {}{excerpt}</div>\n",
            idx + 1,
            escape_html(&source.source)
        ));
    }
    out.push_str("</div>\n");
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Numbered,
    Bullet,
}

impl ListKind {
    fn class(self) -> &'static str {
        match self {
            Self::Numbered => "numbered-list",
            Self::Bullet => "bullet-list",
        }
    }
}

/// Render answer blocks, wrapping runs of list items in one container.
fn render_blocks(out: &mut String, blocks: &[Block]) {
    let mut open: Option<ListKind> = None;

    for block in blocks {
        let wanted = match block {
            Block::NumberedItem { .. } => Some(ListKind::Numbered),
            Block::BulletItem { .. } => Some(ListKind::Bullet),
            // Nested bullets sit inside whatever container is open.
            Block::NestedBulletItem { .. } => open,
            _ => None,
        };
        if open != wanted {
            if open.is_some() {
                out.push_str("</div>\n");
            }
            if let Some(kind) = wanted {
                out.push_str(&format!("<div class=\"{}\">\n", kind.class()));
            }
            open = wanted;
        }

        match block {
            Block::Paragraph { lines } => {
                out.push_str(&format!("<p>{}</p>\n", inline_html(&join_lines(lines)).trim_end()));
            }
            Block::Heading2 { text } => out.push_str(&format!("<h2>{}</h2>\n", escape_html(text))),
            Block::Heading3 { text } => out.push_str(&format!("<h3>{}:</h3>\n", escape_html(text))),
            Block::NumberedItem { number, runs } => out.push_str(&format!(
                "<div class=\"numbered-list-item\"><span class=\"list-number\">{}.</span><span class=\"list-content\">{}</span></div>\n",
                escape_html(number),
                inline_html(runs)
            )),
            Block::BulletItem { runs } => out.push_str(&format!(
                "<div class=\"bullet-item\"><span class=\"bullet\">•</span><span>{}</span></div>\n",
                inline_html(runs)
            )),
            Block::NestedBulletItem { indent, runs } => out.push_str(&format!(
                "<div class=\"bullet-item bullet-item--nested\" style=\"margin-left: {}px\"><span class=\"bullet bullet--nested\">◦</span><span>{}</span></div>\n",
                indent * NESTED_INDENT_PX,
                inline_html(runs)
            )),
            Block::Table(table) => render_table(out, table),
            Block::Spacer => {}
        }
    }

    if open.is_some() {
        out.push_str("</div>\n");
    }
}

fn render_table(out: &mut String, table: &Table) {
    out.push_str("<table>\n<thead><tr>");
    for cell in &table.header {
        out.push_str(&format!("<th>{}</th>", inline_html(&parse_inline(cell))));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", inline_html(&parse_inline(cell))));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn inline_html(runs: &[Inline]) -> String {
    runs.iter()
        .map(|run| match run {
            Inline::Text(text) => escape_html(text),
            Inline::Bold(text) => format!("<strong>{}</strong>", escape_html(text)),
        })
        .collect()
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
