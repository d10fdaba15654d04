//! Block and inline types produced by the markdown-subset parser.

use serde::Serialize;

/// Horizontal offset, in pixels, of one nested-bullet indent level.
pub const NESTED_INDENT_PX: usize = 12;

/// An inline run within a block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(String),
}

impl Inline {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Bold(text) => text,
        }
    }
}

/// Concatenate the literal text of `runs`, dropping bold markers.
#[must_use]
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter().map(Inline::as_str).collect()
}

/// Flatten paragraph lines into one run sequence.
///
/// Plain text is merged across line ends; bold runs stay separate.
#[must_use]
pub fn join_lines(lines: &[Vec<Inline>]) -> Vec<Inline> {
    let mut runs = Vec::new();
    for run in lines.iter().flatten() {
        push_run(&mut runs, run.clone());
    }
    runs
}

/// Append a run, skipping empty text and merging adjacent plain text.
pub(super) fn push_run(runs: &mut Vec<Inline>, run: Inline) {
    match run {
        Inline::Text(text) if text.is_empty() => {}
        Inline::Text(text) => {
            if let Some(Inline::Text(prev)) = runs.last_mut() {
                prev.push_str(&text);
            } else {
                runs.push(Inline::Text(text));
            }
        }
        bold @ Inline::Bold(_) => runs.push(bold),
    }
}

/// A pipe table. The separator row of the source is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Widest row, header included.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }
}

/// One structural unit of a parsed message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Consecutive text lines, each trimmed and followed by one space.
    ///
    /// Runs are kept per source line; [`join_lines`] gives the flat sequence.
    Paragraph { lines: Vec<Vec<Inline>> },
    /// `## **text**`
    Heading2 { text: String },
    /// `**text:**`, stored without the colon.
    Heading3 { text: String },
    /// `N. text`, with the number exactly as written.
    NumberedItem { number: String, runs: Vec<Inline> },
    BulletItem { runs: Vec<Inline> },
    /// Indented bullet; `indent` is half the leading whitespace count.
    NestedBulletItem { indent: usize, runs: Vec<Inline> },
    Table(Table),
    /// Vertical gap closing a list run.
    Spacer,
}

impl Block {
    /// Literal text of the block with formatting markers removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Paragraph { lines } => lines.iter().map(|line| plain_text(line)).collect(),
            Self::NumberedItem { runs, .. }
            | Self::BulletItem { runs }
            | Self::NestedBulletItem { runs, .. } => plain_text(runs),
            Self::Heading2 { text } | Self::Heading3 { text } => text.clone(),
            Self::Table(table) => std::iter::once(&table.header)
                .chain(table.rows.iter())
                .map(|row| row.join(" | "))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Spacer => String::new(),
        }
    }

    /// Whether the block is a numbered or top-level bullet list item.
    #[must_use]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Self::NumberedItem { .. } | Self::BulletItem { .. })
    }
}
