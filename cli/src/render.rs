//! Terminal rendering of backend answers.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use transcript::{Block, RagResult};

/// Answer text with markers stripped, followed by numbered references.
pub fn render_answer(result: &RagResult) -> String {
    let mut out = String::new();
    for block in transcript::parse(&result.answer) {
        let line = match &block {
            Block::Spacer => String::new(),
            Block::NumberedItem { number, .. } => format!("{number}. {}", block.plain_text()),
            Block::BulletItem { .. } => format!("• {}", block.plain_text()),
            Block::NestedBulletItem { indent, .. } => format!("{}◦ {}", "  ".repeat(*indent), block.plain_text()),
            Block::Heading3 { text } => format!("{text}:"),
            _ => block.plain_text(),
        };
        let _ = writeln!(out, "{}", line.trim_end());
    }
    if !result.sources.is_empty() {
        out.push_str("\nReferences:\n");
        for (i, source) in result.sources.iter().enumerate() {
            out.push_str(&source.citation(i));
            if let Some(percent) = source.rerank_percent() {
                let _ = write!(out, " ({percent}%)");
            }
            out.push('\n');
        }
    }
    out
}
