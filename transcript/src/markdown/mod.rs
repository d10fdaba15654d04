//! Markdown-subset parser for assistant answers.
//!
//! Parses the constrained dialect produced by the RAG backend (bold headings,
//! numbered and bulleted lists, nested bullets, pipe tables, paragraphs) into
//! an ordered block sequence. Parsing is total: anything unrecognized degrades
//! to paragraph text.

pub mod ast;
pub mod parse;

pub use ast::{Block, Inline, NESTED_INDENT_PX, Table, join_lines};
pub use parse::{parse, parse_inline, to_source};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
