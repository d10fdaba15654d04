//! Chat transcript model, markdown-subset parsing, and export formats.
//!
//! This crate is UI-framework agnostic so the browser client and the CLI can
//! both consume it directly. Assistant answers are parsed once into a block
//! sequence ([`markdown::parse`]) and every renderer works from that
//! representation: the interactive client view, the printable HTML document
//! ([`print::render_printable`]), and the plain/JSON/Markdown serializers in
//! [`export`].

pub mod export;
pub mod ingest;
pub mod markdown;
pub mod message;
pub mod print;

pub use export::{ChatArchive, ExportContext, ExportDocument, ExportError, ExportFormat, export};
pub use markdown::{Block, Inline, Table, parse};
pub use message::{Message, RagResult, Role, Source};
pub use print::{PrintOptions, render_printable};
