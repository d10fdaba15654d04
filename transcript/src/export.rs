//! Whole-log export to plain text, JSON, Markdown, and printable HTML.
//!
//! Every format works from the same message slice. An empty log exports to
//! nothing; callers treat that as a silent no-op.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::message::{Message, Role};
use crate::print::{PrintOptions, render_printable};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp format failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}

/// Target format of an export action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Json,
    Markdown,
    /// Printable HTML handed to the browser's print dialog.
    Pdf,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Text, Self::Json, Self::Markdown, Self::Pdf];

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Pdf => "html",
        }
    }

    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain",
            Self::Json => "application/json",
            Self::Markdown => "text/markdown",
            Self::Pdf => "text/html",
        }
    }

    /// Short name shown in the export dialog.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Plain Text",
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Pdf => "PDF",
        }
    }

    /// `chat-export-<YYYY-MM-DD>.<ext>`
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn file_name(self, date: OffsetDateTime) -> Result<String, ExportError> {
        Ok(format!("chat-export-{}.{}", iso_date(date)?, self.extension()))
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            "pdf" | "html" => Ok(Self::Pdf),
            other => Err(ExportError::UnknownFormat(other.to_owned())),
        }
    }
}

/// Values stamped into export headers.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportContext {
    pub generated_at: OffsetDateTime,
    /// Uploaded document names, as listed in the sources panel.
    pub source_names: Vec<String>,
}

impl ExportContext {
    #[must_use]
    pub fn new(generated_at: OffsetDateTime) -> Self {
        Self {
            generated_at,
            source_names: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_sources(mut self, names: Vec<String>) -> Self {
        self.source_names = names;
        self
    }
}

/// A finished export, ready for download, clipboard, or print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub media_type: &'static str,
    pub body: String,
}

/// Layout of the JSON export. Also read back by tools that re-export a saved log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatArchive {
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub message_count: usize,
    #[serde(default)]
    pub sources: Vec<String>,
    pub conversation: Vec<Message>,
}

/// Build the document for `format`, or `None` when there is nothing to export.
///
/// # Errors
///
/// Returns an error if JSON encoding or timestamp formatting fails.
pub fn export(
    messages: &[Message],
    format: ExportFormat,
    ctx: &ExportContext,
) -> Result<Option<ExportDocument>, ExportError> {
    if messages.is_empty() {
        return Ok(None);
    }

    let body = match format {
        ExportFormat::Text => format_plain_text(messages),
        ExportFormat::Json => format_json(messages, ctx)?,
        ExportFormat::Markdown => format_markdown(messages, ctx)?,
        ExportFormat::Pdf => {
            let options = PrintOptions::new(ctx.generated_at).with_sources(ctx.source_names.clone());
            render_printable(messages, &options)?
        }
    };

    tracing::debug!(
        format = format.extension(),
        messages = messages.len(),
        bytes = body.len(),
        "chat export built"
    );

    Ok(Some(ExportDocument {
        file_name: format.file_name(ctx.generated_at)?,
        media_type: format.media_type(),
        body,
    }))
}

// =============================================================================
// FORMATTERS
// =============================================================================

#[must_use]
pub fn format_plain_text(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|msg| {
            let speaker = match msg.role {
                Role::User => "You",
                Role::Assistant => "Assistant",
            };
            let mut text = format!("{speaker}: {}", msg.content);
            if !msg.sources.is_empty() {
                text.push_str("\n\nSources:");
                for (idx, source) in msg.sources.iter().enumerate() {
                    let _ = write!(text, "\n[{}] {}", idx + 1, source.source);
                    if let Some(excerpt) = &source.excerpt {
                        let _ = write!(text, " - \"{excerpt}\"");
                    }
                }
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Pretty-printed [`ChatArchive`].
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted or encoding fails.
pub fn format_json(messages: &[Message], ctx: &ExportContext) -> Result<String, ExportError> {
    let archive = ChatArchive {
        export_date: Some(ctx.generated_at.to_offset(UtcOffset::UTC).format(&Rfc3339)?),
        message_count: messages.len(),
        sources: ctx.source_names.clone(),
        conversation: messages.to_vec(),
    };
    Ok(serde_json::to_string_pretty(&archive)?)
}

/// Markdown transcript with a dated header.
///
/// # Errors
///
/// Returns an error if the header timestamp cannot be formatted.
pub fn format_markdown(messages: &[Message], ctx: &ExportContext) -> Result<String, ExportError> {
    let sources = if ctx.source_names.is_empty() {
        "None".to_owned()
    } else {
        ctx.source_names.join(", ")
    };

    let mut out = String::from("# Chat Export\n\n");
    let _ = write!(
        out,
        "**Date:** {}\n\n**Sources:** {sources}\n\n---\n\n",
        display_timestamp(ctx.generated_at)?
    );

    for (idx, msg) in messages.iter().enumerate() {
        let heading = match msg.role {
            Role::User => "### 💬 You",
            Role::Assistant => "### 🤖 Assistant",
        };
        let _ = write!(out, "{heading}\n\n{}\n\n", msg.content);

        if !msg.sources.is_empty() {
            out.push_str("**Sources:**\n\n");
            for (n, source) in msg.sources.iter().enumerate() {
                let _ = write!(out, "{}. {}", n + 1, source.source);
                if let Some(excerpt) = &source.excerpt {
                    let _ = write!(out, " - *\"{excerpt}\"*");
                }
                out.push('\n');
            }
            out.push('\n');
        }

        if idx + 1 < messages.len() {
            out.push_str("---\n\n");
        }
    }
    Ok(out)
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

/// `YYYY-MM-DD` of the UTC date.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted.
pub fn iso_date(at: OffsetDateTime) -> Result<String, ExportError> {
    let text = at
        .to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]"))?;
    Ok(text)
}

/// `YYYY-MM-DD HH:MM:SS UTC`
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn display_timestamp(at: OffsetDateTime) -> Result<String, ExportError> {
    let text = at
        .to_offset(UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC"))?;
    Ok(text)
}
