//! Reading saved chat logs and answer text from disk or stdin.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::io::{self, Read};
use std::path::PathBuf;

use serde::Deserialize;
use time::OffsetDateTime;
use transcript::{ChatArchive, ExportError, ExportFormat, Message};

/// A chat log plus whatever document names travelled with it.
#[derive(Debug, Default)]
pub struct ChatLog {
    pub messages: Vec<Message>,
    pub sources: Vec<String>,
}

/// Accepted on-disk shapes: the bare message array the client keeps, or a
/// previous JSON export.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChatInput {
    Bare(Vec<Message>),
    Archive(ChatArchive),
}

/// Parse either accepted shape.
///
/// # Errors
///
/// Returns the JSON error if `text` matches neither shape.
pub fn parse_chat_log(text: &str) -> Result<ChatLog, serde_json::Error> {
    Ok(match serde_json::from_str::<ChatInput>(text)? {
        ChatInput::Bare(messages) => ChatLog {
            messages,
            sources: Vec::new(),
        },
        ChatInput::Archive(archive) => ChatLog {
            messages: archive.conversation,
            sources: archive.sources,
        },
    })
}

/// File contents, or all of stdin for `-`.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
}

/// Explicit `--output`, else `chat-export-<date>.<ext>` in the working directory.
pub fn output_path(
    explicit: Option<PathBuf>,
    format: ExportFormat,
    now: OffsetDateTime,
) -> Result<PathBuf, ExportError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(PathBuf::from(format.file_name(now)?)),
    }
}

/// Sources named on the command line win over those stored in an archive.
pub fn choose_sources(cli: Vec<String>, stored: Vec<String>) -> Vec<String> {
    if cli.is_empty() { stored } else { cli }
}
