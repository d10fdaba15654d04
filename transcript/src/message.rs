//! Chat log entries and the backend result shape they are built from.
//!
//! Messages are immutable once created. The chat surface owns the ordered log
//! and replaces it wholesale on every update, so nothing here needs interior
//! mutability.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A citation backing an assistant answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Display label of the originating document section.
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Reranker confidence in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rerank_score: Option<f64>,
}

impl Source {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            excerpt: None,
            rerank_score: None,
        }
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: f64) -> Self {
        self.rerank_score = Some(score);
        self
    }

    /// Rerank score as a whole percentage, rounded to the nearest integer.
    #[must_use]
    pub fn rerank_percent(&self) -> Option<u32> {
        let score = self.rerank_score.filter(|s| s.is_finite())?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (score.clamp(0.0, 1.0) * 100.0).round() as u32;
        Some(percent)
    }

    /// `"[i] <source>"` label for the 0-based position `index`.
    #[must_use]
    pub fn citation(&self, index: usize) -> String {
        format!("[{}] {}", index + 1, self.source)
    }
}

/// Successful response of the RAG endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RagResult {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

/// One entry of the chat log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
    /// Placeholder for a failed request.
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
    /// Backend pass-through, never interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            error: false,
            metadata: None,
        }
    }

    #[must_use]
    pub fn assistant(result: RagResult) -> Self {
        Self {
            role: Role::Assistant,
            content: result.answer,
            sources: result.sources,
            error: false,
            metadata: result.metadata,
        }
    }

    /// Assistant-side placeholder for a request that failed with `reason`.
    #[must_use]
    pub fn failure(reason: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: format!("Error: {reason}"),
            sources: Vec::new(),
            error: true,
            metadata: None,
        }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// Drop blank and repeated document names, keeping first-seen order.
#[must_use]
pub fn distinct_source_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() || out.iter().any(|seen| seen == name) {
            continue;
        }
        out.push(name.to_owned());
    }
    out
}
