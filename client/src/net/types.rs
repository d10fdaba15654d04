//! Response shapes and request form layout for the backend boundary.
//!
//! DESIGN
//! ======
//! The backend's stats and upload responses are loosely specified, so they are
//! kept as raw JSON objects with typed accessors for the few fields the UI
//! reads. The answer shape is [`transcript::RagResult`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use transcript::{RagResult, Source};

/// Knowledge-base statistics from `GET /api/stats` (or the health probe).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KbStats(pub Map<String, Value>);

impl KbStats {
    pub fn documents_in_kb(&self) -> Option<u64> {
        self.0.get("documents_in_kb").and_then(Value::as_u64)
    }

    /// Chunk count for the header badge: the first non-zero of `documents`
    /// and `total_chunks`, else 0.
    pub fn chunk_count(&self) -> u64 {
        ["documents", "total_chunks"]
            .iter()
            .filter_map(|key| self.0.get(*key).and_then(Value::as_u64))
            .find(|n| *n > 0)
            .unwrap_or(0)
    }

    pub fn set_documents_in_kb(&mut self, count: u64) {
        self.0.insert("documents_in_kb".to_owned(), Value::from(count));
    }
}

/// Response of an upload-only `/api/rag` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_in_kb: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Text fields of a multipart `/api/rag` request. Files are appended
/// separately under the `files` field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RagForm {
    pub question: Option<String>,
    pub use_ocr: Option<bool>,
    pub clear_kb: Option<bool>,
}

impl RagForm {
    pub fn ask(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            ..Self::default()
        }
    }

    pub fn upload(use_ocr: bool, clear_kb: bool) -> Self {
        Self {
            question: None,
            use_ocr: Some(use_ocr),
            clear_kb: Some(clear_kb),
        }
    }

    pub fn upload_and_ask(question: impl Into<String>, use_ocr: bool) -> Self {
        Self {
            question: Some(question.into()),
            use_ocr: Some(use_ocr),
            clear_kb: None,
        }
    }

    /// Field name/value pairs in the order they are appended to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(question) = &self.question {
            fields.push(("question", question.clone()));
        }
        if let Some(use_ocr) = self.use_ocr {
            fields.push(("use_ocr", use_ocr.to_string()));
        }
        if let Some(clear_kb) = self.clear_kb {
            fields.push(("clear_kb", clear_kb.to_string()));
        }
        fields
    }
}
