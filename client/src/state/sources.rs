//! Uploaded documents listed in the sources panel.
//!
//! The list mirrors what the backend has ingested this session. Entries are
//! metadata only; file contents go straight to the upload request.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

/// One uploaded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceDoc {
    pub id: String,
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub media_type: String,
    pub selected: bool,
}

impl SourceDoc {
    /// New entry, selected by default.
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            size,
            media_type: media_type.into(),
            selected: true,
        }
    }

    /// Size in kilobytes with one decimal, e.g. `"12.5 KB"`.
    #[allow(clippy::cast_precision_loss)]
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SourcesState {
    pub docs: Vec<SourceDoc>,
    pub uploading: bool,
    pub clearing: bool,
    /// Filter text from the search box.
    pub query: String,
}

impl SourcesState {
    pub fn add_uploaded(&mut self, docs: Vec<SourceDoc>) {
        self.docs.extend(docs);
    }

    pub fn toggle(&mut self, id: &str) {
        if let Some(doc) = self.docs.iter_mut().find(|d| d.id == id) {
            doc.selected = !doc.selected;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.docs.retain(|d| d.id != id);
    }

    pub fn clear(&mut self) {
        self.docs = Vec::new();
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Distinct document names in upload order, as stamped into exports.
    pub fn names(&self) -> Vec<String> {
        transcript::message::distinct_source_names(self.docs.iter().map(|d| d.name.as_str()))
    }

    /// Entries whose name contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<SourceDoc> {
        let needle = self.query.trim().to_lowercase();
        self.docs
            .iter()
            .filter(|d| needle.is_empty() || d.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// `"1 source"` / `"3 sources"`
    pub fn count_label(&self) -> String {
        count_label(self.docs.len())
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 source".to_owned()
    } else {
        format!("{count} sources")
    }
}
