//! File types the backend's ingestion endpoint accepts.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

pub const ACCEPTED_EXTENSIONS: [&str; 7] = [".pdf", ".jpg", ".jpeg", ".png", ".txt", ".md", ".docx"];

/// Whether `file_name` ends in an accepted extension, ignoring case.
#[must_use]
pub fn is_accepted(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
}
