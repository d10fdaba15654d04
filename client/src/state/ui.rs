//! Local UI chrome state (dialogs, copy feedback, citation panels).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the chat and sources models so
//! the controls can change without touching conversation data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::BTreeSet;
use std::time::Duration;

/// How long the "Copied to Clipboard!" confirmation stays up.
pub const COPIED_RESET: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub export_open: bool,
    pub copied: bool,
    /// "Clear all data?" confirmation in the sources panel.
    pub confirm_clear_open: bool,
    /// Message indices whose reference list is expanded.
    expanded_sources: BTreeSet<usize>,
}

impl UiState {
    pub fn sources_expanded(&self, index: usize) -> bool {
        self.expanded_sources.contains(&index)
    }

    pub fn toggle_sources(&mut self, index: usize) {
        if !self.expanded_sources.remove(&index) {
            self.expanded_sources.insert(index);
        }
    }

    pub fn open_export(&mut self) {
        self.export_open = true;
        self.copied = false;
    }

    pub fn close_export(&mut self) {
        self.export_open = false;
        self.copied = false;
    }

    /// Forget per-message state when the conversation is replaced.
    pub fn reset_conversation(&mut self) {
        self.expanded_sources.clear();
        self.export_open = false;
        self.copied = false;
    }
}
