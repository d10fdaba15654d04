//! Backend health and knowledge-base statistics shown in the header.
//!
//! Stats are refreshed on a fixed interval. A failed refresh is logged by the
//! poller and leaves the last known values in place.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::time::Duration;

use crate::net::types::{KbStats, UploadResponse};

pub const STATS_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, Default)]
pub struct StatsState {
    pub healthy: bool,
    pub stats: Option<KbStats>,
}

impl StatsState {
    /// Health probe answered; its body doubles as the first stats snapshot.
    pub fn mark_healthy(&mut self, snapshot: KbStats) {
        self.healthy = true;
        self.stats = Some(snapshot);
    }

    pub fn mark_unreachable(&mut self) {
        self.healthy = false;
    }

    pub fn replace(&mut self, snapshot: KbStats) {
        self.stats = Some(snapshot);
    }

    /// Fold the document count reported by an upload into the current stats.
    pub fn apply_upload(&mut self, response: &UploadResponse) {
        if let Some(count) = response.documents_in_kb {
            self.stats.get_or_insert_with(KbStats::default).set_documents_in_kb(count);
        }
    }

    pub fn documents_in_kb(&self) -> u64 {
        self.stats.as_ref().and_then(KbStats::documents_in_kb).unwrap_or(0)
    }

    pub fn chunk_count(&self) -> Option<u64> {
        self.stats.as_ref().map(KbStats::chunk_count)
    }
}
