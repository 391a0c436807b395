//! Timeline Builder
//!
//! Turns the parsed recording entries of one run into a chronologically
//! sorted, de-duplicated sequence.

use chrono::NaiveDateTime;

/// One discovered recording file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingEntry {
    /// Timestamp extracted from the file name (second precision)
    pub timestamp: NaiveDateTime,
    /// Source identifier (the original file name)
    pub source: String,
    /// File size in bytes, when the stat succeeded
    pub size_bytes: Option<u64>,
}

/// Sorted sequence of recordings for one run.
///
/// Ascending by timestamp with ties broken by source identifier, so
/// repeated runs over the same listing produce the same order. An empty
/// timeline is valid (the `NO_RECORDINGS` condition downstream).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<RecordingEntry>,
}

impl Timeline {
    /// Build a timeline from unordered entries.
    pub fn from_entries(mut entries: Vec<RecordingEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.source.cmp(&b.source))
        });
        entries.dedup_by(|a, b| a.timestamp == b.timestamp && a.source == b.source);
        Self { entries }
    }

    /// Entries in ascending timestamp order
    pub fn entries(&self) -> &[RecordingEntry] {
        &self.entries
    }

    /// Most recent entry, if any
    pub fn newest(&self) -> Option<&RecordingEntry> {
        self.entries.last()
    }

    /// Oldest entry, if any
    pub fn oldest(&self) -> Option<&RecordingEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
