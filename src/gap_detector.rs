//! Gap Detector
//!
//! Walks the sorted timeline as consecutive pairs and flags every pair
//! whose spacing exceeds expected interval + tolerance.

use crate::timeline::Timeline;
use chrono::{Duration, NaiveDateTime};

/// A period with no recording evidence. Invariant: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfflineSegment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Gap detection over a timeline
pub struct GapDetector {
    expected_interval: Duration,
    tolerance: Duration,
    /// Leave the newest entry out of pairwise comparison. The newest file
    /// may still be written when the run executes; comparing against it
    /// reads write-in-progress latency as an outage.
    exclude_newest: bool,
}

impl GapDetector {
    pub fn new(expected_interval: Duration, tolerance: Duration) -> Self {
        Self {
            expected_interval,
            tolerance,
            exclude_newest: true,
        }
    }

    /// Override the newest-entry exclusion policy
    pub fn with_exclude_newest(mut self, exclude: bool) -> Self {
        self.exclude_newest = exclude;
        self
    }

    /// Detect offline segments.
    ///
    /// Fewer than two comparable entries cannot establish periodicity and
    /// yield zero segments. A detected segment starts at
    /// `current + expected_interval`: the current file still covers its
    /// own expected duration before the outage begins.
    pub fn detect(&self, timeline: &Timeline) -> Vec<OfflineSegment> {
        let entries = timeline.entries();
        if entries.len() < 2 {
            return Vec::new();
        }

        let compared = if self.exclude_newest {
            &entries[..entries.len() - 1]
        } else {
            entries
        };
        if compared.len() < 2 {
            return Vec::new();
        }

        let threshold = self.expected_interval + self.tolerance;
        let mut segments = Vec::new();
        for pair in compared.windows(2) {
            let gap = pair[1].timestamp - pair[0].timestamp;
            if gap > threshold {
                segments.push(OfflineSegment {
                    start: pair[0].timestamp + self.expected_interval,
                    end: pair[1].timestamp,
                });
            }
        }
        segments
    }
}
