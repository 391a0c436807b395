//! Monitoring pipeline
//!
//! One run over an in-memory listing:
//! entries -> timeline -> { gap detection -> daily split, status } -> report.
//! The pipeline is synchronous and owns its data; concurrent runs share
//! nothing.

use crate::config::MonitorConfig;
use crate::gap_detector::GapDetector;
use crate::report::MonitoringReport;
use crate::segment_splitter::split_by_day;
use crate::status_classifier::{classify, ClassifierPolicy};
use crate::timeline::{RecordingEntry, Timeline};
use chrono::{DateTime, NaiveDateTime, Utc};

/// One-shot monitoring pipeline
pub struct Monitor {
    detector: GapDetector,
    policy: ClassifierPolicy,
}

impl Monitor {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            detector: GapDetector::new(config.expected_interval, config.tolerance)
                .with_exclude_newest(config.exclude_newest),
            policy: ClassifierPolicy {
                expected_interval: config.expected_interval,
                tolerance: config.tolerance,
                finishing_grace: config.finishing_grace,
            },
        }
    }

    /// Build the report for one run.
    ///
    /// Pure given its inputs: the same listing and the same clock values
    /// produce an identical report.
    pub fn build_report(
        &self,
        entries: Vec<RecordingEntry>,
        board_id: &str,
        now: NaiveDateTime,
        generated_at: DateTime<Utc>,
    ) -> MonitoringReport {
        let timeline = Timeline::from_entries(entries);
        let segments = self.detector.detect(&timeline);
        let daily = split_by_day(&segments);
        let status = classify(&timeline, now, &self.policy);
        MonitoringReport::assemble(board_id, generated_at, status, &daily, &timeline)
    }
}
