//! Report Assembler
//!
//! Combines the timeline, camera status and daily segments into the
//! serialized monitoring report. Field names and time formats here are a
//! compatibility contract with broker subscribers and dashboards; they
//! must not drift.

use crate::gap_detector::OfflineSegment;
use crate::segment_splitter::DailySegmentMap;
use crate::status_classifier::CameraStatus;
use crate::timeline::Timeline;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One offline interval as published: zero-padded `HHhMM` bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentTimes {
    pub start: String,
    pub end: String,
}

/// Metadata about the newest recording
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestRecording {
    pub filename: String,
    /// `YYYY-MM-DDTHH:MM:SS`, camera clock
    pub timestamp: String,
    /// Size in megabytes, rounded to two decimals
    pub size_mb: f64,
}

/// The output aggregate for one run. Created fresh each invocation,
/// handed to a sink and discarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringReport {
    pub board_id: String,
    /// Report generation time, `YYYY-MM-DDTHH:MM:SSZ` (UTC)
    pub timestamp: String,
    pub camera_status: CameraStatus,
    /// `YYYY-MM-DD` date keys in ascending order
    pub offline_segments: BTreeMap<String, Vec<SegmentTimes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_recording: Option<LatestRecording>,
    pub total_videos: usize,
    pub total_offline_segments: usize,
}

fn format_segment(segment: &OfflineSegment) -> SegmentTimes {
    SegmentTimes {
        start: segment.start.format("%Hh%M").to_string(),
        end: segment.end.format("%Hh%M").to_string(),
    }
}

fn round_mb(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0
}

impl MonitoringReport {
    /// Pure composition: no I/O and no clock reads.
    pub fn assemble(
        board_id: &str,
        generated_at: DateTime<Utc>,
        status: CameraStatus,
        daily_segments: &DailySegmentMap,
        timeline: &Timeline,
    ) -> Self {
        let offline_segments: BTreeMap<String, Vec<SegmentTimes>> = daily_segments
            .iter()
            .map(|(date, segments)| {
                (
                    date.format("%Y-%m-%d").to_string(),
                    segments.iter().map(format_segment).collect(),
                )
            })
            .collect();

        let total_offline_segments = daily_segments.values().map(Vec::len).sum();

        let latest_recording = timeline.newest().map(|entry| LatestRecording {
            filename: entry.source.clone(),
            timestamp: entry.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            size_mb: round_mb(entry.size_bytes.unwrap_or(0)),
        });

        Self {
            board_id: board_id.to_string(),
            timestamp: generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            camera_status: status,
            offline_segments,
            latest_recording,
            total_videos: timeline.len(),
            total_offline_segments,
        }
    }
}
