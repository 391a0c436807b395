//! Status Classifier
//!
//! Derives the camera status from the age of the newest recording
//! relative to an injected "now". Status is recomputed fresh every run;
//! no history is kept.

use crate::timeline::Timeline;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Camera status for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CameraStatus {
    /// Newest recording is within the expected interval
    Recording,
    /// Newest recording is slightly stale; the file is plausibly still
    /// being finalized
    Finishing,
    /// No recording evidence beyond the grace window
    Offline,
    /// No recordings found at all
    NoRecordings,
}

/// Classification thresholds
#[derive(Debug, Clone, Copy)]
pub struct ClassifierPolicy {
    /// Nominal time between consecutive recordings
    pub expected_interval: Duration,
    /// Slack added before a gap is anomalous
    pub tolerance: Duration,
    /// Additional window past tolerance in which a stale newest file is
    /// FINISHING rather than OFFLINE
    pub finishing_grace: Duration,
}

/// Classify the camera status.
///
/// A non-positive age (now before the newest recording) is evidence of
/// clock skew, not an outage, and classifies as RECORDING.
pub fn classify(timeline: &Timeline, now: NaiveDateTime, policy: &ClassifierPolicy) -> CameraStatus {
    let newest = match timeline.newest() {
        Some(entry) => entry,
        None => return CameraStatus::NoRecordings,
    };

    let age = now - newest.timestamp;
    if age <= policy.expected_interval {
        CameraStatus::Recording
    } else if age <= policy.expected_interval + policy.tolerance + policy.finishing_grace {
        CameraStatus::Finishing
    } else {
        CameraStatus::Offline
    }
}
