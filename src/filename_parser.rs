//! Filename Parser
//!
//! Extracts a recording timestamp from a video file name. Accepted naming
//! conventions are evaluated in priority order; the first full match wins.
//! Names that match no convention, or carry calendar-invalid fields
//! (day 32, hour 25), are skipped by the caller and never abort a scan.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// A single accepted naming convention.
///
/// Implementations must match the full file name and return `None` for
/// calendar-invalid field values.
pub trait FilenamePattern: Send + Sync {
    /// Pattern name for logging
    fn name(&self) -> &'static str;

    /// Try to extract a timestamp. `today` supplies the date for
    /// conventions that only encode a time of day.
    fn try_parse(&self, filename: &str, today: NaiveDate) -> Option<NaiveDateTime>;
}

/// `DDMMYYYY_HHMMSS.mp4`
///
/// Example: `10022026_000311.mp4` -> 2026-02-10 00:03:11
pub struct FullTimestampPattern;

static FULL_RE: OnceLock<Regex> = OnceLock::new();

impl FilenamePattern for FullTimestampPattern {
    fn name(&self) -> &'static str {
        "full_timestamp"
    }

    fn try_parse(&self, filename: &str, _today: NaiveDate) -> Option<NaiveDateTime> {
        let re = FULL_RE.get_or_init(|| {
            Regex::new(r"^(\d{2})(\d{2})(\d{4})_(\d{2})(\d{2})(\d{2})\.mp4$").unwrap()
        });
        let caps = re.captures(filename)?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        let hour: u32 = caps[4].parse().ok()?;
        let minute: u32 = caps[5].parse().ok()?;
        let second: u32 = caps[6].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
    }
}

/// `video_HHMMSS.mp4` - time only, the date defaults to `today` because
/// the file name carries no date component.
pub struct TimeOnlyPattern;

static TIME_ONLY_RE: OnceLock<Regex> = OnceLock::new();

impl FilenamePattern for TimeOnlyPattern {
    fn name(&self) -> &'static str {
        "time_only"
    }

    fn try_parse(&self, filename: &str, today: NaiveDate) -> Option<NaiveDateTime> {
        let re = TIME_ONLY_RE
            .get_or_init(|| Regex::new(r"^video_(\d{2})(\d{2})(\d{2})\.mp4$").unwrap());
        let caps = re.captures(filename)?;
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        let second: u32 = caps[3].parse().ok()?;
        today.and_hms_opt(hour, minute, second)
    }
}

/// Ordered set of accepted naming conventions.
///
/// New conventions are additive: push another [`FilenamePattern`] and the
/// scan picks it up without touching the callers.
pub struct FilenameParser {
    patterns: Vec<Box<dyn FilenamePattern>>,
}

impl FilenameParser {
    /// Parser with the default conventions in priority order
    pub fn new() -> Self {
        Self {
            patterns: vec![Box::new(FullTimestampPattern), Box::new(TimeOnlyPattern)],
        }
    }

    /// Parser with custom conventions, highest priority first
    pub fn with_patterns(patterns: Vec<Box<dyn FilenamePattern>>) -> Self {
        Self { patterns }
    }

    /// Try each convention in order; the first match wins.
    pub fn parse(&self, filename: &str, today: NaiveDate) -> Option<NaiveDateTime> {
        self.patterns
            .iter()
            .find_map(|p| p.try_parse(filename, today))
    }
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::new()
    }
}
