//! Recordings Monitor
//!
//! Inspects a directory of timestamp-named camera recordings, derives
//! where the camera was offline and publishes a structured status report.
//!
//! ## Components
//!
//! 1. FilenameParser - timestamp extraction from recording names
//! 2. Timeline - sorted recording sequence for one run
//! 3. GapDetector - spacing walk with newest-entry exclusion
//! 4. SegmentSplitter - per-day bucketing across midnights
//! 5. StatusClassifier - camera status from newest-entry age
//! 6. Report - the serialized monitoring report (broker contract)
//! 7. Scanner / BoardId / Publisher - collaborators around the core
//!
//! ## Design Principles
//!
//! - Each run recomputes from the full listing; no cross-run state
//! - The clock is injected, so every computation is reproducible
//! - All timestamps share one clock domain (the boards run on UTC)

pub mod board_id;
pub mod config;
pub mod error;
pub mod filename_parser;
pub mod gap_detector;
pub mod monitor;
pub mod publisher;
pub mod report;
pub mod scanner;
pub mod segment_splitter;
pub mod status_classifier;
pub mod timeline;

pub use error::{Error, Result};
