//! Directory scanner
//!
//! Lists candidate `.mp4` files and runs every name through the filename
//! parser. Unparsable or foreign names are skipped with a debug log,
//! never fatal; a missing directory yields an empty listing.

use crate::filename_parser::FilenameParser;
use crate::timeline::RecordingEntry;
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, warn};

/// Scan a recordings directory into entries for the timeline builder.
///
/// `today` supplies the date for time-only file names.
pub fn scan_recordings(dir: &Path, parser: &FilenameParser, today: NaiveDate) -> Vec<RecordingEntry> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Recordings directory not readable");
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for dir_entry in read_dir.flatten() {
        let path = dir_entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("mp4") {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        match parser.parse(&name, today) {
            Some(timestamp) => {
                let size_bytes = dir_entry.metadata().ok().map(|m| m.len());
                entries.push(RecordingEntry {
                    timestamp,
                    source: name,
                    size_bytes,
                });
            }
            None => {
                debug!(file = %name, "Skipping file with unrecognized name");
            }
        }
    }

    debug!(dir = %dir.display(), count = entries.len(), "Scan complete");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
    }

    #[test]
    fn test_scan_collects_valid_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["09022026_080000.mp4", "09022026_080500.mp4"] {
            File::create(dir.path().join(name))
                .unwrap()
                .write_all(&[0u8; 1024])
                .unwrap();
        }
        let entries = scan_recordings(dir.path(), &FilenameParser::new(), today());
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.size_bytes == Some(1024)));
    }

    #[test]
    fn test_scan_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("09022026_080000.mp4")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();
        File::create(dir.path().join("corrupt_name.mp4")).unwrap();
        let entries = scan_recordings(dir.path(), &FilenameParser::new(), today());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "09022026_080000.mp4");
    }

    #[test]
    fn test_missing_directory_yields_empty() {
        let entries = scan_recordings(
            Path::new("/nonexistent/recordings"),
            &FilenameParser::new(),
            today(),
        );
        assert!(entries.is_empty());
    }
}
