//! Board identifier
//!
//! Reads the SoC serial from `/proc/cpuinfo` (the `Serial` line on
//! Raspberry Pi class boards). Falls back to `"unknown"` when the file
//! or the line is unavailable, e.g. on development hosts.

use std::path::Path;
use tracing::warn;

const CPUINFO_PATH: &str = "/proc/cpuinfo";
const UNKNOWN: &str = "unknown";

/// Board identifier from the system cpuinfo
pub fn board_id() -> String {
    board_id_from(Path::new(CPUINFO_PATH))
}

/// Board identifier from an arbitrary cpuinfo-format file
pub fn board_id_from(path: &Path) -> String {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read board id");
            return UNKNOWN.to_string();
        }
    };

    for line in contents.lines() {
        if line.starts_with("Serial") {
            if let Some(serial) = line.split_whitespace().last() {
                return serial.to_string();
            }
        }
    }

    warn!(path = %path.display(), "No Serial line in cpuinfo");
    UNKNOWN.to_string()
}
