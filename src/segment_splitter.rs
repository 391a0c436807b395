//! Segment Splitter
//!
//! Buckets offline segments per calendar day, splitting at every midnight
//! a segment crosses. Gaps spanning several full days produce one bucket
//! entry per day touched; concatenating the pieces reconstructs the
//! original interval.

use crate::gap_detector::OfflineSegment;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// Offline segments grouped by calendar day, each bucket ordered by start
pub type DailySegmentMap = BTreeMap<NaiveDate, Vec<OfflineSegment>>;

/// Last representable instant of a day (23:59:59)
fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap()
}

/// First instant of a day (00:00:00)
fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Split segments at day boundaries and group them by date.
///
/// Segments arrive in chronological, non-overlapping order from the gap
/// detector, so appended pieces keep each bucket sorted by start time.
pub fn split_by_day(segments: &[OfflineSegment]) -> DailySegmentMap {
    let mut map = DailySegmentMap::new();

    for segment in segments {
        let start_date = segment.start.date();
        let end_date = segment.end.date();

        if start_date == end_date {
            map.entry(start_date).or_default().push(*segment);
            continue;
        }

        // First day: from the segment start to the last instant of its date
        map.entry(start_date).or_default().push(OfflineSegment {
            start: segment.start,
            end: day_end(start_date),
        });

        // Fully contained intermediate days
        let mut date = start_date + Duration::days(1);
        while date < end_date {
            map.entry(date).or_default().push(OfflineSegment {
                start: day_start(date),
                end: day_end(date),
            });
            date = date + Duration::days(1);
        }

        // Final day: from midnight to the segment end. An end of exactly
        // midnight would make this piece zero-length, so it is dropped.
        let final_start = day_start(end_date);
        if segment.end > final_start {
            map.entry(end_date).or_default().push(OfflineSegment {
                start: final_start,
                end: segment.end,
            });
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn test_same_day_segment_kept_whole() {
        let segment = OfflineSegment {
            start: ts(2026, 2, 9, 8, 10, 0),
            end: ts(2026, 2, 9, 8, 30, 0),
        };
        let map = split_by_day(&[segment]);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&date(2026, 2, 9)], vec![segment]);
    }

    #[test]
    fn test_midnight_crossing_split_into_two() {
        let map = split_by_day(&[OfflineSegment {
            start: ts(2026, 2, 9, 23, 55, 0),
            end: ts(2026, 2, 10, 1, 30, 0),
        }]);
        assert_eq!(map.len(), 2);
        assert_eq!(
            map[&date(2026, 2, 9)],
            vec![OfflineSegment {
                start: ts(2026, 2, 9, 23, 55, 0),
                end: ts(2026, 2, 9, 23, 59, 59),
            }]
        );
        assert_eq!(
            map[&date(2026, 2, 10)],
            vec![OfflineSegment {
                start: ts(2026, 2, 10, 0, 0, 0),
                end: ts(2026, 2, 10, 1, 30, 0),
            }]
        );
    }

    #[test]
    fn test_multi_day_gap_fills_intermediate_days() {
        let map = split_by_day(&[OfflineSegment {
            start: ts(2026, 2, 9, 22, 0, 0),
            end: ts(2026, 2, 12, 6, 0, 0),
        }]);
        assert_eq!(map.len(), 4);
        assert_eq!(
            map[&date(2026, 2, 10)],
            vec![OfflineSegment {
                start: ts(2026, 2, 10, 0, 0, 0),
                end: ts(2026, 2, 10, 23, 59, 59),
            }]
        );
        assert_eq!(
            map[&date(2026, 2, 11)],
            vec![OfflineSegment {
                start: ts(2026, 2, 11, 0, 0, 0),
                end: ts(2026, 2, 11, 23, 59, 59),
            }]
        );
        assert_eq!(
            map[&date(2026, 2, 12)],
            vec![OfflineSegment {
                start: ts(2026, 2, 12, 0, 0, 0),
                end: ts(2026, 2, 12, 6, 0, 0),
            }]
        );
    }

    #[test]
    fn test_end_at_exact_midnight_drops_empty_piece() {
        let map = split_by_day(&[OfflineSegment {
            start: ts(2026, 2, 9, 23, 0, 0),
            end: ts(2026, 2, 10, 0, 0, 0),
        }]);
        assert_eq!(map.len(), 1);
        assert_eq!(
            map[&date(2026, 2, 9)],
            vec![OfflineSegment {
                start: ts(2026, 2, 9, 23, 0, 0),
                end: ts(2026, 2, 9, 23, 59, 59),
            }]
        );
    }

    #[test]
    fn test_split_reconstructs_original_bounds() {
        let original = OfflineSegment {
            start: ts(2026, 2, 9, 18, 42, 17),
            end: ts(2026, 2, 13, 3, 15, 9),
        };
        let map = split_by_day(&[original]);

        let pieces: Vec<OfflineSegment> = map.values().flatten().copied().collect();
        assert_eq!(pieces.first().unwrap().start, original.start);
        assert_eq!(pieces.last().unwrap().end, original.end);

        // No hole or overlap at any boundary: each piece ends at the last
        // instant of its day and the next one starts at the following
        // midnight, one second later.
        for pair in pieces.windows(2) {
            assert_eq!(pair[1].start - pair[0].end, Duration::seconds(1));
            assert_eq!(pair[1].start.time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn test_multiple_segments_same_day_stay_ordered() {
        let first = OfflineSegment {
            start: ts(2026, 2, 9, 8, 10, 0),
            end: ts(2026, 2, 9, 8, 30, 0),
        };
        let second = OfflineSegment {
            start: ts(2026, 2, 9, 17, 10, 0),
            end: ts(2026, 2, 9, 18, 10, 0),
        };
        let map = split_by_day(&[first, second]);
        assert_eq!(map[&date(2026, 2, 9)], vec![first, second]);
    }

    #[test]
    fn test_no_segments_yields_empty_map() {
        assert!(split_by_day(&[]).is_empty());
    }
}
