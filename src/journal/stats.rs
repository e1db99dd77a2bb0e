//! Journal Statistics Module
//!
//! Derives entry counts from the current list. Pure: given the same
//! entries and the same "now", the result is always the same.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::journal::entry::Entry;

// == Journal Stats ==
/// Counts derived from the entry list against the local calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JournalStats {
    /// All entries
    pub total: usize,
    /// Entries created since local midnight today
    pub today: usize,
    /// Entries created in the last 7 calendar days, inclusive of today
    pub week: usize,
}

impl JournalStats {
    // == Calculate ==
    /// Computes counts for `entries` as seen from `now`.
    ///
    /// Boundaries are local midnights: an entry stamped exactly at
    /// today's midnight counts toward `today`, and the week window opens
    /// at midnight seven days before today, inclusive.
    pub fn calculate(entries: &[Entry], now: DateTime<Local>) -> Self {
        let today_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time of day");
        let week_start = today_start - Duration::days(7);

        let mut stats = Self {
            total: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            let Some(created) = local_naive(entry.timestamp) else {
                continue;
            };
            if created >= today_start {
                stats.today += 1;
            }
            if created >= week_start {
                stats.week += 1;
            }
        }

        stats
    }
}

/// Converts an epoch-millisecond stamp to naive local time.
fn local_naive(timestamp_millis: i64) -> Option<NaiveDateTime> {
    Local
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|dt| dt.naive_local())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
            .and_local_timezone(Local)
            .single()
            .unwrap()
    }

    fn entry_at(id: i64, stamp: DateTime<Local>) -> Entry {
        Entry {
            id,
            timestamp: stamp.timestamp_millis(),
            topic: "Topic".to_string(),
            content: "Content long enough.".to_string(),
            link: None,
            image_url: None,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = JournalStats::calculate(&[], local(2026, 3, 10, 12, 0));
        assert_eq!(stats, JournalStats::default());
    }

    #[test]
    fn test_counts_by_calendar_window() {
        let now = local(2026, 3, 10, 12, 0);
        let entries = vec![
            entry_at(1, local(2026, 3, 10, 9, 30)),  // today
            entry_at(2, local(2026, 3, 9, 23, 59)),  // yesterday, in week
            entry_at(3, local(2026, 3, 1, 8, 0)),    // before the window
        ];

        let stats = JournalStats::calculate(&entries, now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.week, 2);
    }

    #[test]
    fn test_midnight_boundary_counts_toward_today() {
        let now = local(2026, 3, 10, 0, 30);
        let entries = vec![entry_at(1, local(2026, 3, 10, 0, 0))];

        let stats = JournalStats::calculate(&entries, now);
        assert_eq!(stats.today, 1);
        assert_eq!(stats.week, 1);
    }

    #[test]
    fn test_week_window_is_inclusive_at_seven_days() {
        let now = local(2026, 3, 10, 12, 0);
        let entries = vec![
            entry_at(1, local(2026, 3, 3, 12, 0)), // exactly 7 days old
            entry_at(2, local(2026, 3, 3, 0, 0)),  // midnight 7 days ago
            entry_at(3, local(2026, 3, 2, 12, 0)), // 8 days old
        ];

        let stats = JournalStats::calculate(&entries, now);
        assert_eq!(stats.today, 0);
        assert_eq!(stats.week, 2);
    }

    #[test]
    fn test_serializes_counts() {
        let stats = JournalStats {
            total: 5,
            today: 1,
            week: 3,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["total"], 5);
        assert_eq!(json["today"], 1);
        assert_eq!(json["week"], 3);
    }
}
