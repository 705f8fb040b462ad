//! Calendar Index
//!
//! Date-keyed lookup of milestones across all gigs, driving day
//! highlighting and day-click details in the calendar view.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

use super::Milestone;

/// Parse a backend date value into a UTC calendar day.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` strings; timestamps
/// are bucketed by their UTC day.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Format a day as the index key (`YYYY-MM-DD`).
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Index milestones by due day.
///
/// Milestones with a missing or unparseable due date are excluded from the
/// index only; they still appear in every other view.
pub fn index_by_due_day(milestones: &[Milestone]) -> BTreeMap<String, Vec<Milestone>> {
    let mut index: BTreeMap<String, Vec<Milestone>> = BTreeMap::new();
    for milestone in milestones {
        let Some(raw) = milestone.due_date.as_deref() else { continue };
        let Some(day) = parse_day(raw) else { continue };
        index.entry(day_key(day)).or_default().push(milestone.clone());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MilestoneStatus;

    fn milestone(id: &str, due: Option<&str>) -> Milestone {
        Milestone {
            id: id.to_string(),
            gig_id: Some("g1".to_string()),
            title: format!("Milestone {}", id),
            description: None,
            payment_amount: 100.0,
            status: MilestoneStatus::ToDo,
            start_date: None,
            due_date: due.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_day_handles_both_formats() {
        assert_eq!(
            parse_day("2026-04-02"),
            NaiveDate::from_ymd_opt(2026, 4, 2)
        );
        assert_eq!(
            parse_day("2026-04-02T18:30:00.000Z"),
            NaiveDate::from_ymd_opt(2026, 4, 2)
        );
        assert_eq!(parse_day("next tuesday"), None);
    }

    #[test]
    fn test_timestamps_bucket_by_utc_day() {
        // 23:30 -02:00 is already the next day in UTC
        assert_eq!(
            parse_day("2026-04-02T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2026, 4, 3)
        );
    }

    #[test]
    fn test_index_groups_by_day_and_skips_undated() {
        let milestones = vec![
            milestone("a", Some("2026-04-02")),
            milestone("b", Some("2026-04-02T09:00:00Z")),
            milestone("c", Some("2026-05-01")),
            milestone("d", None),
            milestone("e", Some("whenever")),
        ];
        let index = index_by_due_day(&milestones);

        assert_eq!(index.len(), 2);
        let april_2: Vec<&str> = index["2026-04-02"].iter().map(|m| m.id.as_str()).collect();
        assert_eq!(april_2, vec!["a", "b"]);
        assert_eq!(index["2026-05-01"].len(), 1);

        // every indexed milestone has a parseable due date
        let indexed: usize = index.values().map(Vec::len).sum();
        assert_eq!(indexed, 3);
    }

    #[test]
    fn test_empty_day_lookup_is_empty_not_error() {
        let index = index_by_due_day(&[milestone("a", Some("2026-04-02"))]);
        assert!(index.get("2026-04-03").is_none());
        assert!(index.get("2026-04-03").cloned().unwrap_or_default().is_empty());
    }
}
