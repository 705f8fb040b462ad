//! Milestone Entity
//!
//! A payable sub-deliverable of a gig with its own dates and status.

use serde::{Deserialize, Serialize};

use super::calendar;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    Blocked,
    Done,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::ToDo => "To Do",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Blocked => "Blocked",
            MilestoneStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(alias = "_id")]
    pub id: String,
    /// Owning gig; older backend records expose it as `gig`
    #[serde(default, alias = "gig")]
    pub gig_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_amount: f64,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Payload for creating or updating a milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_amount: f64,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl MilestoneDraft {
    /// Reject inverted date ranges before they reach the backend.
    ///
    /// The server is not assumed to enforce start <= due, so the client
    /// checks at every input path it owns. Unparseable dates are left for
    /// the backend to judge.
    pub fn validate_dates(&self) -> Result<()> {
        let (Some(start_raw), Some(due_raw)) = (self.start_date.as_deref(), self.due_date.as_deref())
        else {
            return Ok(());
        };
        if let (Some(start), Some(due)) = (calendar::parse_day(start_raw), calendar::parse_day(due_raw)) {
            if start > due {
                return Err(AppError::Validation(
                    "Start date cannot be after the due date.".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(start: Option<&str>, due: Option<&str>) -> MilestoneDraft {
        MilestoneDraft {
            title: "Wireframes".to_string(),
            description: None,
            payment_amount: 300.0,
            status: MilestoneStatus::ToDo,
            start_date: start.map(str::to_string),
            due_date: due.map(str::to_string),
        }
    }

    #[test]
    fn test_status_uses_backend_labels() {
        assert_eq!(
            serde_json::to_string(&MilestoneStatus::ToDo).unwrap(),
            "\"To Do\""
        );
        let back: MilestoneStatus = serde_json::from_str("\"Blocked\"").unwrap();
        assert_eq!(back, MilestoneStatus::Blocked);
    }

    #[test]
    fn test_ordered_dates_pass() {
        assert!(draft(Some("2026-03-01"), Some("2026-03-15")).validate_dates().is_ok());
        assert!(draft(Some("2026-03-15"), Some("2026-03-15")).validate_dates().is_ok());
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        assert!(draft(Some("2026-03-20"), Some("2026-03-15")).validate_dates().is_err());
    }

    #[test]
    fn test_missing_or_unparseable_dates_pass_through() {
        assert!(draft(None, Some("2026-03-15")).validate_dates().is_ok());
        assert!(draft(Some("soon"), Some("2026-03-15")).validate_dates().is_ok());
    }

    #[test]
    fn test_milestone_accepts_gig_alias() {
        let m: Milestone = serde_json::from_str(
            r#"{"_id":"m1","gig":"g1","title":"Draft","status":"To Do","paymentAmount":50}"#,
        )
        .unwrap();
        assert_eq!(m.gig_id.as_deref(), Some("g1"));
    }
}
