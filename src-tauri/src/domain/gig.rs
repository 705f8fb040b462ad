//! Gig Entity
//!
//! A client engagement with an overall status and monetary value.
//! Status is the sole driver of board-column placement.

use serde::{Deserialize, Serialize};

/// Board column / gig lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GigStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Archived,
}

/// Board columns in display order
pub const BOARD_COLUMNS: [GigStatus; 4] = [
    GigStatus::Open,
    GigStatus::InProgress,
    GigStatus::Completed,
    GigStatus::Archived,
];

impl GigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GigStatus::Open => "Open",
            GigStatus::InProgress => "In Progress",
            GigStatus::Completed => "Completed",
            GigStatus::Archived => "Archived",
        }
    }

    /// Parse a column label; anything outside the board is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        BOARD_COLUMNS.iter().copied().find(|c| c.as_str() == s.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub total_value: f64,
    pub status: GigStatus,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Payload for creating or updating a gig
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GigDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub total_value: f64,
    pub status: GigStatus,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl From<&Gig> for GigDraft {
    fn from(gig: &Gig) -> Self {
        Self {
            title: gig.title.clone(),
            description: gig.description.clone(),
            client_name: gig.client_name.clone(),
            total_value: gig.total_value,
            status: gig.status,
            due_date: gig.due_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_labels() {
        for status in BOARD_COLUMNS {
            assert_eq!(GigStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(GigStatus::parse("Backlog"), None);
    }

    #[test]
    fn test_status_serializes_with_spaces() {
        let json = serde_json::to_string(&GigStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let back: GigStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(back, GigStatus::InProgress);
    }

    #[test]
    fn test_gig_deserializes_backend_shape() {
        let gig: Gig = serde_json::from_str(
            r#"{"_id":"g1","title":"Site redesign","clientName":"Acme","totalValue":1200.5,"status":"Open"}"#,
        )
        .unwrap();
        assert_eq!(gig.id, "g1");
        assert_eq!(gig.client_name.as_deref(), Some("Acme"));
        assert_eq!(gig.status, GigStatus::Open);
        assert!(gig.due_date.is_none());
    }
}
