//! Frontend Models
//!
//! Data structures matching what the backend commands return. Statuses and
//! timestamps stay strings here; the view layer only displays them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub tax_percentage: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.kind == "credit"
    }

    /// Displayed total: credits net of tax, debits gross of tax.
    pub fn total(&self) -> f64 {
        if self.is_credit() {
            self.amount - self.tax
        } else {
            self.amount + self.tax
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub total_value: f64,
    pub status: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    #[serde(default)]
    pub gig_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_amount: f64,
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Milestone statuses in the order the selects offer them
pub const MILESTONE_STATUSES: [&str; 4] = ["To Do", "In Progress", "Blocked", "Done"];

// ========================
// Command payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlow {
    pub date: String,
    pub credits: f64,
    pub debits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub balance: f64,
    pub transactions: Vec<Transaction>,
    pub daily: Vec<DailyFlow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub total: f64,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummaryView {
    pub credit_slices: Vec<CategorySlice>,
    pub debit_slices: Vec<CategorySlice>,
    pub credit_filters: Vec<String>,
    pub debit_filters: Vec<String>,
    pub credit_groups: Vec<CategoryGroup>,
    pub debit_groups: Vec<CategoryGroup>,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub balance: f64,
    pub total_credits: f64,
    pub total_debits: f64,
    pub net_change: f64,
    pub pending_payouts: f64,
    pub gig_status_counts: Vec<StatusCount>,
    pub upcoming_milestones: Vec<Milestone>,
    pub latest_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub gigs: Vec<Gig>,
    pub milestones: HashMap<String, Vec<Milestone>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub index: BTreeMap<String, Vec<Milestone>>,
    pub gig_titles: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}
