//! Transaction Entity
//!
//! Ledger entries are owned by the backend; the client holds read/write
//! copies only for the duration of a form session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Category shown when a transaction has none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Flat tax applied to credits at entry time; debits carry no tax.
pub const CREDIT_TAX_PERCENTAGE: f64 = 3.0;

/// Income/expense polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "credit",
            TransactionKind::Debit => "debit",
        }
    }

    /// Case-insensitive parse; anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Some(TransactionKind::Credit),
            "debit" => Some(TransactionKind::Debit),
            _ => None,
        }
    }
}

/// A ledger entry as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Backend id (some deployments still send Mongo-style `_id`)
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Amount in USD, always positive; polarity comes from `kind`
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
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Displayed total: credits net of tax, debits gross of tax.
    pub fn total(&self) -> f64 {
        match self.kind {
            TransactionKind::Credit => self.amount - self.tax,
            TransactionKind::Debit => self.amount + self.tax,
        }
    }

    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => UNCATEGORIZED,
        }
    }
}

/// Payload for creating or updating a ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub tax: f64,
    pub tax_percentage: f64,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl TransactionDraft {
    /// Build a draft from form input, applying the entry-time tax policy.
    pub fn from_input(
        kind: TransactionKind,
        amount: f64,
        description: Option<String>,
        category: Option<String>,
    ) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Validation("Please enter a valid amount.".to_string()));
        }
        let (tax, tax_percentage) = match kind {
            TransactionKind::Credit => (amount * CREDIT_TAX_PERCENTAGE / 100.0, CREDIT_TAX_PERCENTAGE),
            TransactionKind::Debit => (0.0, 0.0),
        };
        Ok(Self {
            kind,
            amount,
            tax,
            tax_percentage,
            description: description.filter(|d| !d.trim().is_empty()),
            category: category.filter(|c| !c.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(TransactionKind::parse("Credit"), Some(TransactionKind::Credit));
        assert_eq!(TransactionKind::parse(" DEBIT "), Some(TransactionKind::Debit));
        assert_eq!(TransactionKind::parse("transfer"), None);
    }

    #[test]
    fn test_credit_draft_carries_flat_tax() {
        let draft = TransactionDraft::from_input(
            TransactionKind::Credit,
            200.0,
            Some("Logo work".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(draft.tax, 6.0);
        assert_eq!(draft.tax_percentage, CREDIT_TAX_PERCENTAGE);
    }

    #[test]
    fn test_debit_draft_has_no_tax() {
        let draft =
            TransactionDraft::from_input(TransactionKind::Debit, 50.0, None, None).unwrap();
        assert_eq!(draft.tax, 0.0);
        assert_eq!(draft.tax_percentage, 0.0);
    }

    #[test]
    fn test_non_positive_amount_is_rejected() {
        assert!(TransactionDraft::from_input(TransactionKind::Debit, 0.0, None, None).is_err());
        assert!(TransactionDraft::from_input(TransactionKind::Debit, -3.0, None, None).is_err());
        assert!(TransactionDraft::from_input(TransactionKind::Debit, f64::NAN, None, None).is_err());
    }

    #[test]
    fn test_total_nets_tax_for_credits_only() {
        let mut txn = Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Credit,
            amount: 100.0,
            tax: 3.0,
            tax_percentage: 3.0,
            description: None,
            category: None,
            created_at: None,
        };
        assert_eq!(txn.total(), 97.0);
        txn.kind = TransactionKind::Debit;
        assert_eq!(txn.total(), 103.0);
    }

    #[test]
    fn test_blank_category_falls_back_to_uncategorized() {
        let txn = Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Debit,
            amount: 10.0,
            tax: 0.0,
            tax_percentage: 0.0,
            description: None,
            category: Some("   ".to_string()),
            created_at: None,
        };
        assert_eq!(txn.category_or_default(), UNCATEGORIZED);
    }

    #[test]
    fn test_deserializes_mongo_style_id() {
        let txn: Transaction = serde_json::from_str(
            r#"{"_id":"abc","type":"credit","amount":10.0,"createdAt":"2026-01-05T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(txn.id, "abc");
        assert!(txn.created_at.is_some());
    }
}
