//! Ledger & Board Aggregation
//!
//! Pure transformations over fetched records: category grouping for the
//! spending summary, the per-day flow series behind the history chart, and
//! the overview dashboard stats. Everything here is pure and idempotent
//! over the same input list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::gig::BOARD_COLUMNS;
use super::{Gig, GigStatus, Milestone, MilestoneStatus, Transaction, TransactionKind};

use super::calendar::parse_day;

/// Filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// One chart slice: a category and its summed amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
}

/// A category with its transactions, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub total: f64,
    pub transactions: Vec<Transaction>,
}

/// One bar of the history chart: a day's summed credits and debits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFlow {
    pub date: String,
    pub credits: f64,
    pub debits: f64,
}

/// Gig count per board column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: GigStatus,
    pub count: usize,
}

/// Ordering used everywhere a ledger is displayed: newest first, undated
/// entries last.
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(newest_first);
}

fn newest_first(a: &Transaction, b: &Transaction) -> Ordering {
    // Option<DateTime> orders None first, so comparing b to a puts
    // undated entries at the end
    b.created_at.cmp(&a.created_at)
}

/// Per-category totals for one polarity, largest first.
pub fn category_slices(transactions: &[Transaction], kind: TransactionKind) -> Vec<CategorySlice> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *totals.entry(txn.category_or_default()).or_default() += txn.amount;
    }

    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(name, value)| CategorySlice {
            name: name.to_string(),
            value,
        })
        .collect();
    slices.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    slices
}

/// Dropdown options for one polarity: `All` plus every category present,
/// sorted lexicographically.
pub fn category_filters(transactions: &[Transaction], kind: TransactionKind) -> Vec<String> {
    let mut names: BTreeSet<String> = transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.category_or_default().to_string())
        .collect();
    names.insert(ALL_CATEGORIES.to_string());
    names.into_iter().collect()
}

/// Group one polarity by category.
///
/// `filter` narrows to a single category; `All` (or `None`) keeps every
/// category. Groups come back sorted by category name, each group's
/// transactions newest first. Categories with no matching transactions do
/// not appear.
pub fn group_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
    filter: Option<&str>,
) -> Vec<CategoryGroup> {
    let filter = filter.filter(|f| *f != ALL_CATEGORIES);

    let mut grouped: BTreeMap<&str, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.kind == kind) {
        let category = txn.category_or_default();
        if filter.is_some_and(|f| f != category) {
            continue;
        }
        grouped.entry(category).or_default().push(txn.clone());
    }

    grouped
        .into_iter()
        .map(|(category, mut txns)| {
            txns.sort_by(newest_first);
            CategoryGroup {
                category: category.to_string(),
                total: txns.iter().map(|t| t.amount).sum(),
                transactions: txns,
            }
        })
        .collect()
}

/// Per-day credit/debit sums, oldest day first. Undated entries are skipped.
pub fn daily_flow(transactions: &[Transaction]) -> Vec<DailyFlow> {
    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for txn in transactions {
        let Some(day) = txn.created_at.map(|ts| ts.date_naive()) else { continue };
        let entry = by_day.entry(day).or_default();
        match txn.kind {
            TransactionKind::Credit => entry.0 += txn.amount,
            TransactionKind::Debit => entry.1 += txn.amount,
        }
    }

    by_day
        .into_iter()
        .map(|(day, (credits, debits))| DailyFlow {
            date: day.format("%b %-d").to_string(),
            credits,
            debits,
        })
        .collect()
}

/// Sum of one polarity's amounts.
pub fn total_amount(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Payment still outstanding: every milestone not yet Done.
pub fn pending_payouts(milestones: &[Milestone]) -> f64 {
    milestones
        .iter()
        .filter(|m| m.status != MilestoneStatus::Done)
        .map(|m| m.payment_amount)
        .sum()
}

/// Gig counts for all four board columns, zero-filled, board order.
pub fn gig_status_counts(gigs: &[Gig]) -> Vec<StatusCount> {
    BOARD_COLUMNS
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: gigs.iter().filter(|g| g.status == *status).count(),
        })
        .collect()
}

/// The next `limit` milestones with a parseable due date, soonest first.
pub fn upcoming_milestones(milestones: &[Milestone], limit: usize) -> Vec<Milestone> {
    let mut dated: Vec<(NaiveDate, Milestone)> = milestones
        .iter()
        .filter_map(|m| {
            let day = m.due_date.as_deref().and_then(parse_day)?;
            Some((day, m.clone()))
        })
        .collect();
    dated.sort_by(|a, b| a.0.cmp(&b.0));
    dated.into_iter().take(limit).map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn txn(id: &str, kind: TransactionKind, category: Option<&str>, amount: f64, day: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            amount,
            tax: 0.0,
            tax_percentage: 0.0,
            description: None,
            category: category.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).single(),
        }
    }

    fn sample_ledger() -> Vec<Transaction> {
        vec![
            txn("t1", TransactionKind::Credit, Some("Design"), 100.0, 1),
            txn("t2", TransactionKind::Credit, Some("Design"), 50.0, 3),
            txn("t3", TransactionKind::Debit, Some("Rent"), 30.0, 2),
        ]
    }

    #[test]
    fn test_slices_partition_by_kind() {
        let ledger = sample_ledger();

        let credits = category_slices(&ledger, TransactionKind::Credit);
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].name, "Design");
        assert_eq!(credits[0].value, 150.0);

        let debits = category_slices(&ledger, TransactionKind::Debit);
        assert_eq!(debits.len(), 1);
        assert_eq!(debits[0].name, "Rent");
        assert_eq!(debits[0].value, 30.0);
    }

    #[test]
    fn test_slices_sort_largest_first() {
        let ledger = vec![
            txn("t1", TransactionKind::Debit, Some("Rent"), 30.0, 1),
            txn("t2", TransactionKind::Debit, Some("Software"), 90.0, 2),
        ];
        let slices = category_slices(&ledger, TransactionKind::Debit);
        assert_eq!(slices[0].name, "Software");
        assert_eq!(slices[1].name, "Rent");
    }

    #[test]
    fn test_groups_sort_by_name_and_newest_first_within() {
        let ledger = vec![
            txn("t1", TransactionKind::Credit, Some("Writing"), 10.0, 1),
            txn("t2", TransactionKind::Credit, Some("Design"), 20.0, 2),
            txn("t3", TransactionKind::Credit, Some("Design"), 30.0, 5),
        ];
        let groups = group_by_category(&ledger, TransactionKind::Credit, None);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Design");
        assert_eq!(groups[1].category, "Writing");
        // newest first inside the group
        let ids: Vec<&str> = groups[0].transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2"]);
        assert_eq!(groups[0].total, 50.0);
    }

    #[test]
    fn test_group_union_equals_filtered_set() {
        let ledger = sample_ledger();
        let groups = group_by_category(&ledger, TransactionKind::Credit, None);
        let grouped: usize = groups.iter().map(|g| g.transactions.len()).sum();
        let expected = ledger.iter().filter(|t| t.kind == TransactionKind::Credit).count();
        assert_eq!(grouped, expected);
    }

    #[test]
    fn test_category_filter_narrows_and_all_does_not() {
        let ledger = vec![
            txn("t1", TransactionKind::Debit, Some("Rent"), 30.0, 1),
            txn("t2", TransactionKind::Debit, Some("Software"), 15.0, 2),
        ];
        let all = group_by_category(&ledger, TransactionKind::Debit, Some(ALL_CATEGORIES));
        assert_eq!(all.len(), 2);

        let rent = group_by_category(&ledger, TransactionKind::Debit, Some("Rent"));
        assert_eq!(rent.len(), 1);
        assert_eq!(rent[0].category, "Rent");
    }

    #[test]
    fn test_missing_category_groups_as_uncategorized() {
        let ledger = vec![txn("t1", TransactionKind::Debit, None, 5.0, 1)];
        let groups = group_by_category(&ledger, TransactionKind::Debit, None);
        assert_eq!(groups[0].category, "Uncategorized");
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let ledger = sample_ledger();
        assert_eq!(
            group_by_category(&ledger, TransactionKind::Credit, None),
            group_by_category(&ledger, TransactionKind::Credit, None)
        );
    }

    #[test]
    fn test_filters_include_all_and_sort() {
        let ledger = sample_ledger();
        assert_eq!(
            category_filters(&ledger, TransactionKind::Credit),
            vec!["All".to_string(), "Design".to_string()]
        );
    }

    #[test]
    fn test_daily_flow_sums_per_day_oldest_first() {
        let ledger = sample_ledger();
        let series = daily_flow(&ledger);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, "Mar 1");
        assert_eq!(series[0].credits, 100.0);
        assert_eq!(series[0].debits, 0.0);
        assert_eq!(series[1].debits, 30.0);
        assert_eq!(series[2].credits, 50.0);
    }

    #[test]
    fn test_sort_newest_first_puts_undated_last() {
        let mut ledger = sample_ledger();
        ledger.push(Transaction {
            created_at: None,
            ..ledger[0].clone()
        });
        sort_newest_first(&mut ledger);
        assert_eq!(ledger[0].id, "t2");
        assert!(ledger.last().unwrap().created_at.is_none());
    }

    #[test]
    fn test_overview_stats() {
        use crate::domain::MilestoneStatus;

        let ledger = sample_ledger();
        assert_eq!(total_amount(&ledger, TransactionKind::Credit), 150.0);
        assert_eq!(total_amount(&ledger, TransactionKind::Debit), 30.0);

        let milestone = |status: MilestoneStatus, amount: f64, due: Option<&str>| Milestone {
            id: "m".to_string(),
            gig_id: None,
            title: "m".to_string(),
            description: None,
            payment_amount: amount,
            status,
            start_date: None,
            due_date: due.map(str::to_string),
        };
        let milestones = vec![
            milestone(MilestoneStatus::Done, 100.0, Some("2026-03-01")),
            milestone(MilestoneStatus::ToDo, 40.0, Some("2026-04-01")),
            milestone(MilestoneStatus::Blocked, 60.0, None),
        ];
        assert_eq!(pending_payouts(&milestones), 100.0);

        let upcoming = upcoming_milestones(&milestones, 5);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].due_date.as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn test_status_counts_zero_fill_all_columns() {
        let gig = |status: GigStatus| Gig {
            id: "g".to_string(),
            title: "g".to_string(),
            description: None,
            client_name: None,
            total_value: 0.0,
            status,
            due_date: None,
        };
        let counts = gig_status_counts(&[gig(GigStatus::Open), gig(GigStatus::Open), gig(GigStatus::Completed)]);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts[0].status, GigStatus::Open);
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].count, 0);
        assert_eq!(counts[2].count, 1);
        assert_eq!(counts[3].count, 0);
    }
}
