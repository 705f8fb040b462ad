//! Aggregate View Commands: spending summary, overview dashboard,
//! calendar index, currency rates

use std::collections::{BTreeMap, HashMap};
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::api::Rates;
use crate::domain::summary::{self, CategoryGroup, CategorySlice, StatusCount};
use crate::domain::{calendar, Milestone, Transaction, TransactionKind};
use crate::AppState;

use super::gig_cmd::fetch_milestones_by_gig;

/// Everything the spending summary view renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[tauri::command]
pub async fn expense_summary(
    state: State<'_, AppState>,
    credit_filter: Option<String>,
    debit_filter: Option<String>,
) -> Result<ExpenseSummaryView, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let transactions = state
        .api
        .transactions(&token, None, None)
        .await
        .map_err(|e| e.to_string())?;

    Ok(ExpenseSummaryView {
        credit_slices: summary::category_slices(&transactions, TransactionKind::Credit),
        debit_slices: summary::category_slices(&transactions, TransactionKind::Debit),
        credit_filters: summary::category_filters(&transactions, TransactionKind::Credit),
        debit_filters: summary::category_filters(&transactions, TransactionKind::Debit),
        credit_groups: summary::group_by_category(
            &transactions,
            TransactionKind::Credit,
            credit_filter.as_deref(),
        ),
        debit_groups: summary::group_by_category(
            &transactions,
            TransactionKind::Debit,
            debit_filter.as_deref(),
        ),
        transaction_count: transactions.len(),
    })
}

/// Everything the overview dashboard renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// How many "next due" milestones the overview shows.
const UPCOMING_LIMIT: usize = 5;
/// How many recent transactions the overview shows.
const LATEST_LIMIT: usize = 6;

#[tauri::command]
pub async fn load_overview(state: State<'_, AppState>) -> Result<OverviewView, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;

    let (balance, mut transactions, gigs) = tokio::try_join!(
        state.api.balance(&token),
        state.api.transactions(&token, None, None),
        state.api.gigs(&token),
    )
    .map_err(|e| e.to_string())?;

    let milestones_by_gig = fetch_milestones_by_gig(&state.api, &token, &gigs).await;
    let milestones: Vec<Milestone> = milestones_by_gig.into_values().flatten().collect();

    summary::sort_newest_first(&mut transactions);
    let total_credits = summary::total_amount(&transactions, TransactionKind::Credit);
    let total_debits = summary::total_amount(&transactions, TransactionKind::Debit);

    Ok(OverviewView {
        balance,
        total_credits,
        total_debits,
        net_change: total_credits - total_debits,
        pending_payouts: summary::pending_payouts(&milestones),
        gig_status_counts: summary::gig_status_counts(&gigs),
        upcoming_milestones: summary::upcoming_milestones(&milestones, UPCOMING_LIMIT),
        latest_transactions: transactions.into_iter().take(LATEST_LIMIT).collect(),
    })
}

/// Everything the calendar view renders from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Milestones of every gig indexed by due day (`YYYY-MM-DD`)
    pub index: BTreeMap<String, Vec<Milestone>>,
    /// Gig titles by gig id, for the day-detail panel
    pub gig_titles: HashMap<String, String>,
}

#[tauri::command]
pub async fn calendar_index(state: State<'_, AppState>) -> Result<CalendarView, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let gigs = state.api.gigs(&token).await.map_err(|e| e.to_string())?;
    let milestones_by_gig = fetch_milestones_by_gig(&state.api, &token, &gigs).await;
    let milestones: Vec<Milestone> = milestones_by_gig.into_values().flatten().collect();

    Ok(CalendarView {
        index: calendar::index_by_due_day(&milestones),
        gig_titles: gigs.into_iter().map(|g| (g.id, g.title)).collect(),
    })
}

#[tauri::command]
pub async fn fetch_rates(state: State<'_, AppState>) -> Result<Rates, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.rates(&token).await.map_err(|e| e.to_string())
}
