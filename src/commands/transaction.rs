//! Ledger Commands
//!
//! Frontend bindings for transaction, CSV, and report commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke_command, to_args};
use crate::models::{LedgerView, Transaction};

#[derive(Serialize)]
struct LoadLedgerArgs<'a> {
    #[serde(rename = "startDate")]
    start_date: Option<&'a str>,
    #[serde(rename = "endDate")]
    end_date: Option<&'a str>,
}

#[derive(Serialize)]
pub struct TransactionArgs<'a> {
    pub kind: &'a str,
    pub amount: f64,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
}

#[derive(Serialize)]
struct UpdateTransactionArgs<'a> {
    id: &'a str,
    kind: &'a str,
    amount: f64,
    description: Option<&'a str>,
    category: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct PathArgs<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct ReportArgs<'a> {
    #[serde(rename = "startDate")]
    start_date: &'a str,
    #[serde(rename = "endDate")]
    end_date: &'a str,
}

pub async fn load_ledger(start_date: Option<&str>, end_date: Option<&str>) -> Result<LedgerView, String> {
    let args = to_args(&LoadLedgerArgs { start_date, end_date })?;
    invoke_command("load_ledger", args).await
}

pub async fn create_transaction(args: &TransactionArgs<'_>) -> Result<Transaction, String> {
    let js_args = to_args(args)?;
    invoke_command("create_transaction", js_args).await
}

pub async fn update_transaction(
    id: &str,
    args: &TransactionArgs<'_>,
) -> Result<Transaction, String> {
    let js_args = to_args(&UpdateTransactionArgs {
        id,
        kind: args.kind,
        amount: args.amount,
        description: args.description,
        category: args.category,
    })?;
    invoke_command("update_transaction", js_args).await
}

pub async fn delete_transaction(id: &str) -> Result<(), String> {
    let args = to_args(&IdArgs { id })?;
    invoke_command("delete_transaction", args).await
}

/// File-picker for the importer; None when the user cancels.
pub async fn pick_csv_file() -> Result<Option<String>, String> {
    invoke_command("pick_csv_file", JsValue::NULL).await
}

/// Validate and upload an import file; returns the imported row count.
pub async fn import_transactions_csv(path: &str) -> Result<usize, String> {
    let args = to_args(&PathArgs { path })?;
    invoke_command("import_transactions_csv", args).await
}

/// Save the ledger to a CSV chosen in a save dialog; None when cancelled.
pub async fn export_transactions_csv() -> Result<Option<String>, String> {
    invoke_command("export_transactions_csv", JsValue::NULL).await
}

/// Fetch the date-range report PDF and open it in the system viewer.
pub async fn open_report(start_date: &str, end_date: &str) -> Result<String, String> {
    let args = to_args(&ReportArgs { start_date, end_date })?;
    invoke_command("open_report", args).await
}
