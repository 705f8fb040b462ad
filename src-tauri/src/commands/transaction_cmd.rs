//! Ledger Commands: transactions, CSV import/export, PDF report

use std::io::Write;
use serde::{Deserialize, Serialize};
use tauri::State;
use tauri_plugin_dialog::DialogExt;

use crate::domain::summary::{self, DailyFlow};
use crate::domain::{csv_import, Transaction, TransactionDraft, TransactionKind};
use crate::error::AppError;
use crate::AppState;

/// Everything the ledger dashboard renders from, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerView {
    pub balance: f64,
    /// Newest first
    pub transactions: Vec<Transaction>,
    /// Per-day chart series, oldest first
    pub daily: Vec<DailyFlow>,
}

#[tauri::command]
pub async fn load_ledger(
    state: State<'_, AppState>,
    start_date: Option<String>,
    end_date: Option<String>,
) -> Result<LedgerView, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;

    // Balance and list are independent requests; issue them together
    let (balance, mut transactions) = tokio::try_join!(
        state.api.balance(&token),
        state
            .api
            .transactions(&token, start_date.as_deref(), end_date.as_deref()),
    )
    .map_err(|e| e.to_string())?;

    summary::sort_newest_first(&mut transactions);
    let daily = summary::daily_flow(&transactions);
    Ok(LedgerView {
        balance,
        transactions,
        daily,
    })
}

#[tauri::command]
pub async fn create_transaction(
    state: State<'_, AppState>,
    kind: String,
    amount: f64,
    description: Option<String>,
    category: Option<String>,
) -> Result<Transaction, String> {
    let kind = TransactionKind::parse(&kind).ok_or("Transaction type must be credit or debit.")?;
    let draft = TransactionDraft::from_input(kind, amount, description, category).map_err(|e| e.to_string())?;
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .create_transaction(&token, &draft)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_transaction(
    state: State<'_, AppState>,
    id: String,
    kind: String,
    amount: f64,
    description: Option<String>,
    category: Option<String>,
) -> Result<Transaction, String> {
    let kind = TransactionKind::parse(&kind).ok_or("Transaction type must be credit or debit.")?;
    let draft = TransactionDraft::from_input(kind, amount, description, category).map_err(|e| e.to_string())?;
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .update_transaction(&token, &id, &draft)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_transaction(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .delete_transaction(&token, &id)
        .await
        .map_err(|e| e.to_string())
}

/// Let the user pick an import file.
#[tauri::command]
pub async fn pick_csv_file(app: tauri::AppHandle) -> Result<Option<String>, String> {
    let result = app
        .dialog()
        .file()
        .add_filter("CSV", &["csv"])
        .blocking_pick_file();
    Ok(result.map(|path| path.to_string()))
}

/// Validate a picked file and, only if it is fully well-formed, upload it.
/// Returns the number of imported rows.
#[tauri::command]
pub async fn import_transactions_csv(state: State<'_, AppState>, path: String) -> Result<usize, String> {
    let validated =
        csv_import::validate_csv_file(std::path::Path::new(&path)).map_err(|e| e.to_string())?;
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .upload_csv(&token, &validated)
        .await
        .map_err(|e| e.to_string())?;
    tracing::info!(rows = validated.row_count, "imported transactions CSV");
    Ok(validated.row_count)
}

/// Write the full ledger to a user-chosen CSV file.
/// Returns the chosen path, or None when the dialog is cancelled.
#[tauri::command]
pub async fn export_transactions_csv(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> Result<Option<String>, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let transactions = state
        .api
        .transactions(&token, None, None)
        .await
        .map_err(|e| e.to_string())?;

    let Some(picked) = app
        .dialog()
        .file()
        .set_file_name("transactions.csv")
        .add_filter("CSV", &["csv"])
        .blocking_save_file()
    else {
        return Ok(None);
    };

    let path = picked.to_string();
    let data = build_export(&transactions).map_err(|e| e.to_string())?;
    std::fs::write(&path, data).map_err(|e| e.to_string())?;
    tracing::info!(rows = transactions.len(), %path, "exported transactions CSV");
    Ok(Some(path))
}

/// CSV body for export; the column set round-trips through the importer.
fn build_export(transactions: &[Transaction]) -> crate::error::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["createdAt", "type", "category", "description", "amount", "tax", "taxpercentage"])
        .map_err(|e| AppError::Io(e.to_string()))?;
    for txn in transactions {
        writer
            .write_record([
                txn.created_at.map(|ts| ts.to_rfc3339()).unwrap_or_default(),
                txn.kind.as_str().to_string(),
                txn.category.clone().unwrap_or_default(),
                txn.description.clone().unwrap_or_default(),
                format!("{:.2}", txn.amount),
                format!("{:.2}", txn.tax),
                format!("{}", txn.tax_percentage),
            ])
            .map_err(|e| AppError::Io(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Io(e.to_string()))
}

/// Fetch the date-range report PDF and open it in the system viewer.
#[tauri::command]
pub async fn open_report(
    state: State<'_, AppState>,
    start_date: String,
    end_date: String,
) -> Result<String, String> {
    if start_date.trim().is_empty() || end_date.trim().is_empty() {
        return Err("Pick a start and end date for the report.".to_string());
    }
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let bytes = state
        .api
        .report_pdf(&token, &start_date, &end_date)
        .await
        .map_err(|e| e.to_string())?;
    let path = write_and_open_pdf("gigdesk-report", &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}

/// Write PDF bytes next to the other temp files and hand the path to the
/// system viewer. Used by the report and invoice commands.
pub(crate) fn write_and_open_pdf(stem: &str, bytes: &[u8]) -> crate::error::Result<String> {
    let mut file = tempfile::Builder::new()
        .prefix(stem)
        .suffix(".pdf")
        .tempfile()?;
    file.write_all(bytes)?;
    // keep() so the viewer outlives this call
    let (_, path) = file.keep().map_err(|e| AppError::Io(e.to_string()))?;
    let path = path.display().to_string();
    open::that(&path).map_err(|e| AppError::Io(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_round_trips_through_importer() {
        let transactions = vec![Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Credit,
            amount: 120.0,
            tax: 3.6,
            tax_percentage: 3.0,
            description: Some("Logo".to_string()),
            category: Some("Design".to_string()),
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).single(),
        }];

        let bytes = build_export(&transactions).unwrap();
        assert_eq!(crate::domain::csv_import::validate_csv_bytes(&bytes).unwrap(), 1);
    }

    #[test]
    fn test_export_quotes_embedded_commas() {
        let transactions = vec![Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Debit,
            amount: 10.0,
            tax: 0.0,
            tax_percentage: 0.0,
            description: Some("Rent, March".to_string()),
            category: None,
            created_at: None,
        }];

        let bytes = build_export(&transactions).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Rent, March\""));
    }
}
