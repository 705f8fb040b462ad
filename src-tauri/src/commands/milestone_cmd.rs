//! Milestone Commands

use tauri::State;

use crate::domain::{Milestone, MilestoneDraft};
use crate::AppState;

use super::transaction_cmd::write_and_open_pdf;

#[tauri::command]
pub async fn create_milestone(
    state: State<'_, AppState>,
    gig_id: String,
    draft: MilestoneDraft,
) -> Result<Milestone, String> {
    if draft.title.trim().is_empty() {
        return Err("Milestone title is required.".to_string());
    }
    draft.validate_dates().map_err(|e| e.to_string())?;
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .create_milestone(&token, &gig_id, &draft)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_milestone(
    state: State<'_, AppState>,
    id: String,
    draft: MilestoneDraft,
) -> Result<Milestone, String> {
    if draft.title.trim().is_empty() {
        return Err("Milestone title is required.".to_string());
    }
    draft.validate_dates().map_err(|e| e.to_string())?;
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .update_milestone(&token, &id, &draft)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_milestone(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state
        .api
        .delete_milestone(&token, &id)
        .await
        .map_err(|e| e.to_string())
}

/// Fetch the milestone invoice PDF and open it in the system viewer.
#[tauri::command]
pub async fn open_invoice(
    state: State<'_, AppState>,
    id: String,
    client_name: String,
    freelancer_name: String,
) -> Result<String, String> {
    if client_name.trim().is_empty() || freelancer_name.trim().is_empty() {
        return Err("Client and freelancer names are required for the invoice.".to_string());
    }
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let bytes = state
        .api
        .invoice_pdf(&token, &id, &client_name, &freelancer_name)
        .await
        .map_err(|e| e.to_string())?;
    write_and_open_pdf("gigdesk-invoice", &bytes).map_err(|e| e.to_string())
}
