//! Gig Board Commands

use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tauri::State;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::api::ApiClient;
use crate::domain::{Gig, GigDraft, GigStatus, Milestone};
use crate::AppState;

/// Cap on concurrent per-gig milestone fetches.
const MILESTONE_FETCH_LIMIT: usize = 4;

/// Gigs plus their milestones, keyed by gig id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub gigs: Vec<Gig>,
    pub milestones: HashMap<String, Vec<Milestone>>,
}

/// Fetch every gig's milestones with bounded concurrency.
///
/// A failed fetch degrades that gig to an empty list instead of failing
/// the whole board.
pub(crate) async fn fetch_milestones_by_gig(
    api: &ApiClient,
    token: &str,
    gigs: &[Gig],
) -> HashMap<String, Vec<Milestone>> {
    let semaphore = Arc::new(Semaphore::new(MILESTONE_FETCH_LIMIT));
    let mut tasks = JoinSet::new();

    for gig in gigs {
        let api = api.clone();
        let token = token.to_string();
        let gig_id = gig.id.clone();
        let semaphore = semaphore.clone();
        tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (gig_id, Vec::new()),
            };
            match api.milestones_for_gig(&token, &gig_id).await {
                Ok(list) => (gig_id, list),
                Err(err) => {
                    tracing::warn!(gig = %gig_id, %err, "milestone fetch failed, showing gig without milestones");
                    (gig_id, Vec::new())
                }
            }
        });
    }

    let mut map = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        if let Ok((gig_id, list)) = joined {
            map.insert(gig_id, list);
        }
    }
    map
}

#[tauri::command]
pub async fn load_board(state: State<'_, AppState>) -> Result<BoardView, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let gigs = state.api.gigs(&token).await.map_err(|e| e.to_string())?;
    let milestones = fetch_milestones_by_gig(&state.api, &token, &gigs).await;
    Ok(BoardView { gigs, milestones })
}

#[tauri::command]
pub async fn create_gig(state: State<'_, AppState>, draft: GigDraft) -> Result<Gig, String> {
    if draft.title.trim().is_empty() {
        return Err("Gig title is required.".to_string());
    }
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.create_gig(&token, &draft).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_gig(state: State<'_, AppState>, id: String, draft: GigDraft) -> Result<Gig, String> {
    if draft.title.trim().is_empty() {
        return Err("Gig title is required.".to_string());
    }
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.update_gig(&token, &id, &draft).await.map_err(|e| e.to_string())
}

/// Apply a board-column move. Dropping a card on its own column comes back
/// unchanged without a request; unknown columns are rejected.
#[tauri::command]
pub async fn set_gig_status(state: State<'_, AppState>, gig: Gig, status: String) -> Result<Gig, String> {
    let Some(next) = GigStatus::parse(&status) else {
        return Err(format!("Unknown board column: {}", status));
    };
    if next == gig.status {
        return Ok(gig);
    }

    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let draft = GigDraft {
        status: next,
        ..GigDraft::from(&gig)
    };
    state.api.update_gig(&token, &gig.id, &draft).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn delete_gig(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.delete_gig(&token, &id).await.map_err(|e| e.to_string())
}
