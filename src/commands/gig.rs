//! Gig Board Commands
//!
//! Frontend bindings for board and gig commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke_command, to_args};
use crate::models::{BoardView, Gig};

/// Gig form payload, serialized the way the backend draft expects it.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GigDraftArgs {
    pub title: String,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub total_value: f64,
    pub status: String,
    pub due_date: Option<String>,
}

impl From<&Gig> for GigDraftArgs {
    fn from(gig: &Gig) -> Self {
        Self {
            title: gig.title.clone(),
            description: gig.description.clone(),
            client_name: gig.client_name.clone(),
            total_value: gig.total_value,
            status: gig.status.clone(),
            due_date: gig.due_date.clone(),
        }
    }
}

#[derive(Serialize)]
struct CreateGigArgs<'a> {
    draft: &'a GigDraftArgs,
}

#[derive(Serialize)]
struct UpdateGigArgs<'a> {
    id: &'a str,
    draft: &'a GigDraftArgs,
}

#[derive(Serialize)]
struct SetGigStatusArgs<'a> {
    gig: &'a Gig,
    status: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

pub async fn load_board() -> Result<BoardView, String> {
    invoke_command("load_board", JsValue::NULL).await
}

pub async fn create_gig(draft: &GigDraftArgs) -> Result<Gig, String> {
    let args = to_args(&CreateGigArgs { draft })?;
    invoke_command("create_gig", args).await
}

pub async fn update_gig(id: &str, draft: &GigDraftArgs) -> Result<Gig, String> {
    let args = to_args(&UpdateGigArgs { id, draft })?;
    invoke_command("update_gig", args).await
}

/// Persist a board-column move; the backend answers with the saved gig.
pub async fn set_gig_status(gig: &Gig, status: &str) -> Result<Gig, String> {
    let args = to_args(&SetGigStatusArgs { gig, status })?;
    invoke_command("set_gig_status", args).await
}

pub async fn delete_gig(id: &str) -> Result<(), String> {
    let args = to_args(&IdArgs { id })?;
    invoke_command("delete_gig", args).await
}
