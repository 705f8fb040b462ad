//! Milestone Commands
//!
//! Frontend bindings for milestone CRUD and invoice generation.

use serde::Serialize;

use super::{invoke_command, to_args};
use crate::models::Milestone;

/// Milestone form payload, serialized the way the backend draft expects it.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDraftArgs {
    pub title: String,
    pub description: Option<String>,
    pub payment_amount: f64,
    pub status: String,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
}

impl From<&Milestone> for MilestoneDraftArgs {
    fn from(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            description: milestone.description.clone(),
            payment_amount: milestone.payment_amount,
            status: milestone.status.clone(),
            start_date: milestone.start_date.clone(),
            due_date: milestone.due_date.clone(),
        }
    }
}

#[derive(Serialize)]
struct CreateMilestoneArgs<'a> {
    #[serde(rename = "gigId")]
    gig_id: &'a str,
    draft: &'a MilestoneDraftArgs,
}

#[derive(Serialize)]
struct UpdateMilestoneArgs<'a> {
    id: &'a str,
    draft: &'a MilestoneDraftArgs,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct InvoiceArgs<'a> {
    id: &'a str,
    #[serde(rename = "clientName")]
    client_name: &'a str,
    #[serde(rename = "freelancerName")]
    freelancer_name: &'a str,
}

pub async fn create_milestone(gig_id: &str, draft: &MilestoneDraftArgs) -> Result<Milestone, String> {
    let args = to_args(&CreateMilestoneArgs { gig_id, draft })?;
    invoke_command("create_milestone", args).await
}

pub async fn update_milestone(id: &str, draft: &MilestoneDraftArgs) -> Result<Milestone, String> {
    let args = to_args(&UpdateMilestoneArgs { id, draft })?;
    invoke_command("update_milestone", args).await
}

pub async fn delete_milestone(id: &str) -> Result<(), String> {
    let args = to_args(&IdArgs { id })?;
    invoke_command("delete_milestone", args).await
}

/// Fetch the invoice PDF and open it in the system viewer.
pub async fn open_invoice(id: &str, client_name: &str, freelancer_name: &str) -> Result<String, String> {
    let args = to_args(&InvoiceArgs { id, client_name, freelancer_name })?;
    invoke_command("open_invoice", args).await
}
