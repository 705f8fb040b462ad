//! Milestone endpoints

use reqwest::Method;

use super::ApiClient;
use crate::domain::{Milestone, MilestoneDraft};
use crate::error::Result;

impl ApiClient {
    pub async fn milestones_for_gig(&self, token: &str, gig_id: &str) -> Result<Vec<Milestone>> {
        self.send_json(self.request(Method::GET, &format!("/milestones/gig/{}", gig_id), Some(token)))
            .await
    }

    pub async fn create_milestone(
        &self,
        token: &str,
        gig_id: &str,
        draft: &MilestoneDraft,
    ) -> Result<Milestone> {
        self.send_json(
            self.request(Method::POST, &format!("/milestones/gig/{}", gig_id), Some(token))
                .json(draft),
        )
        .await
    }

    pub async fn update_milestone(&self, token: &str, id: &str, draft: &MilestoneDraft) -> Result<Milestone> {
        self.send_json(
            self.request(Method::PUT, &format!("/milestones/{}", id), Some(token))
                .json(draft),
        )
        .await
    }

    pub async fn delete_milestone(&self, token: &str, id: &str) -> Result<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/milestones/{}", id), Some(token)))
            .await
    }

    /// Fetch the invoice PDF for a milestone.
    pub async fn invoice_pdf(
        &self,
        token: &str,
        id: &str,
        client_name: &str,
        freelancer_name: &str,
    ) -> Result<Vec<u8>> {
        self.send_bytes(
            self.request(Method::GET, &format!("/milestones/{}/invoice", id), Some(token))
                .query(&[("clientName", client_name), ("freelancerName", freelancer_name)]),
        )
        .await
    }
}
