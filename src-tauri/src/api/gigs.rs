//! Gig endpoints

use reqwest::Method;

use super::ApiClient;
use crate::domain::{Gig, GigDraft};
use crate::error::Result;

impl ApiClient {
    pub async fn gigs(&self, token: &str) -> Result<Vec<Gig>> {
        self.send_json(self.request(Method::GET, "/gigs/user", Some(token)))
            .await
    }

    pub async fn create_gig(&self, token: &str, draft: &GigDraft) -> Result<Gig> {
        self.send_json(self.request(Method::POST, "/gigs", Some(token)).json(draft))
            .await
    }

    pub async fn update_gig(&self, token: &str, id: &str, draft: &GigDraft) -> Result<Gig> {
        self.send_json(
            self.request(Method::PUT, &format!("/gigs/{}", id), Some(token))
                .json(draft),
        )
        .await
    }

    pub async fn delete_gig(&self, token: &str, id: &str) -> Result<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/gigs/{}", id), Some(token)))
            .await
    }
}
