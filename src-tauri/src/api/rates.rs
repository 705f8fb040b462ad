//! Currency rate endpoint

use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::ApiClient;
use crate::error::Result;

/// Conversion factors relative to USD, e.g. `{"EUR": 0.92}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rates {
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl ApiClient {
    pub async fn rates(&self, token: &str) -> Result<Rates> {
        self.send_json(self.request(Method::GET, "/rates", Some(token)))
            .await
    }
}
