//! HTTP plumbing shared by every endpoint binding.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::error::{AppError, Result};

/// Client for the backend REST API.
///
/// Callers never inspect raw responses: every call ends in one of the
/// `send_*` helpers, so failures come back uniformly tagged.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = check(req.send().await?).await?;
        resp.json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Send a request and return the raw body bytes (PDF downloads).
    pub(crate) async fn send_bytes(&self, req: RequestBuilder) -> Result<Vec<u8>> {
        let resp = check(req.send().await?).await?;
        Ok(resp
            .bytes()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?
            .to_vec())
    }

    /// Send a request, discarding any body.
    pub(crate) async fn send_unit(&self, req: RequestBuilder) -> Result<()> {
        check(req.send().await?).await?;
        Ok(())
    }
}

/// Map non-2xx statuses into tagged errors, pulling the backend's
/// `message` field when it sends one.
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }

    let message = match resp.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new(&BackendConfig {
            base_url: "http://localhost:3000/api".to_string(),
        });
        assert_eq!(client.url("/gigs/user"), "http://localhost:3000/api/gigs/user");
    }
}
