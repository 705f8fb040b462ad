//! User & auth endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::domain::User;
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
}

impl ApiClient {
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User> {
        self.send_json(self.request(Method::POST, "/users/register", None).json(payload))
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.send_json(self.request(Method::POST, "/users/login", None).json(credentials))
            .await
    }

    pub async fn me(&self, token: &str) -> Result<User> {
        self.send_json(self.request(Method::GET, "/users/me", Some(token)))
            .await
    }

    pub async fn user(&self, token: &str, id: &str) -> Result<User> {
        self.send_json(self.request(Method::GET, &format!("/users/{}", id), Some(token)))
            .await
    }

    pub async fn update_user(&self, token: &str, id: &str, update: &UserUpdate) -> Result<User> {
        self.send_json(
            self.request(Method::PUT, &format!("/users/{}", id), Some(token))
                .json(update),
        )
        .await
    }

    pub async fn delete_user(&self, token: &str, id: &str) -> Result<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/users/{}", id), Some(token)))
            .await
    }

    /// URL the system browser is sent to for Google sign-in.
    pub fn google_auth_url(&self) -> String {
        self.url("/auth/google")
    }
}
