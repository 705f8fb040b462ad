use serde::{Deserialize, Serialize};
use std::fmt;

/// Failure taxonomy shared by every command and API call.
///
/// `Validation` is raised before any request leaves the machine; the rest
/// classify what came back (or didn't).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppError {
    Validation(String),
    Api { status: u16, message: String },
    Unauthorized,
    NotLoggedIn,
    Network(String),
    Decode(String),
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Api { status, message } => write!(f, "Backend error ({}): {}", status, message),
            AppError::Unauthorized => write!(f, "Your session has expired. Please log in again."),
            AppError::NotLoggedIn => write!(f, "Not logged in."),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Unexpected response from backend: {}", msg),
            AppError::Io(msg) => write!(f, "File error: {}", msg),
        }
    }
}

// Implement std::error::Error so Tauri can properly serialize the error
impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
