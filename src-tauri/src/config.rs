//! Backend endpoint configuration.

/// Default backend base, matching the dev server the backend ships with.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Return the first non-empty value from the given environment variable keys.
fn env_var_first_nonempty(keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Ok(value) = std::env::var(key) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub base_url: String,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        let base_url = env_var_first_nonempty(&["GIGDESK_API_URL", "GIGDESK_BACKEND_URL"])
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_trailing_slash() {
        let config = BackendConfig {
            base_url: "http://localhost:3000/api/".trim_end_matches('/').to_string(),
        };
        assert_eq!(config.base_url, "http://localhost:3000/api");
    }
}
