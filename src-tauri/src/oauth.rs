//! Google OAuth Loopback Callback
//!
//! The backend runs the actual OAuth dance (`GET /auth/google`); the
//! desktop client's part is to open that URL in the system browser with a
//! loopback redirect, then wait for the backend to bounce `token` and
//! `userId` back as query parameters.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::error::{AppError, Result};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(300);

const CALLBACK_PAGE: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n\
<html><body><p>Signed in. You can close this tab and return to GigDesk.</p></body></html>";
const NOT_FOUND: &str = "HTTP/1.1 404 Not Found\r\n\r\n";

#[derive(Debug, Clone, PartialEq)]
pub struct OauthCallback {
    pub token: String,
    pub user_id: String,
}

/// Bind a loopback port, open the sign-in URL, and wait for the callback.
pub async fn run_google_flow(auth_url: &str) -> Result<OauthCallback> {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
    let port = listener.local_addr()?.port();

    let url = format!("{}?redirect_uri=http://127.0.0.1:{}/callback", auth_url, port);
    tracing::info!(%url, "opening browser for Google sign-in");
    open::that(url).map_err(|e| AppError::Io(e.to_string()))?;

    tokio::time::timeout(CALLBACK_TIMEOUT, wait_for_callback(listener))
        .await
        .map_err(|_| AppError::Validation("Google sign-in timed out. Please try again.".to_string()))?
}

async fn wait_for_callback(listener: TcpListener) -> Result<OauthCallback> {
    loop {
        let (mut stream, _) = listener.accept().await?;
        let mut buf = vec![0u8; 4096];
        let n = stream.read(&mut buf).await?;
        let request = String::from_utf8_lossy(&buf[..n]).into_owned();

        // Request line: "GET /callback?token=...&userId=... HTTP/1.1"
        let Some(target) = request.split_whitespace().nth(1) else {
            let _ = stream.write_all(NOT_FOUND.as_bytes()).await;
            continue;
        };

        // Browsers also probe /favicon.ico; only the callback path counts
        match parse_callback(target) {
            Some(callback) => {
                let _ = stream.write_all(CALLBACK_PAGE.as_bytes()).await;
                return Ok(callback);
            }
            None => {
                let _ = stream.write_all(NOT_FOUND.as_bytes()).await;
            }
        }
    }
}

/// Extract `token` and `userId` from a callback request target.
fn parse_callback(target: &str) -> Option<OauthCallback> {
    let parsed = url::Url::parse(&format!("http://127.0.0.1{}", target)).ok()?;
    if parsed.path() != "/callback" {
        return None;
    }

    let mut token = None;
    let mut user_id = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "token" => token = Some(value.into_owned()),
            "userId" => user_id = Some(value.into_owned()),
            _ => {}
        }
    }
    Some(OauthCallback {
        token: token?,
        user_id: user_id?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_callback_extracts_identity() {
        let callback = parse_callback("/callback?token=tok-9&userId=u-4").unwrap();
        assert_eq!(callback.token, "tok-9");
        assert_eq!(callback.user_id, "u-4");
    }

    #[test]
    fn test_parse_callback_decodes_query_values() {
        let callback = parse_callback("/callback?token=a%2Bb&userId=u-4").unwrap();
        assert_eq!(callback.token, "a+b");
    }

    #[test]
    fn test_other_paths_and_partial_params_are_ignored() {
        assert_eq!(parse_callback("/favicon.ico"), None);
        assert_eq!(parse_callback("/callback?token=only"), None);
        assert_eq!(parse_callback("/callback"), None);
    }
}
