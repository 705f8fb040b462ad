//! Auth & Profile Commands

use tauri::State;

use crate::api::{Credentials, RegisterPayload, UserUpdate};
use crate::domain::User;
use crate::session::Session;
use crate::AppState;

#[tauri::command]
pub async fn register(
    state: State<'_, AppState>,
    username: String,
    email: String,
    password: String,
) -> Result<User, String> {
    if username.trim().is_empty() || email.trim().is_empty() {
        return Err("Username and email are required.".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.".to_string());
    }
    state
        .api
        .register(&RegisterPayload { username, email, password })
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> Result<Session, String> {
    let response = state
        .api
        .login(&Credentials { email, password })
        .await
        .map_err(|e| e.to_string())?;

    let session = Session {
        token: response.token,
        user_id: response.user.id,
        username: response.user.username,
    };
    state.session.set(session.clone()).await.map_err(|e| e.to_string())?;
    tracing::info!(user = %session.username, "logged in");
    Ok(session)
}

/// Run the browser-based Google sign-in and wait for its callback.
#[tauri::command]
pub async fn google_login(state: State<'_, AppState>) -> Result<Session, String> {
    let callback = crate::oauth::run_google_flow(&state.api.google_auth_url())
        .await
        .map_err(|e| e.to_string())?;

    // The callback carries identity ids only; resolve the profile for display.
    let username = match state.api.me(&callback.token).await {
        Ok(user) => user.username,
        Err(err) => {
            tracing::warn!(%err, "could not load profile after Google sign-in");
            String::new()
        }
    };

    let session = Session {
        token: callback.token,
        user_id: callback.user_id,
        username,
    };
    state.session.set(session.clone()).await.map_err(|e| e.to_string())?;
    Ok(session)
}

#[tauri::command]
pub async fn current_session(state: State<'_, AppState>) -> Result<Option<Session>, String> {
    Ok(state.session.get().await)
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    state.session.clear().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_user(state: State<'_, AppState>, id: String) -> Result<User, String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.user(&token, &id).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_user(
    state: State<'_, AppState>,
    id: String,
    username: String,
    email: String,
) -> Result<User, String> {
    if username.trim().is_empty() || email.trim().is_empty() {
        return Err("Username and email are required.".to_string());
    }
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    let updated = state
        .api
        .update_user(&token, &id, &UserUpdate { username, email })
        .await
        .map_err(|e| e.to_string())?;

    // Keep the displayed name in sync; the store is the single writer
    if let Some(mut session) = state.session.get().await {
        if session.user_id == updated.id {
            session.username = updated.username.clone();
            state.session.set(session).await.map_err(|e| e.to_string())?;
        }
    }
    Ok(updated)
}

/// Delete the account, then drop the local session.
#[tauri::command]
pub async fn delete_user(state: State<'_, AppState>, id: String) -> Result<(), String> {
    let token = state.session.token().await.map_err(|e| e.to_string())?;
    state.api.delete_user(&token, &id).await.map_err(|e| e.to_string())?;
    state.session.clear().await.map_err(|e| e.to_string())
}
