//! Auth & Profile Commands
//!
//! Frontend bindings for session and user commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke_command, to_args};
use crate::models::{Session, User};

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct UpdateUserArgs<'a> {
    id: &'a str,
    username: &'a str,
    email: &'a str,
}

pub async fn register(username: &str, email: &str, password: &str) -> Result<User, String> {
    let args = to_args(&RegisterArgs { username, email, password })?;
    invoke_command("register", args).await
}

pub async fn login(email: &str, password: &str) -> Result<Session, String> {
    let args = to_args(&LoginArgs { email, password })?;
    invoke_command("login", args).await
}

/// Opens the system browser and resolves once the OAuth callback lands.
pub async fn google_login() -> Result<Session, String> {
    invoke_command("google_login", JsValue::NULL).await
}

pub async fn current_session() -> Result<Option<Session>, String> {
    invoke_command("current_session", JsValue::NULL).await
}

pub async fn logout() -> Result<(), String> {
    invoke_command("logout", JsValue::NULL).await
}

pub async fn get_user(id: &str) -> Result<User, String> {
    let args = to_args(&IdArgs { id })?;
    invoke_command("get_user", args).await
}

pub async fn update_user(id: &str, username: &str, email: &str) -> Result<User, String> {
    let args = to_args(&UpdateUserArgs { id, username, email })?;
    invoke_command("update_user", args).await
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    let args = to_args(&IdArgs { id })?;
    invoke_command("delete_user", args).await
}
