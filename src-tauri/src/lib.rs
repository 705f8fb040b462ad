//! GigDesk Client Backend
//!
//! Layered architecture:
//! - domain: Entities and the pure client-side logic (CSV validation,
//!   aggregation, calendar indexing)
//! - api: REST bindings to the external backend
//! - commands: Tauri command handlers
//!
//! All durable business state lives in the backend; the only local state
//! is the session file.

use std::sync::Arc;
use tauri::Manager;

mod api;
mod commands;
mod config;
mod domain;
mod error;
mod oauth;
mod session;

use api::ApiClient;
use config::BackendConfig;
use session::SessionStore;

/// Application state shared across commands
pub struct AppState {
    pub api: ApiClient,
    pub session: Arc<SessionStore>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&app_dir)?;

            let config = BackendConfig::from_env();
            tracing::info!(base_url = %config.base_url, "backend configured");

            app.manage(AppState {
                api: ApiClient::new(&config),
                session: Arc::new(SessionStore::new(app_dir.join("session.json"))),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth & profile
            commands::register,
            commands::login,
            commands::google_login,
            commands::current_session,
            commands::logout,
            commands::get_user,
            commands::update_user,
            commands::delete_user,
            // Ledger
            commands::load_ledger,
            commands::create_transaction,
            commands::update_transaction,
            commands::delete_transaction,
            commands::pick_csv_file,
            commands::import_transactions_csv,
            commands::export_transactions_csv,
            commands::open_report,
            // Aggregate views
            commands::expense_summary,
            commands::load_overview,
            commands::calendar_index,
            commands::fetch_rates,
            // Gig board
            commands::load_board,
            commands::create_gig,
            commands::update_gig,
            commands::set_gig_status,
            commands::delete_gig,
            // Milestones
            commands::create_milestone,
            commands::update_milestone,
            commands::delete_milestone,
            commands::open_invoice,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
