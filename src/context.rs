//! Application Context
//!
//! Session and navigation signals provided via the Leptos Context API.
//! The session signal mirrors the backend-side store: every view reads it
//! from here, and only the auth flows write it.

use leptos::prelude::*;

use crate::models::Session;

/// Top-level views reachable from the sidebar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Overview,
    Ledger,
    Spending,
    Board,
    Calendar,
    Profile,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active session, None while logged out - read
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
    /// Active sidebar view - read
    pub view: ReadSignal<View>,
    set_view: WriteSignal<View>,
    /// Trigger to reload the active view's data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        view: (ReadSignal<View>, WriteSignal<View>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            view: view.0,
            set_view: view.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refetch of the active view's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }

    /// Store a new session (or None after logout)
    pub fn set_session(&self, session: Option<Session>) {
        self.set_session.set(session);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
