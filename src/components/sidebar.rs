//! Sidebar Component
//!
//! Left navigation: user identity, view switcher, logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, View};

const NAV_ITEMS: &[(View, &str, &str)] = &[
    (View::Overview, "Overview", "📊"),
    (View::Ledger, "Transactions", "💳"),
    (View::Spending, "Spending", "🥧"),
    (View::Board, "Gig Board", "🗂"),
    (View::Calendar, "Calendar", "📅"),
    (View::Profile, "Profile", "👤"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let username = move || {
        ctx.session
            .get()
            .map(|s| s.username)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Freelancer".to_string())
    };

    let logout = move |_| {
        spawn_local(async move {
            // Local session is cleared either way; the backend holds nothing
            let _ = commands::logout().await;
            ctx.set_session(None);
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-user">
                <h3>{username}</h3>
                <p class="sidebar-sub">"Dashboard"</p>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|(view, label, icon)| {
                    let view = *view;
                    let is_active = move || ctx.view.get() == view;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(view)
                        >
                            <span class="nav-icon">{*icon}</span>
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <button class="logout-btn" on:click=logout>
                "🚪 Logout"
            </button>
        </aside>
    }
}
