//! GigDesk Frontend App
//!
//! Session gate plus the sidebar/view switch. While logged out only the
//! auth pages render; once a session exists the sidebar views take over.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{
    CalendarPage, ExpenseSummary, GigBoard, LoginPage, RegisterPage, Sidebar, SummaryDashboard,
    TransactionDashboard, UserDetails,
};
use crate::context::{AppContext, View};
use crate::models::Session;
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (session, set_session) = signal(None::<Session>);
    let (view, set_view) = signal(View::Overview);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (session_checked, set_session_checked) = signal(false);
    let (show_register, set_show_register) = signal(false);

    // Provide context to all children
    provide_context(AppContext::new(
        (session, set_session),
        (view, set_view),
        (reload_trigger, set_reload_trigger),
    ));
    let store = AppStore::new(AppState::new());
    provide_context(store);

    // Resume a persisted session on startup
    Effect::new(move |_| {
        if session_checked.get_untracked() {
            return;
        }
        spawn_local(async move {
            if let Ok(existing) = commands::current_session().await {
                set_session.set(existing);
            }
            set_session_checked.set(true);
        });
    });

    // Rates load once per login; the selector converts locally from there
    Effect::new(move |_| {
        if session.get().is_none() {
            return;
        }
        spawn_local(async move {
            match commands::fetch_rates().await {
                Ok(rates) => store.rates().set(rates.rates),
                Err(err) => {
                    web_sys::console::warn_1(&format!("[APP] rates unavailable: {}", err).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            {move || if !session_checked.get() {
                view! { <div class="dashboard-loading">"Loading…"</div> }.into_any()
            } else if session.get().is_none() {
                if show_register.get() {
                    view! {
                        <RegisterPage on_switch_to_login=move |_: ()| set_show_register.set(false) />
                    }.into_any()
                } else {
                    view! {
                        <LoginPage on_switch_to_register=move |_: ()| set_show_register.set(true) />
                    }.into_any()
                }
            } else {
                view! {
                    <div class="app-shell">
                        <Sidebar />
                        <main class="main-content">
                            {move || match view.get() {
                                View::Overview => view! { <SummaryDashboard /> }.into_any(),
                                View::Ledger => view! { <TransactionDashboard /> }.into_any(),
                                View::Spending => view! { <ExpenseSummary /> }.into_any(),
                                View::Board => view! { <GigBoard /> }.into_any(),
                                View::Calendar => view! { <CalendarPage /> }.into_any(),
                                View::Profile => view! { <UserDetails /> }.into_any(),
                            }}
                        </main>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
