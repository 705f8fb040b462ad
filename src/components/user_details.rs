//! User Details / Profile Page
//!
//! Fetches the logged-in user's profile, lets them update username/email
//! or delete the account entirely.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ConfirmDeleteModal, Modal};
use crate::context::use_app_context;

#[component]
pub fn UserDetails() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (notice, set_notice) = signal(String::new());
    let (confirming, set_confirming) = signal(false);
    let (busy, set_busy) = signal(false);

    let user_id = move || ctx.session.get().map(|s| s.user_id).unwrap_or_default();

    Effect::new(move |_| {
        let id = user_id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::get_user(&id).await {
                Ok(user) => {
                    set_username.set(user.username);
                    set_email.set(user.email);
                }
                Err(err) => set_error.set(err),
            }
        });
    });

    let update = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = user_id();
        let username = username.get();
        let email = email.get();

        set_error.set(String::new());
        set_notice.set(String::new());
        spawn_local(async move {
            match commands::update_user(&id, &username, &email).await {
                Ok(updated) => {
                    // Refresh the sidebar name from the persisted session
                    if let Ok(session) = commands::current_session().await {
                        ctx.set_session(session);
                    }
                    set_username.set(updated.username);
                    set_email.set(updated.email);
                    set_notice.set("Profile updated.".to_string());
                }
                Err(err) => set_error.set(err),
            }
        });
    };

    let delete_account = move |_: ()| {
        let id = user_id();
        set_busy.set(true);
        spawn_local(async move {
            match commands::delete_user(&id).await {
                Ok(()) => ctx.set_session(None),
                Err(err) => {
                    set_error.set(err);
                    set_busy.set(false);
                    set_confirming.set(false);
                }
            }
        });
    };

    view! {
        <div class="user-details">
            <div class="dashboard-hero">
                <div>
                    <p class="eyebrow">"Account"</p>
                    <h1>"User Details"</h1>
                </div>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}
            {move || (!notice.get().is_empty()).then(|| view! {
                <div class="summary-notice">{notice.get()}</div>
            })}

            <form class="txn-form profile-form" on:submit=update>
                <div class="txn-form-group">
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="txn-form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required
                    />
                </div>
                <div class="modal-actions">
                    <button type="submit" class="btn">"Update"</button>
                    <button
                        type="button"
                        class="btn-danger"
                        on:click=move |_| set_confirming.set(true)
                    >
                        "Delete Account"
                    </button>
                </div>
            </form>

            {move || confirming.get().then(|| view! {
                <Modal title="Confirm Deletion" on_close=move |_: ()| set_confirming.set(false)>
                    <ConfirmDeleteModal
                        message="Delete this account? All of your data stays on the backend until it confirms the removal."
                        on_confirm=delete_account
                        on_cancel=move |_: ()| set_confirming.set(false)
                        busy=busy
                    />
                </Modal>
            })}
        </div>
    }
}
