//! Login Page
//!
//! Email/password login plus the Google sign-in button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn LoginPage(#[prop(into)] on_switch_to_register: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match commands::login(&email, &password).await {
                Ok(session) => ctx.set_session(Some(session)),
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    };

    let google = move |_| {
        set_error.set(String::new());
        spawn_local(async move {
            match commands::google_login().await {
                Ok(session) => ctx.set_session(Some(session)),
                Err(err) => set_error.set(err),
            }
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Login"</h2>

            <div class="google-auth">
                <button class="google-btn" on:click=google>
                    "Continue with Google"
                </button>
            </div>

            <form class="auth-form" on:submit=submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in…" } else { "Login" }}
                </button>
            </form>

            {move || (!error.get().is_empty()).then(|| view! {
                <p class="auth-error">{error.get()}</p>
            })}

            <p class="auth-switch">
                "No account? "
                <button class="link-btn" on:click=move |_| on_switch_to_register.run(())>
                    "Register"
                </button>
            </p>
        </div>
    }
}
