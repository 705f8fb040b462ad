//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

#[component]
pub fn RegisterPage(#[prop(into)] on_switch_to_login: Callback<()>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (notice, set_notice) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let email = email.get();
        let password = password.get();

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match commands::register(&username, &email, &password).await {
                Ok(_) => {
                    set_notice.set("Registration successful! You can log in now.".to_string());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <h2>"Register"</h2>

            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    required
                />
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
                    minlength="6"
                    required
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Registering…" } else { "Register" }}
                </button>
            </form>

            {move || (!error.get().is_empty()).then(|| view! {
                <p class="auth-error">{error.get()}</p>
            })}
            {move || (!notice.get().is_empty()).then(|| view! {
                <p class="auth-notice">{notice.get()}</p>
            })}

            <p class="auth-switch">
                "Already have an account? "
                <button class="link-btn" on:click=move |_| on_switch_to_login.run(())>
                    "Login"
                </button>
            </p>
        </div>
    }
}
