//! Modal Component
//!
//! Shared backdrop + dialog shell used by every form and confirmation.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="btn-close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
