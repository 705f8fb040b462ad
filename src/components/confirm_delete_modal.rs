//! Confirm Delete Modal
//!
//! Two-button confirmation body rendered inside a `Modal`.

use leptos::prelude::*;

#[component]
pub fn ConfirmDeleteModal(
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    busy: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="confirm-delete">
            <p>{message}</p>
            <div class="modal-actions">
                <button
                    type="button"
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn-danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if busy.get() { "Deleting…" } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}
