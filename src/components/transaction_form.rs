//! Transaction Form Component
//!
//! Add/edit form shown in a modal. Tax is applied backend-side from the
//! entry policy; the form only collects type, amount, description, category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, TransactionArgs};
use crate::models::Transaction;

#[component]
pub fn TransactionForm(
    /// Transaction being edited; None = add mode
    initial: Option<Transaction>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = initial.as_ref().map(|t| t.id.clone());
    let is_edit = editing_id.is_some();

    let (kind, set_kind) = signal(
        initial.as_ref().map(|t| t.kind.clone()).unwrap_or_else(|| "debit".to_string()),
    );
    let (amount, set_amount) = signal(
        initial.as_ref().map(|t| t.amount.to_string()).unwrap_or_default(),
    );
    let (description, set_description) = signal(
        initial.as_ref().and_then(|t| t.description.clone()).unwrap_or_default(),
    );
    let (category, set_category) = signal(
        initial.as_ref().and_then(|t| t.category.clone()).unwrap_or_default(),
    );
    let (error, set_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_amount) = amount.get().trim().parse::<f64>() else {
            set_error.set("Please enter a valid amount.".to_string());
            return;
        };
        if parsed_amount <= 0.0 {
            set_error.set("Please enter a valid amount.".to_string());
            return;
        }

        let kind = kind.get();
        let description = description.get();
        let category = category.get();
        let editing_id = editing_id.clone();

        set_saving.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            let args = TransactionArgs {
                kind: &kind,
                amount: parsed_amount,
                description: (!description.trim().is_empty()).then_some(description.trim()),
                category: (!category.trim().is_empty()).then_some(category.trim()),
            };
            let result = match editing_id.as_deref() {
                Some(id) => commands::update_transaction(id, &args).await.map(|_| ()),
                None => commands::create_transaction(&args).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(err) => set_error.set(err),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="txn-form" on:submit=submit>
            {move || (!error.get().is_empty()).then(|| view! {
                <div class="txn-form-error">{error.get()}</div>
            })}

            <div class="txn-form-group">
                <label>"Type"</label>
                <div class="txn-type-toggle">
                    <button
                        type="button"
                        class=move || if kind.get() == "debit" { "active" } else { "" }
                        on:click=move |_| set_kind.set("debit".to_string())
                    >
                        "Debit (Expense)"
                    </button>
                    <button
                        type="button"
                        class=move || if kind.get() == "credit" { "active" } else { "" }
                        on:click=move |_| set_kind.set("credit".to_string())
                    >
                        "Credit (Income)"
                    </button>
                </div>
            </div>

            <div class="txn-form-group">
                <label>"Amount ($)"</label>
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="txn-form-group">
                <label>"Description (Optional)"</label>
                <input
                    type="text"
                    placeholder="e.g., Groceries, Paycheck"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
            </div>

            <div class="txn-form-group">
                <label>"Category (Optional)"</label>
                <input
                    type="text"
                    placeholder="e.g., Design, Rent"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
            </div>

            <div class="txn-form-actions">
                <button type="submit" class="txn-submit-btn" disabled=move || saving.get()>
                    {move || if saving.get() {
                        "Saving…"
                    } else if is_edit {
                        "Save Changes"
                    } else {
                        "Log Transaction"
                    }}
                </button>
            </div>
        </form>
    }
}
