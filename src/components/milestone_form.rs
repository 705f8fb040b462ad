//! Milestone Form Component
//!
//! Shared add/edit form for the board and calendar views. The date inputs
//! constrain each other (start <= due); the backend command re-checks the
//! same rule.

use leptos::prelude::*;

use crate::commands::MilestoneDraftArgs;
use crate::models::{Milestone, MILESTONE_STATUSES};

#[component]
pub fn MilestoneForm(
    /// Milestone being edited; None = add mode
    initial: Option<Milestone>,
    #[prop(into)] on_save: Callback<MilestoneDraftArgs>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(initial.as_ref().map(|m| m.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        initial.as_ref().and_then(|m| m.description.clone()).unwrap_or_default(),
    );
    let (payment, set_payment) = signal(
        initial.as_ref().map(|m| m.payment_amount.to_string()).unwrap_or_default(),
    );
    let (status, set_status) = signal(
        initial.as_ref().map(|m| m.status.clone()).unwrap_or_else(|| "To Do".to_string()),
    );
    let (start_date, set_start_date) = signal(
        initial.as_ref().and_then(|m| m.start_date.clone()).unwrap_or_default(),
    );
    let (due_date, set_due_date) = signal(
        initial.as_ref().and_then(|m| m.due_date.clone()).unwrap_or_default(),
    );
    let (error, set_error) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title = title.get();
        if title.trim().is_empty() {
            set_error.set("Milestone title is required.".to_string());
            return;
        }
        let payment = payment.get().trim().parse::<f64>().unwrap_or(0.0);
        let description = description.get();
        let start = start_date.get();
        let due = due_date.get();

        on_save.run(MilestoneDraftArgs {
            title: title.trim().to_string(),
            description: (!description.trim().is_empty()).then(|| description.trim().to_string()),
            payment_amount: payment,
            status: status.get(),
            start_date: (!start.is_empty()).then_some(start),
            due_date: (!due.is_empty()).then_some(due),
        });
    };

    view! {
        <form class="txn-form" on:submit=submit>
            {move || (!error.get().is_empty()).then(|| view! {
                <div class="txn-form-error">{error.get()}</div>
            })}

            <div class="txn-form-group">
                <label>"Title"</label>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="txn-form-group">
                <label>"Description"</label>
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="modal-grid">
                <div class="txn-form-group">
                    <label>"Payment Amount"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || payment.get()
                        on:input=move |ev| set_payment.set(event_target_value(&ev))
                    />
                </div>

                <div class="txn-form-group">
                    <label>"Status"</label>
                    <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                        {MILESTONE_STATUSES.iter().map(|option| {
                            let value = *option;
                            view! {
                                <option value=value selected=move || status.get() == value>
                                    {value}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="modal-grid">
                <div class="txn-form-group">
                    <label>"Start Date"</label>
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        // Start date cannot be after due date
                        max=move || due_date.get()
                        on:change=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="txn-form-group">
                    <label>"Due Date"</label>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        // Due date cannot be before start date
                        min=move || start_date.get()
                        on:change=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="modal-actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                <button type="submit" class="btn">"Save"</button>
            </div>
        </form>
    }
}
