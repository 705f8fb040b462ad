//! Transaction Table Component
//!
//! Ledger listing with per-row edit/delete, rendered in the selected
//! display currency.

use leptos::prelude::*;

use crate::models::Transaction;
use crate::money;

#[component]
pub fn TransactionTable(
    transactions: Signal<Vec<Transaction>>,
    currency: Signal<String>,
    rate: Signal<f64>,
    #[prop(into)] on_edit: Callback<Transaction>,
    #[prop(into)] on_delete: Callback<Transaction>,
) -> impl IntoView {
    let cell = move |amount_usd: f64| {
        money::format_amount(money::convert(amount_usd, rate.get()), &currency.get())
    };

    view! {
        <div class="table-container">
            {move || if transactions.get().is_empty() {
                view! {
                    <div class="table-empty-state">
                        <p>"You have no transactions recorded."</p>
                        <p>"Click \"Log Transaction\" to get started."</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <table class="transaction-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Type"</th>
                                <th>"Category"</th>
                                <th>"Description"</th>
                                <th class="th-amount">"Amount"</th>
                                <th class="th-amount">"Tax"</th>
                                <th class="th-amount">"Total"</th>
                                <th class="th-actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || transactions.get()
                                key=|txn| txn.id.clone()
                                children=move |txn| {
                                    let edit_txn = txn.clone();
                                    let delete_txn = txn.clone();
                                    let date = txn.created_at.clone()
                                        .map(|raw| money::format_date(&raw))
                                        .unwrap_or_else(|| "—".to_string());
                                    let amount_class = if txn.is_credit() { "td-amount txn-credit" } else { "td-amount txn-debit" };
                                    let (amount, tax, total) = (txn.amount, txn.tax, txn.total());
                                    view! {
                                        <tr>
                                            <td>{date}</td>
                                            <td>
                                                <span class=format!("txn-type-badge {}", txn.kind)>{txn.kind.clone()}</span>
                                            </td>
                                            <td>{txn.category.clone().unwrap_or_else(|| "Uncategorized".to_string())}</td>
                                            <td class="td-description">{txn.description.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                            <td class=amount_class>{move || cell(amount)}</td>
                                            <td class="td-amount">"(" {move || cell(tax)} ")"</td>
                                            <td class="td-amount td-total">{move || cell(total)}</td>
                                            <td class="td-actions">
                                                <button
                                                    class="table-icon-button edit-btn"
                                                    aria-label="Edit"
                                                    on:click=move |_| on_edit.run(edit_txn.clone())
                                                >
                                                    "✎"
                                                </button>
                                                <button
                                                    class="table-icon-button delete-btn"
                                                    aria-label="Delete"
                                                    on:click=move |_| on_delete.run(delete_txn.clone())
                                                >
                                                    "🗑"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
