//! Transaction Dashboard
//!
//! Balance box, history chart, ledger table, and the import/export/report
//! toolbar. Balance and transactions come back together from `load_ledger`;
//! any mutation ends in a full reload so the view never drifts from the
//! backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ConfirmDeleteModal, Modal, TransactionChart, TransactionForm, TransactionTable};
use crate::context::use_app_context;
use crate::models::{DailyFlow, Transaction};
use crate::money;
use crate::store::{selected_rate, use_app_store, AppStateStoreFields};

#[component]
pub fn TransactionDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (balance, set_balance) = signal(0.0_f64);
    let (transactions, set_transactions) = signal(Vec::<Transaction>::new());
    let (daily, set_daily) = signal(Vec::<DailyFlow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (notice, set_notice) = signal(String::new());

    // Ledger date-range filter (yyyy-mm-dd, empty = no bound)
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());

    // Modal state
    let (form_open, set_form_open) = signal(false);
    let (editing, set_editing) = signal(None::<Transaction>);
    let (deleting, set_deleting) = signal(None::<Transaction>);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let start = start_date.get();
        let end = end_date.get();
        set_loading.set(true);
        spawn_local(async move {
            let start = (!start.is_empty()).then_some(start);
            let end = (!end.is_empty()).then_some(end);
            match commands::load_ledger(start.as_deref(), end.as_deref()).await {
                Ok(view) => {
                    set_balance.set(view.balance);
                    set_transactions.set(view.transactions);
                    set_daily.set(view.daily);
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    });

    let currency = Signal::derive(move || store.currency().get());
    let rate = Signal::derive(move || selected_rate(&store));
    let currency_options = Signal::derive(move || {
        let mut codes: Vec<String> = store.rates().get().keys().cloned().collect();
        codes.sort();
        if !codes.iter().any(|c| c == "USD") {
            codes.insert(0, "USD".to_string());
        }
        codes
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_form_open.set(true);
    };

    let on_saved = move |_: ()| {
        set_form_open.set(false);
        set_editing.set(None);
        ctx.reload();
    };

    let confirm_delete = move |_: ()| {
        let Some(txn) = deleting.get_untracked() else { return };
        set_busy.set(true);
        spawn_local(async move {
            match commands::delete_transaction(&txn.id).await {
                Ok(()) => {
                    set_deleting.set(None);
                    ctx.reload();
                }
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    let import_csv = move |_| {
        set_error.set(String::new());
        set_notice.set(String::new());
        spawn_local(async move {
            match commands::pick_csv_file().await {
                Ok(Some(path)) => match commands::import_transactions_csv(&path).await {
                    Ok(rows) => {
                        set_notice.set(format!("Imported {} transactions.", rows));
                        ctx.reload();
                    }
                    Err(err) => set_error.set(err),
                },
                Ok(None) => {}
                Err(err) => set_error.set(err),
            }
        });
    };

    let export_csv = move |_| {
        set_error.set(String::new());
        set_notice.set(String::new());
        spawn_local(async move {
            match commands::export_transactions_csv().await {
                Ok(Some(path)) => set_notice.set(format!("Ledger exported to {}.", path)),
                Ok(None) => {}
                Err(err) => set_error.set(err),
            }
        });
    };

    let open_report = move |_| {
        let start = start_date.get();
        let end = end_date.get();
        set_error.set(String::new());
        spawn_local(async move {
            if let Err(err) = commands::open_report(&start, &end).await {
                set_error.set(err);
            }
        });
    };

    view! {
        <div class="bento-grid-container">
            <div class="dashboard-hero">
                <div>
                    <p class="eyebrow">"Ledger"</p>
                    <h1>"Transactions"</h1>
                </div>
                <div class="header-actions">
                    <input
                        type="date"
                        prop:value=move || start_date.get()
                        on:change=move |ev| set_start_date.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || end_date.get()
                        on:change=move |ev| set_end_date.set(event_target_value(&ev))
                    />
                    <select
                        class="currency-select"
                        on:change=move |ev| store.currency().set(event_target_value(&ev))
                    >
                        <For
                            each=move || currency_options.get()
                            key=|code| code.clone()
                            children=move |code| {
                                let value = code.clone();
                                view! {
                                    <option value=value.clone() selected=move || currency.get() == value>
                                        {code.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <button class="btn-secondary" on:click=import_csv>"Import CSV"</button>
                    <button class="btn-secondary" on:click=export_csv>"Export CSV"</button>
                    <button class="btn-secondary" on:click=open_report>"PDF Report"</button>
                    <button class="btn-secondary" on:click=move |_| ctx.reload()>"↻"</button>
                </div>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}
            {move || (!notice.get().is_empty()).then(|| view! {
                <div class="summary-notice">{notice.get()}</div>
            })}

            {move || if loading.get() {
                view! { <div class="dashboard-loading">"Loading…"</div> }.into_any()
            } else {
                view! {
                    <div class="bento-grid">
                        <div class="bento-box balance-box">
                            <h3 class="bento-title">"Current Balance"</h3>
                            <p class="balance-amount">
                                {move || money::format_amount(
                                    money::convert(balance.get(), rate.get()),
                                    &currency.get(),
                                )}
                            </p>
                            <button class="log-txn-btn" on:click=open_add>
                                "+ Log Transaction"
                            </button>
                        </div>

                        <div class="bento-box graph-box">
                            <h3 class="bento-title">"Transaction History"</h3>
                            <TransactionChart daily=daily.into() currency=currency rate=rate />
                        </div>

                        <div class="bento-box table-box">
                            <h3 class="bento-title">"All Transactions"</h3>
                            <TransactionTable
                                transactions=transactions.into()
                                currency=currency
                                rate=rate
                                on_edit=move |txn: Transaction| {
                                    set_editing.set(Some(txn));
                                    set_form_open.set(true);
                                }
                                on_delete=move |txn: Transaction| set_deleting.set(Some(txn))
                            />
                        </div>
                    </div>
                }.into_any()
            }}

            {move || form_open.get().then(|| {
                let initial = editing.get();
                let title = if initial.is_some() { "Edit Transaction" } else { "Log New Transaction" };
                view! {
                    <Modal title=title on_close=move |_: ()| {
                        set_form_open.set(false);
                        set_editing.set(None);
                    }>
                        <TransactionForm initial=initial on_saved=on_saved />
                    </Modal>
                }
            })}

            {move || deleting.get().map(|txn| {
                let label = txn.description.clone().unwrap_or_else(|| txn.kind.clone());
                view! {
                    <Modal title="Confirm Deletion" on_close=move |_: ()| set_deleting.set(None)>
                        <ConfirmDeleteModal
                            message=format!("Are you sure you want to delete this transaction? ({})", label)
                            on_confirm=confirm_delete
                            on_cancel=move |_: ()| set_deleting.set(None)
                            busy=busy
                        />
                    </Modal>
                }
            })}
        </div>
    }
}
