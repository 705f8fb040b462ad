//! Expense Summary View
//!
//! Category breakdowns per polarity: proportional bars for the totals and
//! the grouped, filterable transaction lists underneath.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{CategoryGroup, CategorySlice, ExpenseSummaryView};
use crate::money;

#[component]
fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    slices: Signal<Vec<CategorySlice>>,
    positive: bool,
) -> impl IntoView {
    let pill_class = if positive { "pill total-pill-credit" } else { "pill total-pill-debit" };
    let bar_class = if positive { "slice-bar credit" } else { "slice-bar debit" };

    view! {
        <div class="bento-card chart-card">
            <div class="card-head">
                <div>
                    <p class="label">{label}</p>
                    <h3>{title}</h3>
                </div>
                <span class=pill_class>
                    {move || {
                        let total: f64 = slices.get().iter().map(|s| s.value).sum();
                        money::format_amount(total, "USD")
                    }}
                </span>
            </div>
            <div class="chart-shell">
                {move || {
                    let slices = slices.get();
                    if slices.is_empty() {
                        return view! { <div class="empty-chart">"No data yet for this type."</div> }.into_any();
                    }
                    let max = slices.iter().map(|s| s.value).fold(0.0_f64, f64::max).max(1.0);
                    view! {
                        <div class="slice-list">
                            {slices.into_iter().map(|slice| {
                                let width = (slice.value / max * 100.0).max(2.0);
                                view! {
                                    <div class="slice-row">
                                        <span class="slice-name">{slice.name.clone()}</span>
                                        <div class="slice-track">
                                            <div class=bar_class style=format!("width: {:.1}%;", width)></div>
                                        </div>
                                        <span class="slice-value">{money::format_amount(slice.value, "USD")}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn CategoryColumn(
    #[prop(into)] heading: String,
    positive: bool,
    filters: Signal<Vec<String>>,
    filter: ReadSignal<String>,
    set_filter: WriteSignal<String>,
    groups: Signal<Vec<CategoryGroup>>,
) -> impl IntoView {
    let amount_class = if positive { "txn-amount positive" } else { "txn-amount negative" };
    let sign = if positive { "+" } else { "-" };
    let empty_message = if positive {
        "No credits match this category."
    } else {
        "No debits match this category."
    };

    view! {
        <div class="transaction-column">
            <div class="column-head">
                <div>
                    <p class="label">{heading}</p>
                    <h4>"By category"</h4>
                </div>
                <select
                    class="category-select"
                    on:change=move |ev| set_filter.set(event_target_value(&ev))
                >
                    <For
                        each=move || filters.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value = name.clone();
                            view! {
                                <option value=value.clone() selected=move || filter.get() == value>
                                    {name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            {move || if groups.get().is_empty() {
                view! { <div class="empty-chart">{empty_message}</div> }.into_any()
            } else {
                view! {
                    <div class="category-list">
                        {groups.get().into_iter().map(|group| {
                            view! {
                                <div class="category-group">
                                    <div class="category-header">
                                        <div>
                                            <p class="label">"Category"</p>
                                            <h4>{group.category.clone()}</h4>
                                        </div>
                                        <span class="pill">{money::format_amount(group.total, "USD")}</span>
                                    </div>
                                    <div class="transaction-list">
                                        {group.transactions.into_iter().map(|txn| {
                                            let date = txn.created_at.clone()
                                                .map(|raw| money::format_date(&raw))
                                                .unwrap_or_else(|| "—".to_string());
                                            view! {
                                                <div class="transaction-row">
                                                    <div>
                                                        <p class="txn-title">
                                                            {txn.description.clone().unwrap_or_else(|| "No description".to_string())}
                                                        </p>
                                                        <p class="txn-sub">{date}</p>
                                                    </div>
                                                    <div class=amount_class>
                                                        {sign}{money::format_amount(txn.amount, "USD")}
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
pub fn ExpenseSummary() -> impl IntoView {
    let ctx = use_app_context();

    let (summary, set_summary) = signal(None::<ExpenseSummaryView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    let (credit_filter, set_credit_filter) = signal("All".to_string());
    let (debit_filter, set_debit_filter) = signal("All".to_string());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let credit = credit_filter.get();
        let debit = debit_filter.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::expense_summary(Some(&credit), Some(&debit)).await {
                Ok(view) => {
                    set_summary.set(Some(view));
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    });

    let credit_slices = Signal::derive(move || summary.get().map(|s| s.credit_slices).unwrap_or_default());
    let debit_slices = Signal::derive(move || summary.get().map(|s| s.debit_slices).unwrap_or_default());
    let credit_filters = Signal::derive(move || summary.get().map(|s| s.credit_filters).unwrap_or_default());
    let debit_filters = Signal::derive(move || summary.get().map(|s| s.debit_filters).unwrap_or_default());
    let credit_groups = Signal::derive(move || summary.get().map(|s| s.credit_groups).unwrap_or_default());
    let debit_groups = Signal::derive(move || summary.get().map(|s| s.debit_groups).unwrap_or_default());
    let count = move || summary.get().map(|s| s.transaction_count).unwrap_or(0);

    view! {
        <div class="expense-summary">
            <div class="dashboard-hero">
                <div>
                    <p class="eyebrow">"Spending overview"</p>
                    <h1>"Expense Summary"</h1>
                    <p class="subtext">"See how your credits and debits break down across categories."</p>
                </div>
                <button class="ghost-button" on:click=move |_| ctx.reload() disabled=move || loading.get()>
                    {move || if loading.get() { "Refreshing…" } else { "↻" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}

            <div class="bento-grid chart-grid">
                <ChartCard title="Credit Distribution" label="Income mix" slices=credit_slices positive=true />
                <ChartCard title="Debit Distribution" label="Expense mix" slices=debit_slices positive=false />
            </div>

            <div class="bento-card category-card">
                <div class="card-head">
                    <div>
                        <p class="label">"Transactions"</p>
                        <h3>"Sorted by category"</h3>
                    </div>
                    <span class="pill muted-pill">{move || format!("{} total", count())}</span>
                </div>

                <div class="transaction-columns">
                    <CategoryColumn
                        heading="Credits"
                        positive=true
                        filters=credit_filters
                        filter=credit_filter
                        set_filter=set_credit_filter
                        groups=credit_groups
                    />
                    <CategoryColumn
                        heading="Debits"
                        positive=false
                        filters=debit_filters
                        filter=debit_filter
                        set_filter=set_debit_filter
                        groups=debit_groups
                    />
                </div>
            </div>
        </div>
    }
}
