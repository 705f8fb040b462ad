//! Summary Dashboard (Overview)
//!
//! Balance, gig pipeline, upcoming milestones, and latest activity in one
//! glance. All numbers come pre-aggregated from `load_overview`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::OverviewView;
use crate::money;

#[component]
fn StatPill(#[prop(into)] label: String, #[prop(into)] value: String, #[prop(into)] tone: String) -> impl IntoView {
    view! {
        <div class=format!("stat-pill stat-pill-{}", tone)>
            <p class="pill-label">{label}</p>
            <p class="pill-value">{value}</p>
        </div>
    }
}

#[component]
pub fn SummaryDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let (overview, set_overview) = signal(None::<OverviewView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::load_overview().await {
                Ok(view) => {
                    set_overview.set(Some(view));
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    });

    let username = move || {
        ctx.session
            .get()
            .map(|s| s.username)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    };

    let usd = |value: f64| money::format_amount(value, "USD");

    view! {
        <div class="summary-dashboard">
            <div class="dashboard-hero">
                <div>
                    <p class="eyebrow">"Unified overview"</p>
                    <h1>"Welcome, " {username}</h1>
                    <p class="subtext">"Balances, gig health, and transaction activity at a glance."</p>
                </div>
                <button class="ghost-button" on:click=move |_| ctx.reload() disabled=move || loading.get()>
                    {move || if loading.get() { "Refreshing…" } else { "↻" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}

            {move || overview.get().map(|view_data| {
                let net_positive = view_data.net_change >= 0.0;
                let badge_class = if net_positive { "badge badge-success" } else { "badge badge-danger" };
                let net_label = format!(
                    "{}{} this period",
                    if net_positive { "+" } else { "" },
                    usd(view_data.net_change),
                );
                view! {
                    <div class="bento-grid">
                        <div class="bento-card balance-card">
                            <div class="card-head">
                                <p class="label">"Current balance"</p>
                                <span class=badge_class>{net_label}</span>
                            </div>
                            <h2 class="balance-figure">{usd(view_data.balance)}</h2>
                            <div class="stat-row">
                                <StatPill label="Total Incoming" value=usd(view_data.total_credits) tone="positive" />
                                <StatPill label="Total Outgoing" value=usd(view_data.total_debits) tone="muted" />
                                <StatPill label="Pending payouts" value=usd(view_data.pending_payouts) tone="accent" />
                            </div>
                        </div>

                        <div class="bento-card gig-health">
                            <div class="card-head">
                                <p class="label">"Gig pipeline"</p>
                                <p class="muted">"Open → Completed"</p>
                            </div>
                            <div class="gig-stats">
                                {view_data.gig_status_counts.iter().map(|entry| {
                                    let plural = if entry.count == 1 { "gig" } else { "gigs" };
                                    view! {
                                        <div class="gig-pill">
                                            <div>
                                                <p class="pill-label">{entry.status.clone()}</p>
                                                <p class="pill-value">{format!("{} {}", entry.count, plural)}</p>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <div class="bento-card milestones-card">
                            <div class="card-head">
                                <p class="label">"Upcoming milestones"</p>
                                <p class="muted">"Next due items"</p>
                            </div>
                            <div class="milestone-list">
                                {if view_data.upcoming_milestones.is_empty() {
                                    view! { <p class="muted">"No milestones scheduled."</p> }.into_any()
                                } else {
                                    view_data.upcoming_milestones.iter().map(|m| {
                                        let chip = if m.status == "Done" { "chip chip-success" } else { "chip chip-warning" };
                                        let due = m.due_date.clone()
                                            .map(|raw| money::format_date(&raw))
                                            .unwrap_or_else(|| "No date".to_string());
                                        view! {
                                            <div class="milestone-row">
                                                <p class="milestone-title">{m.title.clone()}</p>
                                                <div class="milestone-meta">
                                                    <span class=chip>{m.status.clone()}</span>
                                                    <span class="muted">{due}</span>
                                                    <span class="pill-value">{usd(m.payment_amount)}</span>
                                                </div>
                                            </div>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </div>
                        </div>

                        <div class="bento-card transactions-card">
                            <div class="card-head">
                                <p class="label">"Latest transactions"</p>
                                <p class="muted">"Recent activity"</p>
                            </div>
                            <div class="txn-list">
                                {if view_data.latest_transactions.is_empty() {
                                    view! { <p class="muted">"No transactions recorded yet."</p> }.into_any()
                                } else {
                                    view_data.latest_transactions.iter().map(|txn| {
                                        let credit = txn.kind == "credit";
                                        let chip = if credit { "chip chip-success" } else { "chip chip-danger" };
                                        let amount_class = if credit { "txn-amount credit" } else { "txn-amount debit" };
                                        let date = txn.created_at.clone()
                                            .map(|raw| money::format_date(&raw))
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <div class="txn-row">
                                                <div class="txn-info">
                                                    <span class=chip>{txn.kind.clone()}</span>
                                                    <div>
                                                        <p class="txn-title">
                                                            {txn.description.clone().unwrap_or_else(|| "Transaction".to_string())}
                                                        </p>
                                                        <p class="muted">{date}</p>
                                                    </div>
                                                </div>
                                                <p class=amount_class>
                                                    {if credit { "+" } else { "-" }}{usd(txn.amount)}
                                                </p>
                                            </div>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </div>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
