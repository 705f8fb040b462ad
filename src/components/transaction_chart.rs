//! Transaction Chart Component
//!
//! Per-day credit/debit bars drawn as plain SVG from the backend's daily
//! series.

use leptos::prelude::*;

use crate::models::DailyFlow;
use crate::money;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const LABEL_BAND: f64 = 24.0;

#[component]
pub fn TransactionChart(
    daily: Signal<Vec<DailyFlow>>,
    currency: Signal<String>,
    rate: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="chart-container">
            {move || {
                let series = daily.get();
                if series.is_empty() {
                    return view! {
                        <div class="chart-empty-state">
                            <p>"Log some transactions to see your history chart."</p>
                        </div>
                    }.into_any();
                }

                let rate = rate.get();
                let currency = currency.get();
                let max = series
                    .iter()
                    .map(|d| d.credits.max(d.debits))
                    .fold(0.0_f64, f64::max)
                    .max(1.0);

                let slot = CHART_WIDTH / series.len() as f64;
                let bar = (slot * 0.35).min(28.0);
                let plot_height = CHART_HEIGHT - LABEL_BAND;
                let scale = move |value: f64| value / max * (plot_height - 8.0);

                let bars = series.iter().enumerate().map(|(i, day)| {
                    let x = i as f64 * slot + slot / 2.0;
                    let credit_h = scale(day.credits);
                    let debit_h = scale(day.debits);
                    let title = format!(
                        "{} — credits {} / debits {}",
                        day.date,
                        money::format_amount(money::convert(day.credits, rate), &currency),
                        money::format_amount(money::convert(day.debits, rate), &currency),
                    );
                    view! {
                        <g>
                            <title>{title}</title>
                            <rect
                                class="bar-credit"
                                x=x - bar
                                y=plot_height - credit_h
                                width=bar
                                height=credit_h
                                rx="2"
                            />
                            <rect
                                class="bar-debit"
                                x=x
                                y=plot_height - debit_h
                                width=bar
                                height=debit_h
                                rx="2"
                            />
                            <text class="bar-label" x=x - bar y=CHART_HEIGHT - 6.0>
                                {day.date.clone()}
                            </text>
                        </g>
                    }
                }).collect_view();

                view! {
                    <div class="chart-shell">
                        <svg
                            class="transaction-chart"
                            viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                            preserveAspectRatio="xMidYMid meet"
                        >
                            <line class="chart-axis" x1="0" y1=plot_height x2=CHART_WIDTH y2=plot_height />
                            {bars}
                        </svg>
                        <div class="chart-legend">
                            <span class="legend-credit">"■ Income"</span>
                            <span class="legend-debit">"■ Expense"</span>
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
