//! Calendar Page
//!
//! Month grid with milestone-day highlighting. Clicking a highlighted day
//! lists that day's milestones with edit / invoice / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::calendar_grid::{day_key, month_title, month_weeks, next_month, prev_month};
use crate::commands::{self, MilestoneDraftArgs};
use crate::components::{ConfirmDeleteModal, MilestoneForm, Modal};
use crate::context::use_app_context;
use crate::models::{CalendarView, Milestone};
use crate::money;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let ctx = use_app_context();

    // Current month from the host clock
    let now = js_sys::Date::new_0();
    let (year, set_year) = signal(now.get_full_year() as i32);
    let (month, set_month) = signal(now.get_month() + 1);

    let (calendar, set_calendar) = signal(None::<CalendarView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    let (selected_day, set_selected_day) = signal(None::<String>);
    let (editing, set_editing) = signal(None::<Milestone>);
    let (deleting, set_deleting) = signal(None::<Milestone>);
    let (invoice_for, set_invoice_for) = signal(None::<Milestone>);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::calendar_index().await {
                Ok(view) => {
                    set_calendar.set(Some(view));
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    });

    let milestones_on = move |key: &str| -> Vec<Milestone> {
        calendar
            .get()
            .and_then(|c| c.index.get(key).cloned())
            .unwrap_or_default()
    };

    let selected_milestones = Signal::derive(move || {
        selected_day
            .get()
            .map(|key| milestones_on(&key))
            .unwrap_or_default()
    });

    let gig_title = move |milestone: &Milestone| -> String {
        milestone
            .gig_id
            .as_ref()
            .and_then(|id| calendar.get().and_then(|c| c.gig_titles.get(id).cloned()))
            .unwrap_or_else(|| "—".to_string())
    };

    let save_edit = move |draft: MilestoneDraftArgs| {
        let Some(milestone) = editing.get_untracked() else { return };
        set_busy.set(true);
        spawn_local(async move {
            match commands::update_milestone(&milestone.id, &draft).await {
                Ok(_) => {
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(milestone) = deleting.get_untracked() else { return };
        set_busy.set(true);
        spawn_local(async move {
            match commands::delete_milestone(&milestone.id).await {
                Ok(()) => {
                    set_deleting.set(None);
                    ctx.reload();
                }
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="calendar-page">
            <div class="dashboard-hero">
                <div>
                    <p class="eyebrow">"Milestone overview"</p>
                    <h1>"Upcoming Deliverables"</h1>
                    <p class="subtext">"See what milestones are due soon to keep your work organised."</p>
                </div>
                <button class="ghost-button" on:click=move |_| ctx.reload() disabled=move || loading.get()>
                    {move || if loading.get() { "Refreshing…" } else { "↻" }}
                </button>
            </div>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}

            <div class="calendar-layout">
                <div class="calendar-card">
                    <div class="calendar-nav">
                        <button class="btn-secondary" on:click=move |_| {
                            let (y, m) = prev_month(year.get(), month.get());
                            set_year.set(y);
                            set_month.set(m);
                        }>"‹"</button>
                        <h2>{move || month_title(year.get(), month.get())}</h2>
                        <button class="btn-secondary" on:click=move |_| {
                            let (y, m) = next_month(year.get(), month.get());
                            set_year.set(y);
                            set_month.set(m);
                        }>"›"</button>
                    </div>

                    <div class="calendar-weekdays">
                        {["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].iter().map(|d| view! {
                            <span class="weekday">{*d}</span>
                        }).collect_view()}
                    </div>

                    {move || {
                        month_weeks(year.get(), month.get()).into_iter().map(|week| {
                            view! {
                                <div class="calendar-week">
                                    {week.into_iter().map(|slot| match slot {
                                        Some(day) => {
                                            let key = day_key(day);
                                            let has_milestones = !milestones_on(&key).is_empty();
                                            let is_selected = {
                                                let key = key.clone();
                                                move || selected_day.get().as_deref() == Some(key.as_str())
                                            };
                                            let click_key = key.clone();
                                            let classes = move || {
                                                let mut c = "calendar-day".to_string();
                                                if has_milestones { c.push_str(" milestone-day"); }
                                                if is_selected() { c.push_str(" selected"); }
                                                c
                                            };
                                            view! {
                                                <button
                                                    class=classes
                                                    on:click=move |_| set_selected_day.set(Some(click_key.clone()))
                                                >
                                                    {format!("{}", chrono::Datelike::day(&day))}
                                                </button>
                                            }.into_any()
                                        }
                                        None => view! { <span class="calendar-day empty"></span> }.into_any(),
                                    }).collect_view()}
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>

                <div class="details-panel">
                    <div class="panel-card">
                        <h2>
                            {move || match selected_day.get() {
                                Some(day) => format!("Milestones on {}", money::format_date(&day)),
                                None => "Select a date to view milestones".to_string(),
                            }}
                        </h2>

                        {move || selected_day.get().is_none().then(|| view! {
                            <p class="muted">"Highlighted days contain milestones."</p>
                        })}

                        {move || (selected_day.get().is_some() && selected_milestones.get().is_empty()).then(|| view! {
                            <p>"No milestones for this day."</p>
                        })}

                        <For
                            each=move || selected_milestones.get()
                            key=|m| m.id.clone()
                            children=move |milestone| {
                                let edit_m = milestone.clone();
                                let delete_m = milestone.clone();
                                let invoice_m = milestone.clone();
                                let gig = gig_title(&milestone);
                                view! {
                                    <div class="milestone-row">
                                        <div class="milestone-main">
                                            <div class="milestone-title">{milestone.title.clone()}</div>
                                            <div class="milestone-desc">
                                                {milestone.description.clone().unwrap_or_else(|| "No description".to_string())}
                                            </div>
                                            <div class="milestone-meta">
                                                <span>"Status: " {milestone.status.clone()}</span>
                                                <span>"Amount: " {money::format_amount(milestone.payment_amount, "USD")}</span>
                                                <span>"Gig: " {gig}</span>
                                            </div>
                                        </div>
                                        <div class="milestone-actions">
                                            <button class="btn-secondary" on:click=move |_| set_editing.set(Some(edit_m.clone()))>"✎"</button>
                                            <button class="btn" on:click=move |_| set_invoice_for.set(Some(invoice_m.clone()))>"View Invoice"</button>
                                            <button class="btn-danger" on:click=move |_| set_deleting.set(Some(delete_m.clone()))>"🗑"</button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </div>

            {move || editing.get().map(|milestone| view! {
                <Modal title="Edit Milestone" on_close=move |_: ()| set_editing.set(None)>
                    <MilestoneForm
                        initial=Some(milestone)
                        on_save=save_edit
                        on_cancel=move |_: ()| set_editing.set(None)
                    />
                </Modal>
            })}

            {move || deleting.get().map(|milestone| view! {
                <Modal title="Confirm Deletion" on_close=move |_: ()| set_deleting.set(None)>
                    <ConfirmDeleteModal
                        message=format!("Delete milestone \"{}\"?", milestone.title)
                        on_confirm=confirm_delete
                        on_cancel=move |_: ()| set_deleting.set(None)
                        busy=busy
                    />
                </Modal>
            })}

            {move || invoice_for.get().map(|milestone| view! {
                <Modal title="Generate Invoice" on_close=move |_: ()| set_invoice_for.set(None)>
                    <InvoiceForm
                        milestone_id=milestone.id.clone()
                        on_done=move |_: ()| set_invoice_for.set(None)
                    />
                </Modal>
            })}
        </div>
    }
}

/// Invoice modal body: asks for the official names, then opens the PDF.
#[component]
fn InvoiceForm(milestone_id: String, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let (client_name, set_client_name) = signal(String::new());
    let (freelancer_name, set_freelancer_name) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = milestone_id.clone();
        let client = client_name.get();
        let freelancer = freelancer_name.get();

        set_busy.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match commands::open_invoice(&id, &client, &freelancer).await {
                Ok(_) => on_done.run(()),
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="txn-form" on:submit=generate>
            <p class="invoice-prompt-text">"Enter official names to include on the invoice."</p>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="txn-form-error">{error.get()}</div>
            })}

            <div class="txn-form-group">
                <label>"Client Name*"</label>
                <input
                    type="text"
                    placeholder="Client Name"
                    prop:value=move || client_name.get()
                    on:input=move |ev| set_client_name.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="txn-form-group">
                <label>"Freelancer Name*"</label>
                <input
                    type="text"
                    placeholder="Freelancer Name"
                    prop:value=move || freelancer_name.get()
                    on:input=move |ev| set_freelancer_name.set(event_target_value(&ev))
                    required
                />
            </div>

            <div class="modal-actions">
                <button type="button" class="btn-danger" on:click=move |_| on_done.run(())>"Cancel"</button>
                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Generating…" } else { "Generate Invoice" }}
                </button>
            </div>
        </form>
    }
}
