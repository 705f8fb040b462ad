//! Gig Board Component
//!
//! Jira-style columns driven by gig status. Cards move between columns by
//! pointer drag: the status change is applied to the store immediately,
//! then persisted. If persisting fails, the whole board is refetched from
//! the backend - optimistic apply, reconcile via authoritative refetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_column_mouseenter, make_on_mousedown,
    make_on_mouseleave, DropTarget,
};

use crate::board::{drop_transition, BOARD_COLUMNS};
use crate::commands::{self, GigDraftArgs, MilestoneDraftArgs};
use crate::components::{ConfirmDeleteModal, MilestoneForm, Modal};
use crate::context::use_app_context;
use crate::models::{Gig, Milestone};
use crate::money;
use crate::store::{
    store_add_milestone, store_apply_gig_status, store_remove_gig, store_remove_milestone,
    store_update_gig, store_update_milestone, use_app_store, AppStateStoreFields,
};

/// What the board modal is editing
#[derive(Clone)]
enum BoardModal {
    AddGig,
    EditGig(Gig),
    AddMilestone(Gig),
    EditMilestone(String, Milestone),
    DeleteGig(Gig),
    DeleteMilestone(String, Milestone),
}

#[component]
fn GigForm(
    initial: Option<Gig>,
    #[prop(into)] on_save: Callback<GigDraftArgs>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(initial.as_ref().map(|g| g.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        initial.as_ref().and_then(|g| g.description.clone()).unwrap_or_default(),
    );
    let (client, set_client) = signal(
        initial.as_ref().and_then(|g| g.client_name.clone()).unwrap_or_default(),
    );
    let (value, set_value) = signal(
        initial.as_ref().map(|g| g.total_value.to_string()).unwrap_or_default(),
    );
    let (status, set_status) = signal(
        initial.as_ref().map(|g| g.status.clone()).unwrap_or_else(|| "Open".to_string()),
    );
    let (due_date, set_due_date) = signal(
        initial.as_ref().and_then(|g| g.due_date.clone()).unwrap_or_default(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            return;
        }
        let description = description.get();
        let client = client.get();
        let due = due_date.get();
        on_save.run(GigDraftArgs {
            title: title.trim().to_string(),
            description: (!description.trim().is_empty()).then(|| description.trim().to_string()),
            client_name: (!client.trim().is_empty()).then(|| client.trim().to_string()),
            total_value: value.get().trim().parse::<f64>().unwrap_or(0.0),
            status: status.get(),
            due_date: (!due.is_empty()).then_some(due),
        });
    };

    view! {
        <form class="txn-form" on:submit=submit>
            <div class="txn-form-group">
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    required
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <div class="modal-grid">
                    <input
                        type="text"
                        placeholder="Client Name"
                        prop:value=move || client.get()
                        on:input=move |ev| set_client.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Total Value"
                        prop:value=move || value.get()
                        on:input=move |ev| set_value.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| set_status.set(event_target_value(&ev))>
                        {BOARD_COLUMNS.iter().map(|option| {
                            let value = *option;
                            view! {
                                <option value=value selected=move || status.get() == value>
                                    {value}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
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

#[component]
pub fn GigBoard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());
    let (modal, set_modal) = signal(None::<BoardModal>);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match commands::load_board().await {
                Ok(board) => {
                    store.gigs().set(board.gigs);
                    store.milestones().set(board.milestones);
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err),
            }
            set_loading.set(false);
        });
    });

    // DnD: optimistic apply, reconcile via authoritative refetch on failure
    let dnd = create_dnd_signals();
    let on_drop = move |gig_id: String, target: DropTarget| {
        let DropTarget::Column(column) = target;
        let Some(gig) = store.gigs().get_untracked().iter().find(|g| g.id == gig_id).cloned() else {
            return;
        };
        let Some(next_status) = drop_transition(&gig.status, column) else {
            return;
        };

        store_apply_gig_status(&store, &gig.id, next_status);
        spawn_local(async move {
            match commands::set_gig_status(&gig, next_status).await {
                Ok(saved) => store_update_gig(&store, saved),
                Err(err) => {
                    set_error.set(err);
                    ctx.reload();
                }
            }
        });
    };
    bind_global_mouseup(dnd, on_drop);

    let close_modal = move |_: ()| set_modal.set(None);

    let save_gig = move |draft: GigDraftArgs| {
        let current = modal.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = match current {
                Some(BoardModal::AddGig) => commands::create_gig(&draft).await.map(|gig| {
                    store.gigs().write().insert(0, gig);
                }),
                Some(BoardModal::EditGig(gig)) => commands::update_gig(&gig.id, &draft).await.map(|saved| {
                    store_update_gig(&store, saved);
                }),
                _ => Ok(()),
            };
            match result {
                Ok(()) => set_modal.set(None),
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    let save_milestone = move |draft: MilestoneDraftArgs| {
        let current = modal.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = match current {
                Some(BoardModal::AddMilestone(gig)) => {
                    commands::create_milestone(&gig.id, &draft).await.map(|created| {
                        store_add_milestone(&store, &gig.id, created);
                    })
                }
                Some(BoardModal::EditMilestone(gig_id, milestone)) => {
                    commands::update_milestone(&milestone.id, &draft).await.map(|saved| {
                        store_update_milestone(&store, &gig_id, saved);
                    })
                }
                _ => Ok(()),
            };
            match result {
                Ok(()) => set_modal.set(None),
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    let confirm_delete = move |_: ()| {
        let current = modal.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = match current {
                Some(BoardModal::DeleteGig(gig)) => commands::delete_gig(&gig.id).await.map(|()| {
                    store_remove_gig(&store, &gig.id);
                }),
                Some(BoardModal::DeleteMilestone(gig_id, milestone)) => {
                    commands::delete_milestone(&milestone.id).await.map(|()| {
                        store_remove_milestone(&store, &gig_id, &milestone.id);
                    })
                }
                _ => Ok(()),
            };
            match result {
                Ok(()) => set_modal.set(None),
                Err(err) => set_error.set(err),
            }
            set_busy.set(false);
        });
    };

    // Quick toggle: Completed <-> Open
    let toggle_gig_complete = move |gig: Gig| {
        let next = if gig.status == "Completed" { "Open" } else { "Completed" };
        store_apply_gig_status(&store, &gig.id, next);
        spawn_local(async move {
            match commands::set_gig_status(&gig, next).await {
                Ok(saved) => store_update_gig(&store, saved),
                Err(err) => {
                    set_error.set(err);
                    ctx.reload();
                }
            }
        });
    };

    // Quick toggle: Done <-> To Do
    let toggle_milestone_done = move |(gig_id, milestone): (String, Milestone)| {
        let mut draft = MilestoneDraftArgs::from(&milestone);
        draft.status = if milestone.status == "Done" { "To Do" } else { "Done" }.to_string();
        spawn_local(async move {
            match commands::update_milestone(&milestone.id, &draft).await {
                Ok(saved) => store_update_milestone(&store, &gig_id, saved),
                Err(err) => {
                    set_error.set(err);
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <div class="gig-board">
            <header class="gig-board-header">
                <div>
                    <p class="eyebrow">"Pipeline"</p>
                    <h1>"Gig Board"</h1>
                </div>
                <div class="header-actions">
                    <button class="btn" on:click=move |_| set_modal.set(Some(BoardModal::AddGig))>
                        "+ New Gig"
                    </button>
                    <button class="btn-secondary" on:click=move |_| ctx.reload()>"↻"</button>
                </div>
            </header>

            {move || (!error.get().is_empty()).then(|| view! {
                <div class="summary-error">{error.get()}</div>
            })}

            {move || if loading.get() {
                view! { <div class="dashboard-loading">"Loading…"</div> }.into_any()
            } else {
                view! {
                    <div class="board-columns">
                        {BOARD_COLUMNS.iter().enumerate().map(|(column_index, column)| {
                            let column_name = *column;
                            let is_drop_target = move || {
                                dnd.drop_target_read.get() == Some(DropTarget::Column(column_index))
                            };
                            view! {
                                <div
                                    class=move || if is_drop_target() { "board-column drop-active" } else { "board-column" }
                                    on:mouseenter=make_on_column_mouseenter(dnd, column_index)
                                    on:mouseleave=make_on_mouseleave(dnd)
                                >
                                    <h2>{column_name}</h2>
                                    <div class="column-cards">
                                        <For
                                            each=move || {
                                                store.gigs().get().into_iter()
                                                    .filter(|g| g.status == column_name)
                                                    .collect::<Vec<_>>()
                                            }
                                            key=|gig| gig.id.clone()
                                            children=move |gig| {
                                                view! { <GigCard gig=gig dnd=dnd set_modal=set_modal
                                                    on_toggle_gig=toggle_gig_complete
                                                    on_toggle_milestone=toggle_milestone_done /> }
                                            }
                                        />
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            {move || modal.get().map(|active| match active {
                BoardModal::AddGig => view! {
                    <Modal title="Create Gig" on_close=close_modal>
                        <GigForm initial=None on_save=save_gig on_cancel=close_modal />
                    </Modal>
                }.into_any(),
                BoardModal::EditGig(gig) => view! {
                    <Modal title="Edit Gig" on_close=close_modal>
                        <GigForm initial=Some(gig) on_save=save_gig on_cancel=close_modal />
                    </Modal>
                }.into_any(),
                BoardModal::AddMilestone(_) => view! {
                    <Modal title="Create Milestone" on_close=close_modal>
                        <MilestoneForm initial=None on_save=save_milestone on_cancel=close_modal />
                    </Modal>
                }.into_any(),
                BoardModal::EditMilestone(_, milestone) => view! {
                    <Modal title="Edit Milestone" on_close=close_modal>
                        <MilestoneForm initial=Some(milestone) on_save=save_milestone on_cancel=close_modal />
                    </Modal>
                }.into_any(),
                BoardModal::DeleteGig(gig) => view! {
                    <Modal title="Confirm Deletion" on_close=close_modal>
                        <ConfirmDeleteModal
                            message=format!("Delete \"{}\" and all of its milestones?", gig.title)
                            on_confirm=confirm_delete
                            on_cancel=close_modal
                            busy=busy
                        />
                    </Modal>
                }.into_any(),
                BoardModal::DeleteMilestone(_, milestone) => view! {
                    <Modal title="Confirm Deletion" on_close=close_modal>
                        <ConfirmDeleteModal
                            message=format!("Delete milestone \"{}\"?", milestone.title)
                            on_confirm=confirm_delete
                            on_cancel=close_modal
                            busy=busy
                        />
                    </Modal>
                }.into_any(),
            })}
        </div>
    }
}

#[component]
fn GigCard(
    gig: Gig,
    dnd: leptos_dragdrop::DndSignals,
    set_modal: WriteSignal<Option<BoardModal>>,
    #[prop(into)] on_toggle_gig: Callback<Gig>,
    #[prop(into)] on_toggle_milestone: Callback<(String, Milestone)>,
) -> impl IntoView {
    let store = use_app_store();

    let gig_id = gig.id.clone();
    let milestones = Signal::derive({
        let gig_id = gig_id.clone();
        move || {
            store
                .milestones()
                .get()
                .get(&gig_id)
                .cloned()
                .unwrap_or_default()
        }
    });

    let is_dragging = {
        let gig_id = gig_id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(gig_id.as_str())
    };

    let due = gig
        .due_date
        .clone()
        .map(|raw| money::format_date(&raw))
        .unwrap_or_else(|| "—".to_string());

    let edit_gig = gig.clone();
    let toggle_gig = gig.clone();
    let delete_gig = gig.clone();
    let milestone_gig = gig.clone();
    let toggle_label = move || if toggle_gig.status == "Completed" { "↺" } else { "✓" };
    let toggle_send = gig.clone();

    view! {
        <div
            class=move || if is_dragging() { "gig-card dragging" } else { "gig-card" }
            on:mousedown=make_on_mousedown(dnd, gig.id.clone())
        >
            <div class="gig-card-header">
                <div>
                    <h3 class="gig-title">{gig.title.clone()}</h3>
                    <p class="gig-client">{gig.client_name.clone().unwrap_or_else(|| "—".to_string())}</p>
                    <p class="gig-desc">
                        {gig.description.clone().map(|d| d.chars().take(120).collect::<String>()).unwrap_or_default()}
                    </p>
                    <div class="gig-actions">
                        <button
                            class="btn-secondary"
                            title="Add Milestone"
                            on:click=move |_| set_modal.set(Some(BoardModal::AddMilestone(milestone_gig.clone())))
                        >
                            "+"
                        </button>
                        <button
                            class="btn-secondary"
                            title="Edit"
                            on:click=move |_| set_modal.set(Some(BoardModal::EditGig(edit_gig.clone())))
                        >
                            "✎"
                        </button>
                        <button
                            class="btn"
                            title="Toggle Completed"
                            on:click=move |_| on_toggle_gig.run(toggle_send.clone())
                        >
                            {toggle_label}
                        </button>
                        <button
                            class="btn-danger"
                            title="Delete"
                            on:click=move |_| set_modal.set(Some(BoardModal::DeleteGig(delete_gig.clone())))
                        >
                            "🗑"
                        </button>
                    </div>
                </div>
                <div class="gig-meta">
                    <div>"Value"</div>
                    <div class="strong">{money::format_amount(gig.total_value, "USD")}</div>
                    <div>"Due: " {due}</div>
                </div>
            </div>

            <div class="milestones">
                <For
                    each=move || milestones.get()
                    key=|m| m.id.clone()
                    children=move |milestone| {
                        let gig_id = gig_id.clone();
                        let edit_id = gig_id.clone();
                        let delete_id = gig_id.clone();
                        let edit_m = milestone.clone();
                        let delete_m = milestone.clone();
                        let toggle_m = milestone.clone();
                        let done = milestone.status == "Done";
                        view! {
                            <div class="milestone">
                                <div>
                                    <div class="milestone-title">{milestone.title.clone()}</div>
                                    <div class="milestone-desc">
                                        {milestone.description.clone().map(|d| d.chars().take(80).collect::<String>()).unwrap_or_default()}
                                    </div>
                                    <div class="milestone-meta">
                                        {milestone.status.clone()} " • " {money::format_amount(milestone.payment_amount, "USD")}
                                    </div>
                                </div>
                                <div class="milestone-actions">
                                    <button
                                        class="milestone-btn"
                                        title="Toggle Done"
                                        on:click=move |_| on_toggle_milestone.run((gig_id.clone(), toggle_m.clone()))
                                    >
                                        {if done { "☑" } else { "☐" }}
                                    </button>
                                    <button
                                        class="btn-secondary"
                                        title="Edit"
                                        on:click=move |_| set_modal.set(Some(BoardModal::EditMilestone(edit_id.clone(), edit_m.clone())))
                                    >
                                        "✎"
                                    </button>
                                    <button
                                        class="btn-danger"
                                        title="Delete"
                                        on:click=move |_| set_modal.set(Some(BoardModal::DeleteMilestone(delete_id.clone(), delete_m.clone())))
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
