//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board and
//! the currency selection live here because several views share them;
//! everything else stays in per-view signals.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashMap;

use crate::models::{Gig, Milestone};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Board gigs
    pub gigs: Vec<Gig>,
    /// Milestones per gig id
    pub milestones: HashMap<String, Vec<Milestone>>,
    /// Selected display currency code
    pub currency: String,
    /// Conversion rates relative to USD
    pub rates: HashMap<String, f64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            currency: "USD".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Conversion rate for the selected currency (USD = 1.0)
pub fn selected_rate(store: &AppStore) -> f64 {
    let currency = store.currency().get();
    if currency == "USD" || currency.is_empty() {
        return 1.0;
    }
    store.rates().get().get(&currency).copied().unwrap_or(1.0)
}

/// Replace a gig in the store by ID
pub fn store_update_gig(store: &AppStore, updated: Gig) {
    store.gigs().write().iter_mut()
        .find(|gig| gig.id == updated.id)
        .map(|gig| *gig = updated);
}

/// Remove a gig and its milestones from the store by ID
pub fn store_remove_gig(store: &AppStore, gig_id: &str) {
    store.gigs().write().retain(|gig| gig.id != gig_id);
    store.milestones().write().remove(gig_id);
}

/// Optimistically set a gig's status in the store
pub fn store_apply_gig_status(store: &AppStore, gig_id: &str, status: &str) {
    crate::board::apply_status(&mut store.gigs().write(), gig_id, status);
}

/// Add a milestone under its gig
pub fn store_add_milestone(store: &AppStore, gig_id: &str, milestone: Milestone) {
    store.milestones().write().entry(gig_id.to_string()).or_default().push(milestone);
}

/// Replace a milestone under its gig by ID
pub fn store_update_milestone(store: &AppStore, gig_id: &str, updated: Milestone) {
    if let Some(list) = store.milestones().write().get_mut(gig_id) {
        list.iter_mut()
            .find(|m| m.id == updated.id)
            .map(|m| *m = updated);
    }
}

/// Remove a milestone under its gig by ID
pub fn store_remove_milestone(store: &AppStore, gig_id: &str, milestone_id: &str) {
    if let Some(list) = store.milestones().write().get_mut(gig_id) {
        list.retain(|m| m.id != milestone_id);
    }
}
