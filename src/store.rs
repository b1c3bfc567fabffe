//! Panel State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity; the core
//! panel writes into it through `PanelSignals`.

use leptos::prelude::*;
use reactive_stores::Store;

use mattrix_core::{Contact, PanelStore, Stats, Tab};

/// Everything the panel renders, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last successfully loaded contacts
    pub contacts: Vec<Contact>,
    /// Last successfully loaded stats, None until the first load
    pub stats: Option<Stats>,
    /// Requests holding the loading flag
    pub in_flight: u32,
    /// Pending new-contact template text
    pub draft: String,
    pub active_tab: Tab,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Reactive loading flag
pub fn is_loading(store: AppStore) -> bool {
    store.in_flight().get() > 0
}

/// `PanelStore` backed by the reactive store
#[derive(Clone, Copy)]
pub struct PanelSignals(pub AppStore);

impl PanelStore for PanelSignals {
    fn replace_contacts(&self, contacts: Vec<Contact>) {
        self.0.contacts().set(contacts);
    }

    fn replace_stats(&self, stats: Stats) {
        self.0.stats().set(Some(stats));
    }

    fn begin_loading(&self) {
        self.0.in_flight().update(|n| *n += 1);
    }

    fn end_loading(&self) {
        self.0.in_flight().update(|n| *n = n.saturating_sub(1));
    }

    fn draft(&self) -> String {
        self.0.draft().get_untracked()
    }

    fn set_draft(&self, text: String) {
        self.0.draft().set(text);
    }

    fn active_tab(&self) -> Tab {
        self.0.active_tab().get_untracked()
    }

    fn set_active_tab(&self, tab: Tab) {
        self.0.active_tab().set(tab);
    }

    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    tracing::warn!("alert blocked: {}", message);
                }
            }
            None => tracing::warn!("no window for alert: {}", message),
        }
    }
}
