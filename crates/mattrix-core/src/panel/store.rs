//! Panel State Store
//!
//! Sink for everything the panel renders. The browser binds it to
//! reactive signals; `MemoryStore` keeps it in a plain snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Contact, Stats};
use crate::tabs::Tab;

pub trait PanelStore {
    fn replace_contacts(&self, contacts: Vec<Contact>);
    fn replace_stats(&self, stats: Stats);

    /// Loading is counted, so overlapping operations don't clear each other's flag
    fn begin_loading(&self);
    fn end_loading(&self);

    fn draft(&self) -> String;
    fn set_draft(&self, text: String);

    fn active_tab(&self) -> Tab;
    fn set_active_tab(&self, tab: Tab);

    /// Blocking user-facing error
    fn alert(&self, message: &str);
}

/// Holds the loading flag for as long as it lives
pub struct LoadingGuard<'a, S: PanelStore> {
    store: &'a S,
}

impl<'a, S: PanelStore> LoadingGuard<'a, S> {
    pub fn new(store: &'a S) -> Self {
        store.begin_loading();
        Self { store }
    }
}

impl<S: PanelStore> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.store.end_loading();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSnapshot {
    pub contacts: Vec<Contact>,
    pub stats: Option<Stats>,
    pub in_flight: u32,
    pub draft: String,
    pub active_tab: Tab,
}

impl PanelSnapshot {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// In-memory store; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<PanelSnapshot>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: PanelSnapshot) -> Self {
        Self {
            state: Rc::new(RefCell::new(snapshot)),
            alerts: Rc::default(),
        }
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        self.state.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl PanelStore for MemoryStore {
    fn replace_contacts(&self, contacts: Vec<Contact>) {
        self.state.borrow_mut().contacts = contacts;
    }

    fn replace_stats(&self, stats: Stats) {
        self.state.borrow_mut().stats = Some(stats);
    }

    fn begin_loading(&self) {
        self.state.borrow_mut().in_flight += 1;
    }

    fn end_loading(&self) {
        let mut state = self.state.borrow_mut();
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    fn draft(&self) -> String {
        self.state.borrow().draft.clone()
    }

    fn set_draft(&self, text: String) {
        self.state.borrow_mut().draft = text;
    }

    fn active_tab(&self) -> Tab {
        self.state.borrow().active_tab
    }

    fn set_active_tab(&self, tab: Tab) {
        self.state.borrow_mut().active_tab = tab;
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
