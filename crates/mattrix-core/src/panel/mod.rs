//! Contacts Panel
//!
//! Data synchronizer (contacts and stats snapshots) and mutation
//! dispatcher (add contact) over a `CrmApi` and a `PanelStore`.
//!
//! State is always replaced wholesale. Concurrent refreshes are not
//! de-duplicated: whichever response lands last wins.

mod store;


use tracing::{debug, error, info};

use crate::api::CrmApi;
use crate::config::CrmConfig;
use crate::domain::Contact;
use crate::error::CrmResult;
use crate::session::SessionMode;
use crate::tabs::{Tab, TabEvent};

pub use store::{LoadingGuard, MemoryStore, PanelSnapshot, PanelStore};

/// Result of `ContactsPanel::submit_contact`
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Blank draft, nothing was sent
    Skipped,
    /// Server accepted the contact (payload is optional on the wire)
    Created(Option<Contact>),
    /// Server or transport failure; carries the message shown to the user
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ContactsPanel<A, S> {
    api: A,
    store: S,
    user_id: String,
}

impl<A: CrmApi, S: PanelStore> ContactsPanel<A, S> {
    pub fn new(api: A, store: S, user_id: impl Into<String>) -> Self {
        Self {
            api,
            store,
            user_id: user_id.into(),
        }
    }

    /// Only an active session gets a panel; signed-out users never fetch.
    pub fn for_session(api: A, store: S, mode: SessionMode, config: &CrmConfig) -> Option<Self> {
        mode.user_id(config).map(|id| Self::new(api, store, id))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Replace the contact list. Failures keep the previous list.
    pub async fn refresh_contacts(&self) -> CrmResult<()> {
        let result = {
            let _loading = LoadingGuard::new(&self.store);
            self.api.list_contacts(&self.user_id).await
        };
        match result {
            Ok(contacts) => {
                debug!("loaded {} contacts for {}", contacts.len(), self.user_id);
                self.store.replace_contacts(contacts);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching contacts: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the stats snapshot. Does not touch the loading flag.
    pub async fn refresh_stats(&self) -> CrmResult<()> {
        match self.api.fetch_stats(&self.user_id).await {
            Ok(stats) => {
                debug!("loaded stats for {}: {} contacts", self.user_id, stats.total_contacts);
                self.store.replace_stats(stats);
                Ok(())
            }
            Err(e) => {
                error!("Error fetching stats: {}", e);
                Err(e)
            }
        }
    }

    /// Initial load after the session becomes active. Read failures are
    /// already logged, so both reads always run.
    pub async fn sync(&self) {
        let _ = self.refresh_contacts().await;
        let _ = self.refresh_stats().await;
    }

    /// Send the current draft to the server.
    ///
    /// On success the draft is cleared, the contacts tab is shown and the
    /// list is refreshed. On failure the user is alerted and the draft and
    /// tab stay as they were.
    pub async fn submit_contact(&self) -> SubmitOutcome {
        let draft = self.store.draft();
        if draft.trim().is_empty() {
            debug!("ignoring blank contact draft");
            return SubmitOutcome::Skipped;
        }

        let result = {
            let _loading = LoadingGuard::new(&self.store);
            self.api.create_contact(&self.user_id, &draft).await
        };

        match result {
            Ok(created) => {
                info!(
                    "contact created{}",
                    created.as_ref().map(|c| format!(": {}", c.name)).unwrap_or_default()
                );
                self.store.set_draft(String::new());
                self.route(TabEvent::ContactCreated);
                let _ = self.refresh_contacts().await;
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                error!("Error adding contact: {}", e);
                let message = e.user_message();
                self.store.alert(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn select_tab(&self, tab: Tab) {
        self.route(TabEvent::Select(tab));
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.store.set_draft(text.into());
    }

    fn route(&self, event: TabEvent) {
        let next = self.store.active_tab().transition(event);
        self.store.set_active_tab(next);
    }
}
