//! Mattrix Frontend App
//!
//! Session gate at the root: the welcome view while signed out, the
//! contacts panel once signed in or launched in demo mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tracing::info;

use mattrix_core::{ContactsPanel, CrmConfig, HttpCrmApi, LaunchMode, SessionGate, SessionMode, Tab};

use crate::auth::{use_auth, AuthContext};
use crate::components::{AddContactForm, ContactList, PanelHeader, StatsView, TabBar, WelcomeView};
use crate::context::Panel;
use crate::store::{use_app_store, AppState, AppStateStoreFields, PanelSignals};

#[component]
pub fn App(config: CrmConfig, launch: LaunchMode) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let auth = AuthContext::new();
    let api = HttpCrmApi::new(config.clone());

    // Provide context to all children
    provide_context(store);
    provide_context(auth);

    let mode = Memo::new(move |_| SessionMode::resolve(&auth.snapshot(), launch));

    // Auto sign-in on mount (reads are untracked, so this runs once)
    Effect::new(move |_| auth.sign_in());

    // Initial sync each time the session becomes active
    let gate = StoredValue::new(SessionGate::new());
    let sync_api = api.clone();
    let sync_config = config.clone();
    Effect::new(move |_| {
        let current = mode.get();
        let mut activated = false;
        gate.update_value(|g| activated = g.observe(current));
        if !activated {
            return;
        }
        let Some(panel) = ContactsPanel::for_session(sync_api.clone(), PanelSignals(store), current, &sync_config) else {
            return;
        };
        info!("[APP] session {:?} active, syncing for {}", current, panel.user_id());
        let contacts_panel = panel.clone();
        spawn_local(async move {
            let _ = contacts_panel.refresh_contacts().await;
        });
        spawn_local(async move {
            let _ = panel.refresh_stats().await;
        });
    });

    move || {
        let current = mode.get();
        match ContactsPanel::for_session(api.clone(), PanelSignals(store), current, &config) {
            Some(panel) => view! { <PanelView panel=panel mode=current /> }.into_any(),
            None => view! { <WelcomeView /> }.into_any(),
        }
    }
}

/// Header, tabs and the active view for an active session
#[component]
fn PanelView(panel: Panel, mode: SessionMode) -> impl IntoView {
    let store = use_app_store();
    let auth = use_auth();
    provide_context(panel);

    let identity = Signal::derive(move || mode.identity(&auth.snapshot()));

    view! {
        <div class="panel-page">
            <div class="panel-card">
                <PanelHeader identity=identity />
                <TabBar />

                <div class="panel-content">
                    {move || match store.active_tab().get() {
                        Tab::Contacts => view! { <ContactList /> }.into_any(),
                        Tab::Add => view! { <AddContactForm /> }.into_any(),
                        Tab::Stats => view! { <StatsView /> }.into_any(),
                    }}
                </div>

                <footer class="panel-footer">
                    "Powered by your Telegram bot data • Built with Base MiniKit"
                </footer>
            </div>
        </div>
    }
}
