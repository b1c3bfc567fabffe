//! Stats View Component
//!
//! Aggregate numbers for the current user; nothing renders until the
//! first successful load.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatCard;
use crate::context::use_panel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsView() -> impl IntoView {
    let panel = use_panel();
    let store = use_app_store();

    let refresh = move |_| {
        let panel = panel.clone();
        spawn_local(async move {
            let _ = panel.refresh_stats().await;
        });
    };

    view! {
        <div class="stats-tab">
            <div class="section-header">
                <h2>"Networking Stats"</h2>
                <button class="refresh-btn" on:click=refresh>"🔄 Refresh"</button>
            </div>

            {move || store.stats().get().map(|stats| view! {
                <div class="stats-grid">
                    <StatCard value=stats.total_contacts.to_string() label="Total Contacts" tone="blue" />
                    <StatCard value=stats.high_priority.to_string() label="High Priority" tone="red" />
                    <StatCard value=stats.companies.to_string() label="Companies" tone="green" />
                    <StatCard value=stats.with_photos.to_string() label="With Photos" tone="purple" />
                </div>
            })}
        </div>
    }
}
