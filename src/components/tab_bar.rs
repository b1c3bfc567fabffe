//! Tab Bar Component
//!
//! Switches between the contacts, add and stats views.

use leptos::prelude::*;
use mattrix_core::Tab;

use crate::context::use_panel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TabBar() -> impl IntoView {
    let panel = use_panel();
    let store = use_app_store();

    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let panel = panel.clone();
                let is_active = move || store.active_tab().get() == tab;
                let tab_class = move || {
                    if is_active() { "tab active" } else { "tab" }
                };

                view! {
                    <button
                        class=tab_class
                        data-tab=tab.key()
                        on:click=move |_| panel.select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
