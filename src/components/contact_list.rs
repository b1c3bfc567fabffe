//! Contact List Component
//!
//! Shows the last loaded contacts with a manual refresh. Failed loads keep
//! whatever was shown before.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ContactCard;
use crate::context::use_panel;
use crate::store::{is_loading, use_app_store, AppStateStoreFields};

#[component]
pub fn ContactList() -> impl IntoView {
    let panel = use_panel();
    let store = use_app_store();
    let loading = move || is_loading(store);

    let refresh = move |_| {
        let panel = panel.clone();
        spawn_local(async move {
            let _ = panel.refresh_contacts().await;
        });
    };

    view! {
        <div class="contacts-tab">
            <div class="section-header">
                <h2>"Your Contacts"</h2>
                <button class="refresh-btn" on:click=refresh disabled=loading>
                    {move || if loading() { "⏳" } else { "🔄" }}
                    " Refresh"
                </button>
            </div>

            <Show
                when=move || store.contacts().with(|c| !c.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <div class="empty-icon">"👤"</div>
                        <p>"No contacts yet"</p>
                        <p class="hint">"Add your first contact!"</p>
                    </div>
                }
            >
                <div class="contact-list">
                    <For
                        each=move || store.contacts().get()
                        key=|contact| contact.id.clone()
                        children=move |contact| view! { <ContactCard contact=contact /> }
                    />
                </div>
            </Show>
        </div>
    }
}
