//! Add Contact Form Component
//!
//! Free-text contact template; the server parses it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_panel;
use crate::store::{is_loading, use_app_store, AppStateStoreFields};

const TEMPLATE_PLACEHOLDER: &str = "Name: John Doe
Company: Base Protocol
Position: Developer
Email: john@base.org
Priority: high";

#[component]
pub fn AddContactForm() -> impl IntoView {
    let panel = use_panel();
    let store = use_app_store();
    let loading = move || is_loading(store);
    let blank = move || store.draft().with(|d| d.trim().is_empty());

    let input_panel = panel.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // the button is disabled while loading, but Enter can still submit
        if store.in_flight().get_untracked() > 0 {
            return;
        }
        let panel = panel.clone();
        spawn_local(async move {
            let _ = panel.submit_contact().await;
        });
    };

    view! {
        <form class="add-contact-form" on:submit=submit>
            <h2>"Add New Contact"</h2>

            <label for="contact-template">"Contact Template"</label>
            <textarea
                id="contact-template"
                placeholder=TEMPLATE_PLACEHOLDER
                prop:value=move || store.draft().get()
                on:input=move |ev| input_panel.set_draft(event_target_value(&ev))
                disabled=loading
            ></textarea>

            <button type="submit" class="primary-btn" disabled=move || loading() || blank()>
                {move || if loading() { "Adding Contact..." } else { "Add Contact" }}
            </button>
            <p class="hint">"Use the same format as your Telegram bot"</p>
        </form>
    }
}
