//! Panel Header Component
//!
//! Branding plus the signed-in profile or the demo badge.

use leptos::prelude::*;
use mattrix_core::SessionIdentity;

#[component]
pub fn PanelHeader(#[prop(into)] identity: Signal<SessionIdentity>) -> impl IntoView {
    view! {
        <header class="panel-header">
            <div class="brand">
                <div class="brand-badge small">"🌐"</div>
                <div>
                    <h1>"Mattrix"</h1>
                    <p class="tagline">"Decentralized CRM"</p>
                </div>
            </div>

            {move || match identity.get() {
                SessionIdentity::User(user) => view! {
                    <div class="identity">
                        <img class="avatar" src=user.pfp_url alt="Profile" width="32" height="32" />
                        <div>
                            <p class="identity-name">{user.display_name}</p>
                            <p class="identity-handle">"@" {user.username}</p>
                        </div>
                    </div>
                }.into_any(),
                SessionIdentity::DemoBadge => view! {
                    <div class="identity">
                        <div class="avatar demo-avatar">"🎯"</div>
                        <div>
                            <p class="identity-name">"Demo User"</p>
                            <p class="identity-handle">"Hackathon Mode"</p>
                        </div>
                    </div>
                }.into_any(),
                SessionIdentity::Anonymous => ().into_any(),
            }}
        </header>
    }
}
