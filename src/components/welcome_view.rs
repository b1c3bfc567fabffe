//! Welcome View Component
//!
//! The only thing a signed-out visitor sees: sign in, or launch demo mode.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::location::enter_demo_mode;

#[component]
pub fn WelcomeView() -> impl IntoView {
    let auth = use_auth();
    let signing_in = move || auth.is_loading.get();

    view! {
        <div class="welcome-page">
            <div class="welcome-card">
                <div class="brand-badge">"🌐"</div>
                <h1>"Mattrix"</h1>
                <p class="tagline">"Decentralized Conference CRM"</p>

                <div class="welcome-actions">
                    <button
                        class="primary-btn"
                        on:click=move |_| auth.sign_in()
                        disabled=signing_in
                    >
                        {move || if signing_in() { "Signing in..." } else { "🚀 Sign in with Farcaster" }}
                    </button>

                    <button class="demo-btn" on:click=move |_| enter_demo_mode()>
                        "🎯 Demo Mode (Skip Login)"
                    </button>
                </div>

                <p class="fine-print">"Demo mode uses sample data for hackathon presentation"</p>
            </div>
        </div>
    }
}
