//! Sign-in Binding
//!
//! The identity provider is an external script that exposes
//! `window.__MATTRIX_AUTH__.signIn()`, a Promise resolving to the user's
//! profile. `AuthContext` mirrors its state in signals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mattrix_core::{AuthSnapshot, UserProfile};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Global the identity provider installs itself under
const AUTH_PROVIDER_KEY: &str = "__MATTRIX_AUTH__";

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub is_loading: RwSignal<bool>,
    pub is_signed_in: RwSignal<bool>,
    pub user: RwSignal<Option<UserProfile>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            is_loading: RwSignal::new(false),
            is_signed_in: RwSignal::new(false),
            user: RwSignal::new(None),
        }
    }

    /// Tracked read of the whole auth state
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            is_loading: self.is_loading.get(),
            is_signed_in: self.is_signed_in.get(),
            user: self.user.get(),
        }
    }

    /// Ask the provider to sign in. Failures are logged, never retried.
    pub fn sign_in(&self) {
        if self.is_loading.get_untracked() || self.is_signed_in.get_untracked() {
            return;
        }
        let auth = *self;
        auth.is_loading.set(true);
        spawn_local(async move {
            match request_sign_in().await {
                Ok(user) => {
                    info!("signed in as @{}", user.username);
                    auth.user.set(Some(user));
                    auth.is_signed_in.set(true);
                }
                Err(e) => warn!("sign-in failed: {}", e),
            }
            auth.is_loading.set(false);
        });
    }
}

/// Get the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

async fn request_sign_in() -> Result<UserProfile, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let provider = js_sys::Reflect::get(&window, &JsValue::from_str(AUTH_PROVIDER_KEY)).map_err(js_error)?;
    if provider.is_undefined() || provider.is_null() {
        return Err(format!("identity provider {} is not installed", AUTH_PROVIDER_KEY));
    }

    let sign_in: js_sys::Function = js_sys::Reflect::get(&provider, &JsValue::from_str("signIn"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| "signIn is not a function".to_string())?;

    let pending = sign_in.call0(&provider).map_err(js_error)?;
    let result = JsFuture::from(js_sys::Promise::resolve(&pending)).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("unexpected profile: {}", e))
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
