//! Launch fragment handling
//!
//! The fragment is read once at startup and handed to `App` as an explicit
//! `LaunchMode`; nothing else looks at `window.location`.

use mattrix_core::{LaunchMode, DEMO_FRAGMENT};
use tracing::warn;

pub fn launch_mode() -> LaunchMode {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| LaunchMode::from_fragment(&hash))
        .unwrap_or_default()
}

/// Mark the URL for demo mode and reload so the page starts over in it.
pub fn enter_demo_mode() {
    let Some(window) = web_sys::window() else {
        warn!("no window, cannot enter demo mode");
        return;
    };
    let location = window.location();
    if let Err(e) = location.set_hash(DEMO_FRAGMENT) {
        warn!("failed to set demo fragment: {:?}", e);
        return;
    }
    if let Err(e) = location.reload() {
        warn!("failed to reload into demo mode: {:?}", e);
    }
}
