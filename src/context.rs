//! Application Context
//!
//! The panel handle shared with every tab via the Leptos Context API.

use leptos::prelude::*;
use mattrix_core::{ContactsPanel, HttpCrmApi};

use crate::store::PanelSignals;

/// Panel bound to the HTTP API and the reactive store
pub type Panel = ContactsPanel<HttpCrmApi, PanelSignals>;

/// Get the panel from context
pub fn use_panel() -> Panel {
    use_context::<Panel>().expect("Panel should be provided")
}
