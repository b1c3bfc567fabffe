//! Mattrix Frontend Entry Point

mod app;
mod auth;
mod components;
mod context;
mod head;
mod location;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use mattrix_core::{CrmConfig, PageMetadata};
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();

    let config = CrmConfig::from_build_env().unwrap_or_else(|e| {
        warn!("{}, falling back to default configuration", e);
        CrmConfig::default()
    });
    head::apply_page_metadata(&PageMetadata::for_app(&config));

    let launch = location::launch_mode();
    info!("mounting Mattrix panel ({:?}, api {})", launch, config.api_base);

    mount_to_body(move || view! { <App config=config launch=launch /> });
}
