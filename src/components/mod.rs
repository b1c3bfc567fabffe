//! UI Components
//!
//! Leptos components of the contacts panel.

mod add_contact_form;
mod contact_card;
mod contact_list;
mod panel_header;
mod stat_card;
mod stats_view;
mod tab_bar;
mod welcome_view;

pub use add_contact_form::AddContactForm;
pub use contact_card::ContactCard;
pub use contact_list::ContactList;
pub use panel_header::PanelHeader;
pub use stat_card::StatCard;
pub use stats_view::StatsView;
pub use tab_bar::TabBar;
pub use welcome_view::WelcomeView;
