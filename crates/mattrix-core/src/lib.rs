//! Mattrix Core
//!
//! Target-independent core of the contacts panel:
//! - domain: Contact, Stats and envelope types shared with the remote API
//! - api: the `CrmApi` seam and its HTTP implementation
//! - session: session gate (signed-out / demo / authenticated)
//! - tabs: tab view router
//! - panel: data synchronizer and mutation dispatcher

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod metadata;
pub mod panel;
pub mod session;
pub mod tabs;

pub use api::{CrmApi, HttpCrmApi};
pub use config::CrmConfig;
pub use domain::{ApiEnvelope, Contact, Priority, Stats, UserProfile};
pub use error::{CrmError, CrmResult};
pub use metadata::PageMetadata;
pub use panel::{ContactsPanel, MemoryStore, PanelSnapshot, PanelStore, SubmitOutcome};
pub use session::{AuthSnapshot, LaunchMode, SessionGate, SessionIdentity, SessionMode, DEMO_FRAGMENT};
pub use tabs::{Tab, TabEvent};
