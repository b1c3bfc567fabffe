//! Domain Layer
//!
//! Records owned by the remote CRM API. The client only holds read-only
//! snapshots of them, replaced wholesale on every fetch.

mod contact;
mod envelope;
mod profile;
mod stats;

pub use contact::{Contact, Priority};
pub use envelope::ApiEnvelope;
pub use profile::UserProfile;
pub use stats::Stats;
