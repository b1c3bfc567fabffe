//! Aggregate statistics computed server-side per user.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_contacts: u64,
    pub high_priority: u64,
    pub medium_priority: u64,
    pub low_priority: u64,
    pub with_photos: u64,
    /// Distinct companies
    pub companies: u64,
    /// Distinct locations
    pub locations: u64,
}
