use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub username: String,
    pub pfp_url: String,
}
