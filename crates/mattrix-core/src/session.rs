//! Session Gate
//!
//! Decides between the signed-out welcome view, demo mode and an
//! authenticated session. Demo mode is an explicit launch input rather
//! than ambient location state, so resolution stays a pure function.

use crate::config::CrmConfig;
use crate::domain::UserProfile;

/// URL fragment that launches the panel in demo mode
pub const DEMO_FRAGMENT: &str = "#demo-mode";

/// How the page was launched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    Standard,
    Demo,
}

impl LaunchMode {
    /// Accepts the fragment with or without its leading `#`.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.trim();
        let bare = DEMO_FRAGMENT.trim_start_matches('#');
        if fragment == DEMO_FRAGMENT || fragment == bare {
            LaunchMode::Demo
        } else {
            LaunchMode::Standard
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, LaunchMode::Demo)
    }
}

/// Observable state of the external sign-in collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_loading: bool,
    pub is_signed_in: bool,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    SignedOut,
    Demo,
    Authenticated,
}

impl SessionMode {
    /// A real sign-in wins over the demo marker.
    pub fn resolve(auth: &AuthSnapshot, launch: LaunchMode) -> Self {
        if auth.is_signed_in {
            SessionMode::Authenticated
        } else if launch.is_demo() {
            SessionMode::Demo
        } else {
            SessionMode::SignedOut
        }
    }

    /// Whether data may be fetched in this mode
    pub fn is_active(&self) -> bool {
        !matches!(self, SessionMode::SignedOut)
    }

    /// Identifier keyed into every API call; none while signed out.
    pub fn user_id<'a>(&self, config: &'a CrmConfig) -> Option<&'a str> {
        self.is_active().then_some(config.demo_user_id.as_str())
    }

    /// Identity shown in the panel header
    pub fn identity(&self, auth: &AuthSnapshot) -> SessionIdentity {
        match (self, &auth.user) {
            (SessionMode::SignedOut, _) => SessionIdentity::Anonymous,
            (_, Some(user)) => SessionIdentity::User(user.clone()),
            (SessionMode::Demo, None) => SessionIdentity::DemoBadge,
            (SessionMode::Authenticated, None) => SessionIdentity::Anonymous,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdentity {
    User(UserProfile),
    DemoBadge,
    Anonymous,
}

/// Remembers the last observed mode so the initial sync fires once per
/// transition into an active session.
#[derive(Debug, Clone, Copy)]
pub struct SessionGate {
    last: SessionMode,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self {
            last: SessionMode::SignedOut,
        }
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SessionMode {
        self.last
    }

    /// Record `mode`; true when the panel just became active.
    pub fn observe(&mut self, mode: SessionMode) -> bool {
        let activated = !self.last.is_active() && mode.is_active();
        self.last = mode;
        activated
    }
}
