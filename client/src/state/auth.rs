//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns a single `RwSignal<AuthState>` and provides it as context. It
//! starts out loading, which is also what the server renders, and is
//! resolved once on the client after the session is read from storage.
//! Route guards only ever read a snapshot of it.
//!
//! The guard's redirect is modeled as a transition between [`AuthPhase`]s:
//! moving into `Unauthenticated` emits one navigation command and nothing
//! else does.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::AUTH_CONFIG;

/// Token and user identity persisted on login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    /// Opaque user value as stored under `auth_user`.
    pub user: Option<String>,
}

impl AuthSession {
    /// `Authorization` header value for API requests.
    pub fn bearer(&self) -> String {
        format!("{}{}", AUTH_CONFIG.headers.bearer_prefix, self.token)
    }
}

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Finished resolving: signed in when a session is present.
    pub fn resolved(session: Option<AuthSession>) -> Self {
        Self { session, loading: false }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot { is_authenticated: self.session.is_some(), is_loading: self.loading }
    }

    pub fn phase(&self) -> AuthPhase {
        self.snapshot().phase()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Read-only view handed to components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthSnapshot {
    /// Loading wins over the authenticated flag.
    pub fn phase(self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Checking
        } else if self.is_authenticated {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Checking,
    Authenticated,
    Unauthenticated,
}

/// Side effect requested by a guard transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardCommand {
    RedirectToLogin,
}

impl GuardCommand {
    pub fn target(self) -> &'static str {
        match self {
            Self::RedirectToLogin => AUTH_CONFIG.routes.login,
        }
    }
}

/// Guard transition from the previously observed phase (`None` on first run).
///
/// Returns a redirect exactly when the phase changes into `Unauthenticated`.
pub fn guard_transition(prev: Option<AuthPhase>, next: AuthPhase) -> Option<GuardCommand> {
    if prev == Some(next) {
        return None;
    }
    match next {
        AuthPhase::Unauthenticated => Some(GuardCommand::RedirectToLogin),
        AuthPhase::Checking | AuthPhase::Authenticated => None,
    }
}
