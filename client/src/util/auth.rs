//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the single owner of `RwSignal<AuthState>`; everything else reads
//! it through [`use_auth`] or changes it through [`complete_login`] and
//! [`sign_out`], which keep `localStorage` and the signal in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::AUTH_CONFIG;
use crate::state::auth::{AuthPhase, AuthSession, AuthSnapshot, AuthState, guard_transition};
use crate::util::storage::{BrowserStorage, clear_session, load_session, save_session};

/// Read-only auth snapshot from context.
pub fn use_auth() -> Signal<AuthSnapshot> {
    let auth = expect_context::<RwSignal<AuthState>>();
    Signal::derive(move || auth.get().snapshot())
}

/// Resolve the stored session once the app has mounted in the browser.
///
/// Effects do not run during SSR, so the server always renders the loading
/// state and the token is only ever read on the client.
pub fn init_auth(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        let session = load_session(&BrowserStorage);
        leptos::logging::log!("auth resolved: signed_in={}", session.is_some());
        auth.set(AuthState::resolved(session));
    });
}

/// Persist a fresh session and mark the viewer signed in.
pub fn complete_login(auth: RwSignal<AuthState>, session: AuthSession) {
    save_session(&BrowserStorage, &session);
    auth.set(AuthState::resolved(Some(session)));
}

/// Drop the stored session and mark the viewer signed out.
pub fn sign_out(auth: RwSignal<AuthState>) {
    clear_session(&BrowserStorage);
    auth.set(AuthState::resolved(None));
}

/// Sign out after the backend rejected the stored token.
///
/// No-op when already signed out, so callers reacting to a 401 cannot loop.
pub fn expire_session(auth: RwSignal<AuthState>) {
    if auth.with_untracked(|state| state.session.is_some()) {
        leptos::logging::warn!("session rejected by the API, signing out");
        sign_out(auth);
    }
}

/// Navigate to the dashboard whenever the phase changes into
/// `Authenticated`, both for an existing session and right after login.
pub fn install_signed_in_redirect<F>(snapshot: Signal<AuthSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |prev: Option<AuthPhase>| {
        let phase = snapshot.get().phase();
        if phase == AuthPhase::Authenticated && prev != Some(phase) {
            navigate(AUTH_CONFIG.routes.dashboard, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        phase
    });
}

/// Navigate to the login route whenever the phase changes into
/// `Unauthenticated`. One redirect per transition, never while checking.
pub fn install_unauth_redirect<F>(snapshot: Signal<AuthSnapshot>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |prev: Option<AuthPhase>| {
        let phase = snapshot.get().phase();
        if let Some(command) = guard_transition(prev, phase) {
            navigate(command.target(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        phase
    });
}
