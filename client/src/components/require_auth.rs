//! Route guard for admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server middleware only tags admin responses; it cannot see the token,
//! which lives in `localStorage`. This component is where the check really
//! happens, in the browser, after the auth owner has read storage.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthPhase;
use crate::util::auth::{install_unauth_redirect, use_auth};

/// Render `children` only for an authenticated viewer.
///
/// - `Checking`: centered "verifying" placeholder, no redirect.
/// - `Unauthenticated`: nothing, plus one redirect to the login route.
/// - `Authenticated`: the children, unchanged.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth, use_navigate());

    move || match auth.get().phase() {
        AuthPhase::Checking => view! { <VerifyingPlaceholder/> }.into_any(),
        AuthPhase::Unauthenticated => ().into_any(),
        AuthPhase::Authenticated => children().into_any(),
    }
}

#[component]
fn VerifyingPlaceholder() -> impl IntoView {
    view! {
        <div class="auth-guard auth-guard--checking" aria-busy="true">
            <div class="auth-guard__spinner"></div>
            <p>"Verificando autenticación..."</p>
        </div>
    }
}
