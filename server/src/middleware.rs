//! Admin route tagging.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token lives in browser storage, so the server cannot decide
//! whether a request is authenticated. This layer only marks responses for
//! admin paths with `x-require-auth: true`; the `RequireAuth` guard in the
//! client performs the actual check after hydration.
//!
//! TRUST BOUNDARY
//! ==============
//! The marker is advisory. Nothing here blocks a request, and admin HTML is
//! served to anyone. Admin data stays protected only because the backend
//! API requires the bearer token.

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use client::config::AUTH_CONFIG;

/// Admin paths other than the login page carry the marker header.
pub fn requires_auth_marker(path: &str) -> bool {
    let routes = AUTH_CONFIG.routes;
    path.starts_with(routes.admin_prefix) && !path.starts_with(routes.login)
}

/// Pass the request through and tag the response for admin paths.
pub async fn mark_admin_routes(request: Request, next: Next) -> Response {
    let marked = requires_auth_marker(request.uri().path());
    if marked {
        tracing::debug!(path = %request.uri().path(), "tagging admin route");
    }

    let mut response = next.run(request).await;
    if marked {
        response.headers_mut().insert(
            HeaderName::from_static(AUTH_CONFIG.headers.require_auth),
            HeaderValue::from_static("true"),
        );
    }
    response
}
