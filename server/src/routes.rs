//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR pages, the hashed WASM/CSS bundle
//! under `/pkg`, and `/healthz`. Every response passes through
//! `middleware::mark_admin_routes` so admin pages carry the auth marker.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use client::config::IMAGE_CACHE_TTL_SECS;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::middleware::mark_admin_routes;

/// Full application: Leptos SSR routes, static assets, health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app() -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root_path.display(), "serving leptos site");

    Ok(with_layers(
        base_routes()
            .merge(leptos_router)
            .merge(asset_routes(site_root_path.join("pkg"))),
    ))
}

/// Routes that do not depend on the Leptos build.
pub(crate) fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Static bundle. File names carry a content hash (`hash-files` in the
/// leptos metadata), so successful responses are cached for a year; errors
/// are never stamped.
pub(crate) fn asset_routes(pkg_dir: PathBuf) -> Router {
    Router::new()
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(SetResponseHeaderLayer::if_not_present(header::CACHE_CONTROL, cache_successful_assets))
}

fn cache_successful_assets(response: &Response) -> Option<HeaderValue> {
    response.status().is_success().then(asset_cache_control)
}

/// Cross-cutting layers applied to every route.
pub(crate) fn with_layers(router: Router) -> Router {
    router
        .layer(axum::middleware::from_fn(mark_admin_routes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub(crate) fn asset_cache_control() -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={IMAGE_CACHE_TTL_SECS}, immutable"))
        .unwrap_or_else(|_| HeaderValue::from_static("public, max-age=31536000, immutable"))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
