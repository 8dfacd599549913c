//! Static configuration shared by the client and the server middleware.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AUTH_CONFIG` is the single place that names API endpoints, storage keys,
//! route paths, and header names for the admin auth flow. The server crate
//! reads the same values so the middleware and the guard agree on which
//! paths are protected.
//!
//! Deployment-specific values (`API_BASE_URL`, `API_TIMEOUT_MS`,
//! `CLOUDINARY_CLOUD_NAME`, `ANALYTICS_ID`) are captured at build time with
//! `option_env!`, since the WASM bundle has no process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend endpoints used by the auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: &'static str,
}

/// Persistent client storage keys holding the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: &'static str,
    pub user: &'static str,
}

/// Route paths the auth flow navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRoutes {
    pub login: &'static str,
    pub dashboard: &'static str,
    pub home: &'static str,
    /// Every path under this prefix (except `login`) is an admin route.
    pub admin_prefix: &'static str,
}

/// Header names used on requests and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthHeaders {
    pub require_auth: &'static str,
    pub authorization: &'static str,
    pub bearer_prefix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    pub endpoints: AuthEndpoints,
    pub storage: StorageKeys,
    pub routes: AuthRoutes,
    pub headers: AuthHeaders,
}

pub const AUTH_CONFIG: AuthConfig = AuthConfig {
    endpoints: AuthEndpoints { login: "/user/loginuser" },
    storage: StorageKeys { token: "auth_token", user: "auth_user" },
    routes: AuthRoutes { login: "/admin/login", dashboard: "/admin", home: "/", admin_prefix: "/admin" },
    headers: AuthHeaders { require_auth: "x-require-auth", authorization: "Authorization", bearer_prefix: "Bearer " },
};

// =============================================================================
// API
// =============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
/// Extra attempts granted to idempotent reads after the first failure.
pub const API_RETRY_ATTEMPTS: u32 = 2;

/// Backend API location and request limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub retry_attempts: u32,
}

impl ApiConfig {
    /// Build from the values captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("API_BASE_URL"), option_env!("API_TIMEOUT_MS"))
    }

    /// Build from raw values, falling back to defaults for absent or invalid input.
    pub fn from_values(base_url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url, timeout_ms: parse_timeout_ms(timeout_ms), retry_attempts: API_RETRY_ATTEMPTS }
    }

    /// Absolute URL for an API path such as `/autos`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

pub(crate) fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_API_TIMEOUT_MS)
}

// =============================================================================
// IMAGES
// =============================================================================

/// Only host remote vehicle images are loaded from.
pub const IMAGE_HOST: &str = "res.cloudinary.com";
/// Delivery transformation: pick a modern format and automatic quality.
pub const IMAGE_TRANSFORM: &str = "f_auto,q_auto";
/// One year; fetched images and hashed assets are never invalidated by us.
pub const IMAGE_CACHE_TTL_SECS: u64 = 31_536_000;
pub const DEFAULT_CLOUDINARY_CLOUD_NAME: &str = "autos";

/// Cloudinary account used to resolve bare public ids.
pub fn cloudinary_cloud_name() -> &'static str {
    match option_env!("CLOUDINARY_CLOUD_NAME") {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_CLOUDINARY_CLOUD_NAME,
    }
}

/// Analytics measurement id, if analytics should be loaded at all.
pub fn analytics_id() -> Option<&'static str> {
    option_env!("ANALYTICS_ID").filter(|id| !id.trim().is_empty())
}
