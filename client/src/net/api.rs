//! REST API helpers for communicating with the dealership backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! the configured timeout. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`], since resources only fetch in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Reads are retried a fixed
//! number of times when the failure is transient (network, timeout, 5xx);
//! pages render the final error through an `Alert` instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde_json::Value;

use super::types::Condition;
use crate::state::auth::AuthSession;
use crate::validation::login::LoginCredentials;

/// Vehicle collection path on the backend.
pub const VEHICLES_PATH: &str = "/autos";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("API is not reachable during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::Unavailable => false,
        }
    }

    /// The backend rejected the bearer token or the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// Message for a failed `login` call.
    pub fn login_message(&self) -> String {
        if self.is_unauthorized() {
            "Usuario o contraseña incorrectos".to_owned()
        } else {
            self.user_message()
        }
    }

    /// Message suitable for showing in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { status: 401 | 403, .. } => "Tu sesión expiró. Volvé a ingresar.".to_owned(),
            Self::Status { status: 404, .. } => "No encontramos lo que buscabas".to_owned(),
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Timeout(_) => "El servidor tardó demasiado en responder".to_owned(),
            Self::Network(_) | Self::Unavailable => "No pudimos conectarnos con el servidor".to_owned(),
            Self::Status { .. } | Self::Decode(_) => "Ocurrió un error inesperado".to_owned(),
        }
    }
}

/// Run `op`, retrying transient failures up to `retries` extra times.
///
/// # Errors
///
/// Returns the last error once it is not retryable or the budget is spent.
pub async fn with_retry<T, F, Fut>(retries: u32, mut op: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut remaining = retries;
    loop {
        match op().await {
            Err(e) if e.is_retryable() && remaining > 0 => {
                remaining -= 1;
                leptos::logging::warn!("API request failed, retrying ({remaining} left): {e}");
            }
            result => return result,
        }
    }
}

/// Pull a human message out of an error body (`message`, `error`, or `msg`).
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        return ["message", "error", "msg"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_owned);
    }
    (body.len() <= 200 && !body.starts_with('<')).then(|| body.to_owned())
}

/// Percent-encode a value for use as a single path segment.
pub fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Listing URL path for a condition.
pub fn vehicles_path(condition: Condition) -> String {
    format!("{VEHICLES_PATH}?condicion={}", condition.query_value())
}

pub fn vehicle_path(id: &str) -> String {
    format!("{VEHICLES_PATH}/{}", encode_path_segment(id))
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Exchange credentials for a session via `POST /user/loginuser`.
///
/// Not retried: a failed login is reported straight back to the form.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body lacks a token.
pub async fn login(credentials: &LoginCredentials) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::config::{AUTH_CONFIG, ApiConfig};
        use crate::net::types::LoginResponse;

        let config = ApiConfig::from_build_env();
        let request = gloo_net::http::Request::post(&config.url(AUTH_CONFIG.endpoints.login))
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = hydrate_impl::send(request.send(), config.timeout_ms).await?;
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.into_session())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Public stock for one condition.
///
/// # Errors
///
/// Returns an [`ApiError`] once retries are exhausted.
pub async fn fetch_vehicles(condition: Condition) -> Result<Vec<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = hydrate_impl::get_json(&vehicles_path(condition), None).await?;
        Ok(crate::util::admin_rows::extract_vehicle_list(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = condition;
        Err(ApiError::Unavailable)
    }
}

/// One vehicle record by id.
///
/// # Errors
///
/// Returns an [`ApiError`] once retries are exhausted.
pub async fn fetch_vehicle(id: String) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = hydrate_impl::get_json(&vehicle_path(&id), None).await?;
        Ok(crate::net::types::unwrap_vehicle(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Full stock for the admin dashboard, authorized with the session token.
///
/// # Errors
///
/// Returns an [`ApiError`] once retries are exhausted.
pub async fn fetch_admin_vehicles(session: AuthSession) -> Result<Vec<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = hydrate_impl::get_json(VEHICLES_PATH, Some(&session)).await?;
        Ok(crate::util::admin_rows::extract_vehicle_list(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Delete a vehicle. Not retried.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend refuses or cannot be reached.
pub async fn delete_vehicle(session: AuthSession, id: String) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::config::{AUTH_CONFIG, ApiConfig};

        let config = ApiConfig::from_build_env();
        let request = gloo_net::http::Request::delete(&config.url(&vehicle_path(&id)))
            .header(AUTH_CONFIG.headers.authorization, &session.bearer());
        hydrate_impl::send(request.send(), config.timeout_ms).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
mod hydrate_impl {
    use std::future::Future;
    use std::time::Duration;

    use futures::future::{Either, select};
    use gloo_net::http::{Request, Response};
    use serde_json::Value;

    use super::{ApiError, error_message, with_retry};
    use crate::config::{AUTH_CONFIG, ApiConfig};
    use crate::state::auth::AuthSession;

    /// Await a request, racing it against the timeout, and reject non-2xx.
    pub(super) async fn send<F>(request: F, timeout_ms: u64) -> Result<Response, ApiError>
    where
        F: Future<Output = Result<Response, gloo_net::Error>>,
    {
        let timer = gloo_timers::future::sleep(Duration::from_millis(timeout_ms));
        let resp = match select(Box::pin(request), Box::pin(timer)).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(((), _)) => return Err(ApiError::Timeout(timeout_ms)),
        };
        if !resp.ok() {
            let message = resp.text().await.ok().as_deref().and_then(error_message);
            return Err(ApiError::Status { status: resp.status(), message });
        }
        Ok(resp)
    }

    /// GET a JSON body with the read retry budget.
    pub(super) async fn get_json(path: &str, session: Option<&AuthSession>) -> Result<Value, ApiError> {
        let config = ApiConfig::from_build_env();
        let url = config.url(path);
        let timeout_ms = config.timeout_ms;
        let bearer = session.map(AuthSession::bearer);
        with_retry(config.retry_attempts, || {
            let mut request = Request::get(&url);
            if let Some(bearer) = &bearer {
                request = request.header(AUTH_CONFIG.headers.authorization, bearer);
            }
            async move {
                let resp = send(request.send(), timeout_ms).await?;
                resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))
            }
        })
        .await
    }
}
