//! Wire-level types exchanged with the dealership API.
//!
//! Vehicle records stay as `serde_json::Value`; the backend does not commit
//! to a schema and `util::admin_rows` normalizes them at render time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::Value;

use crate::state::auth::AuthSession;

/// New or used stock. Selects both the public route and the API filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    /// Value of the `condicion` query parameter.
    pub fn query_value(self) -> &'static str {
        match self {
            Self::New => "nuevo",
            Self::Used => "usado",
        }
    }

    /// Public listing route.
    pub fn path(self) -> &'static str {
        match self {
            Self::New => "/nuevos",
            Self::Used => "/usados",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::New => "Autos 0km",
            Self::Used => "Autos usados",
        }
    }

    /// Detail route for a vehicle id.
    pub fn detail_path(self, id: &str) -> String {
        format!("{}/{id}", self.path())
    }
}

/// Body returned by `POST /user/loginuser`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(default, alias = "usuario")]
    pub user: Option<Value>,
}

impl LoginResponse {
    /// Session to persist. Non-string user payloads are stored as JSON text.
    pub fn into_session(self) -> AuthSession {
        let user = match self.user {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        AuthSession { token: self.token, user }
    }
}

/// Unwrap a single-vehicle response that may be nested under a key.
pub fn unwrap_vehicle(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            for key in ["auto", "vehicle", "data"] {
                if matches!(map.get(key), Some(Value::Object(_))) {
                    if let Some(inner) = map.remove(key) {
                        return inner;
                    }
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}
