//! Admin list row mapping.
//!
//! DESIGN
//! ======
//! Vehicle records from the API are loosely shaped: the same datum shows up
//! as `anio`, `año`, or `year` depending on which form created the record.
//! Each output field therefore names an ordered list of candidate keys; the
//! first key that is present and non-null wins, and the value is coerced to
//! the field's type with a typed default. Mapping never fails.

#[cfg(test)]
#[path = "admin_rows_test.rs"]
mod admin_rows_test;

use serde::Serialize;
use serde_json::Value;

use super::images::first_image_url;

pub const ID_KEYS: &[&str] = &["_id", "id"];
pub const YEAR_KEYS: &[&str] = &["anio", "año", "year"];
pub const DISTANCE_KEYS: &[&str] = &["kilometraje", "kms", "kilometers"];
pub const PRICE_KEYS: &[&str] = &["precio", "price"];

/// Render-ready shape of one vehicle in the admin list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdminRow {
    pub id: Option<String>,
    pub marca: String,
    pub modelo: String,
    pub version: String,
    pub anio: String,
    pub kilometraje: f64,
    pub precio: f64,
    #[serde(rename = "firstImageUrl")]
    pub first_image_url: String,
    /// Unmodified input, kept for edit/delete operations on the full record.
    #[serde(rename = "_original")]
    pub original: Value,
}

impl AdminRow {
    /// `"Marca Modelo Version"` with empty parts dropped.
    pub fn title(&self) -> String {
        [self.marca.as_str(), self.modelo.as_str(), self.version.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Normalize one raw vehicle record.
pub fn to_admin_row(record: &Value) -> AdminRow {
    AdminRow {
        id: resolve(record, ID_KEYS).and_then(coerce_id),
        marca: resolve_string(record, &["marca"]),
        modelo: resolve_string(record, &["modelo"]),
        version: resolve_string(record, &["version"]),
        anio: resolve_string(record, YEAR_KEYS),
        kilometraje: resolve_number(record, DISTANCE_KEYS),
        precio: resolve_number(record, PRICE_KEYS),
        first_image_url: first_image_url(record),
        original: record.clone(),
    }
}

pub fn to_admin_rows(records: &[Value]) -> Vec<AdminRow> {
    records.iter().map(to_admin_row).collect()
}

/// First candidate key that is present and not `null`.
pub fn resolve<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| record.get(key)).find(|value| !value.is_null())
}

/// Resolve and coerce to a trimmed string; empty when nothing usable.
pub fn resolve_string(record: &Value, keys: &[&str]) -> String {
    resolve(record, keys).map(coerce_string).unwrap_or_default()
}

/// Resolve and coerce to a finite number; `0.0` when nothing usable.
pub fn resolve_number(record: &Value, keys: &[&str]) -> f64 {
    resolve(record, keys).map_or(0.0, coerce_number)
}

pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse::<f64>().unwrap_or(0.0) }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Pull the vehicle array out of a list response.
///
/// Accepts a bare array or an object wrapping one under a common key.
pub fn extract_vehicle_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => ["autos", "vehicles", "data", "items"]
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
