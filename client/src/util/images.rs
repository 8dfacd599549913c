//! Vehicle image extraction.
//!
//! Records come from an API that has stored images under several field names
//! and shapes over time: a single URL string, a list of URLs, a list of
//! Cloudinary upload objects, or a bare Cloudinary public id. These helpers
//! probe those shapes in a fixed order and return HTTPS URLs only.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use serde_json::Value;

use crate::config::{IMAGE_HOST, IMAGE_TRANSFORM, cloudinary_cloud_name};

/// Record fields that may hold images, in probe order.
const IMAGE_FIELDS: [&str; 6] = ["imagenes", "images", "fotos", "imagen", "image", "imageUrl"];

/// Keys checked on an image object, in probe order.
const IMAGE_OBJECT_KEYS: [&str; 4] = ["secure_url", "url", "src", "public_id"];

/// First resolvable image URL on a record, or an empty string.
pub fn first_image_url(record: &Value) -> String {
    IMAGE_FIELDS
        .iter()
        .filter_map(|field| record.get(field))
        .find_map(|value| candidates(value).into_iter().find_map(resolve_image_url))
        .unwrap_or_default()
}

/// Every resolvable image URL on a record, deduplicated, in probe order.
pub fn image_urls(record: &Value) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for value in IMAGE_FIELDS.iter().filter_map(|field| record.get(field)) {
        for url in candidates(value).into_iter().filter_map(resolve_image_url) {
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
    }
    urls
}

/// Turn one raw image reference into a loadable URL.
///
/// HTTPS URLs and root-relative paths pass through. Plain `http://` URLs are
/// rejected. Anything else non-empty is treated as a Cloudinary public id.
pub fn resolve_image_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("https://") || (raw.starts_with('/') && !raw.starts_with("//")) {
        return Some(raw.to_owned());
    }
    if raw.contains("://") || raw.starts_with("//") {
        return None;
    }
    Some(cloudinary_url(cloudinary_cloud_name(), raw))
}

/// Delivery URL for a Cloudinary public id.
pub fn cloudinary_url(cloud_name: &str, public_id: &str) -> String {
    let public_id = public_id.trim_start_matches('/');
    format!("https://{IMAGE_HOST}/{cloud_name}/image/upload/{IMAGE_TRANSFORM}/{public_id}")
}

fn candidates(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(object_or_string).collect(),
        Value::Object(_) => object_or_string(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn object_or_string(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => IMAGE_OBJECT_KEYS
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .find(|s| !s.trim().is_empty()),
        _ => None,
    }
}
