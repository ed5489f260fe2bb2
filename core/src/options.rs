//! Layered request configuration and its merge rules.
//!
//! # Design
//! Instead of a generic deep merge over untyped maps, options have a fixed
//! shape and [`RequestOptions::merged_with`] defines the merge per field:
//! headers combine key-wise with the overlay winning on conflicts (names
//! compared case-insensitively), `data` objects merge recursively. The HTTP
//! method is not part of the options at all — it is fixed by the entry point
//! used, so no configuration layer can redirect a call to a different
//! method.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Per-call or client-wide request options.
///
/// Used both as `AjaxClient::common_options` and as the per-call overlay.
/// Deserializable so client-wide defaults can be loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    /// Headers overlaid on the base `Content-Type: application/json` set.
    pub headers: BTreeMap<String, String>,

    /// Request payload. Routed to the query string for GET, to a JSON body
    /// for every other method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl RequestOptions {
    /// Overlay `other` on top of `self`, later layer winning.
    ///
    /// Headers merge key-wise with names compared case-insensitively, the
    /// overlay's spelling winning. `data` objects merge recursively: nested
    /// objects combine key-by-key, any other value is replaced by the
    /// overlay's.
    pub fn merged_with(&self, other: &RequestOptions) -> RequestOptions {
        let mut headers = self.headers.clone();
        overlay_headers(&mut headers, &other.headers);

        let data = match (&self.data, &other.data) {
            (Some(base), Some(over)) => Some(merge_objects(base, over)),
            (base, over) => over.clone().or_else(|| base.clone()),
        };

        RequestOptions { headers, data }
    }
}

/// Overlay headers onto `base`. HTTP header names are case-insensitive, so
/// an overlay entry evicts any existing entry whose name differs only in
/// case; the overlay's spelling is kept.
pub(crate) fn overlay_headers(
    base: &mut BTreeMap<String, String>,
    overlay: &BTreeMap<String, String>,
) {
    for (name, value) in overlay {
        base.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        base.insert(name.clone(), value.clone());
    }
}

/// Recursively merge two JSON objects, the overlay winning on conflicts
/// unless both sides hold an object, in which case they merge key-by-key.
pub(crate) fn merge_objects(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let combined = match (merged.get(key), value) {
            (Some(Value::Object(base_child)), Value::Object(overlay_child)) => {
                Value::Object(merge_objects(base_child, overlay_child))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), combined);
    }
    merged
}
