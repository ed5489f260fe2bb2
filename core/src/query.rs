//! Bracket-style query-string encoding for request data.
//!
//! # Design
//! Encodes a JSON object into the `a=1&b%5Bc%5D=2&d%5B0%5D=3` shape used by
//! bracket-style decoders (`b[c]` and `d[0]` before percent-encoding), so
//! nested objects and indexed arrays survive a round trip through the URL.
//! Keys and values are percent-encoded with the `urlencoding` crate; only
//! the bracket recursion lives here.

use serde_json::{Map, Value};

/// Encode `data` as a query string, without the leading `?`.
///
/// Returns an empty string for an empty map.
pub fn encode(data: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in data {
        push_pairs(key.clone(), value, &mut pairs);
    }
    pairs.join("&")
}

fn push_pairs(key: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                push_pairs(format!("{key}[{child}]"), value, pairs);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                push_pairs(format!("{key}[{index}]"), value, pairs);
            }
        }
        Value::String(s) => pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(s)
        )),
        // Null encodes as a bare key, matching qs-style encoders.
        Value::Null => pairs.push(format!("{}=", urlencoding::encode(&key))),
        // Numbers and booleans display as URL-safe text already.
        other => pairs.push(format!("{}={}", urlencoding::encode(&key), other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn flat_scalars() {
        let q = encode(&data(r#"{"page": 2, "q": "milk", "done": true}"#));
        assert_eq!(q, "done=true&page=2&q=milk");
    }

    #[test]
    fn nested_objects_use_brackets() {
        let q = encode(&data(r#"{"filter": {"name": "ada"}}"#));
        assert_eq!(q, "filter%5Bname%5D=ada");
    }

    #[test]
    fn arrays_are_indexed() {
        let q = encode(&data(r#"{"tags": ["a", "b"]}"#));
        assert_eq!(q, "tags%5B0%5D=a&tags%5B1%5D=b");
    }

    #[test]
    fn deep_nesting() {
        let q = encode(&data(r#"{"a": {"b": {"c": 1}}}"#));
        assert_eq!(q, "a%5Bb%5D%5Bc%5D=1");
    }

    #[test]
    fn values_are_percent_encoded() {
        let q = encode(&data(r#"{"q": "a b&c"}"#));
        assert_eq!(q, "q=a%20b%26c");
    }

    #[test]
    fn null_encodes_as_bare_key() {
        let q = encode(&data(r#"{"cursor": null}"#));
        assert_eq!(q, "cursor=");
    }

    #[test]
    fn empty_map_encodes_to_empty_string() {
        assert_eq!(encode(&Map::new()), "");
    }
}
