//! `application/x-www-form-urlencoded` encoding of nested parameters.
//!
//! Nested objects flatten into bracketed keys (`legal_entity[first_name]=Jane`).
//! Sequences of scalars use empty brackets (`expand[]=a&expand[]=b`) and
//! sequences of objects use their position (`items[0][price]=p_1`). An
//! index-keyed object produced by the legacy array encoder therefore goes out
//! as `additional_owners[0][first_name]=...`, which is exactly the legacy
//! wire shape.
//!
//! Brackets are left unescaped; everything else is percent-encoded.

use serde_json::{Map, Value};

/// Encodes parameters as a form body or query string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stripe_resources::clients::form;
///
/// let params = json!({"expand": ["a", "b"], "owners": {"0": "x", "1": "y"}});
/// assert_eq!(
///     form::encode(params.as_object().unwrap()),
///     "expand[]=a&expand[]=b&owners[0]=x&owners[1]=y"
/// );
/// ```
#[must_use]
pub fn encode(params: &Map<String, Value>) -> String {
    flatten_pairs(params)
        .iter()
        .map(|(key, value)| format!("{}={}", encode_key(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Flattens a nested value into `(key, value)` pairs.
///
/// Nulls and empty sequences become an empty string, which the API reads as
/// "unset this field".
#[must_use]
pub fn flatten_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => out.push((key, String::new())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) if items.is_empty() => out.push((key, String::new())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_object() {
                    flatten(format!("{key}[{index}]"), item, out);
                } else {
                    flatten(format!("{key}[]"), item, out);
                }
            }
        }
        Value::Object(map) => {
            for (sub_key, sub_value) in map {
                flatten(format!("{key}[{sub_key}]"), sub_value, out);
            }
        }
    }
}

fn encode_key(key: &str) -> String {
    urlencoding::encode(key)
        .replace("%5B", "[")
        .replace("%5D", "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode_json(value: &Value) -> String {
        encode(value.as_object().unwrap())
    }

    #[test]
    fn test_encodes_scalars() {
        let params = json!({"email": "jane@example.com", "count": 2, "active": true});
        assert_eq!(
            encode_json(&params),
            "active=true&count=2&email=jane%40example.com"
        );
    }

    #[test]
    fn test_encodes_nested_objects_with_brackets() {
        let params = json!({"legal_entity": {"address": {"city": "Paris"}}});
        assert_eq!(encode_json(&params), "legal_entity[address][city]=Paris");
    }

    #[test]
    fn test_index_keyed_map_encodes_as_legacy_array() {
        let params = json!({
            "legal_entity": {"additional_owners": {"0": {"first_name": "A"}, "1": {"first_name": "B"}}}
        });
        assert_eq!(
            encode_json(&params),
            "legal_entity[additional_owners][0][first_name]=A&legal_entity[additional_owners][1][first_name]=B"
        );
    }

    #[test]
    fn test_scalar_sequences_use_empty_brackets() {
        let params = json!({"expand": ["individual", "external_accounts"]});
        assert_eq!(
            encode_json(&params),
            "expand[]=individual&expand[]=external_accounts"
        );
    }

    #[test]
    fn test_object_sequences_use_positions() {
        let params = json!({"items": [{"price": "p_1"}, {"price": "p_2"}]});
        assert_eq!(
            encode_json(&params),
            "items[0][price]=p_1&items[1][price]=p_2"
        );
    }

    #[test]
    fn test_null_and_empty_sequence_encode_as_empty_string() {
        let params = json!({"additional_owners": "", "tags": [], "nickname": null});
        assert_eq!(
            flatten_pairs(params.as_object().unwrap()),
            vec![
                ("additional_owners".to_string(), String::new()),
                ("nickname".to_string(), String::new()),
                ("tags".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_percent_encodes_values_and_keys() {
        let params = json!({"metadata": {"a b": "c&d"}});
        assert_eq!(encode_json(&params), "metadata[a%20b]=c%26d");
    }
}
