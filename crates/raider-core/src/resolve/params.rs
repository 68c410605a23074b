//! Query-string encoding for the `params` group.

use serde_json::{Map, Value};
use url::form_urlencoded::byte_serialize;

/// Encode resolved params as `k=v&k2=v2`.
///
/// Spaces become `%20` (never `+`) and `/` is left as is. Non-string
/// values are rendered as JSON text.
pub fn encode_params(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}={}", quote(k), quote(&value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// `byte_serialize` escapes a literal `+` as `%2B`, so every `+` it emits
/// stands for a space.
fn quote(s: &str) -> String {
    byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace("%2F", "/")
}
