//! Lenient decoders for fields the backend stores as text.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawList {
    Items(Vec<String>),
    Text(String),
}

/// A string list sent as an array, a JSON-encoded array, or a
/// comma-separated string. `null` and `""` decode to an empty list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(RawList::Items(items)) => items,
        Some(RawList::Text(text)) => split_text(&text),
    })
}

fn split_text(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.starts_with('[')
        && let Ok(items) = serde_json::from_str::<Vec<String>>(text)
    {
        return items;
    }
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    fn tags(value: serde_json::Value) -> Vec<String> {
        serde_json::from_value::<Tagged>(value).unwrap().tags
    }

    #[test]
    fn test_accepts_every_encoding() {
        assert_eq!(tags(json!({"tags": ["rust", "wasm"]})), ["rust", "wasm"]);
        assert_eq!(tags(json!({"tags": "[\"rust\",\"wasm\"]"})), ["rust", "wasm"]);
        assert_eq!(tags(json!({"tags": "rust, wasm"})), ["rust", "wasm"]);
    }

    #[test]
    fn test_empty_forms() {
        assert!(tags(json!({"tags": ""})).is_empty());
        assert!(tags(json!({"tags": null})).is_empty());
        assert!(tags(json!({})).is_empty());
    }
}
