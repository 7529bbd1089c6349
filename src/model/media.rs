use serde_json::Value;

const LIST_KEYS: [&str; 3] = ["files", "images", "media"];

/// Shape of `media/manifest.json`: a bare list, or an object carrying the
/// list under one of `files` / `images` / `media`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaManifest {
    pub paths: Vec<String>,
}

impl MediaManifest {
    pub fn from_value(value: &Value) -> Self {
        let list = match value {
            Value::Array(items) => Some(items),
            Value::Object(map) => LIST_KEYS
                .iter()
                .find_map(|k| map.get(*k).and_then(|v| v.as_array())),
            _ => None,
        };

        let paths = list
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        MediaManifest { paths }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_the_list() {
        let m = MediaManifest::from_value(&json!(["a.png", "b.jpg"]));
        assert_eq!(m.paths, vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn first_present_list_key_wins() {
        let m = MediaManifest::from_value(&json!({
            "files": "not-a-list",
            "images": ["i.png"],
            "media": ["m.png"]
        }));
        assert_eq!(m.paths, vec!["i.png"]);
    }

    #[test]
    fn non_string_items_are_skipped() {
        let m = MediaManifest::from_value(&json!({ "media": [1, null, "ok.gif"] }));
        assert_eq!(m.paths, vec!["ok.gif"]);
    }

    #[test]
    fn other_shapes_are_empty() {
        assert!(MediaManifest::from_value(&json!("x.png")).paths.is_empty());
        assert!(MediaManifest::from_value(&json!({ "other": ["x.png"] })).paths.is_empty());
    }
}
