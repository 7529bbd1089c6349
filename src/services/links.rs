use serde_json::Value;

use crate::model::entry::{Link, LinkMap};
use crate::services::escape::truthy_text;

/// Turns a raw feed link-map into `{url, text}` links.
///
/// Accepts `"key": "https://..."` shorthand or an object with `url`/`href`
/// and `text`/`label`. Keys that resolve to no url are dropped; anything
/// that is not an object yields an empty map.
pub fn normalize_links(raw: Option<&Value>) -> LinkMap {
    let mut out = LinkMap::new();

    let Some(Value::Object(map)) = raw else {
        return out;
    };

    for (key, value) in map {
        if let Some(link) = normalize_link(value) {
            out.insert(key.clone(), link);
        }
    }

    out
}

fn normalize_link(value: &Value) -> Option<Link> {
    match value {
        Value::String(s) if !s.is_empty() => Some(Link {
            url: s.clone(),
            text: s.clone(),
        }),
        Value::Object(obj) => {
            let url = truthy_text(obj.get("url")).or_else(|| truthy_text(obj.get("href")))?;
            let text = truthy_text(obj.get("text"))
                .or_else(|| truthy_text(obj.get("label")))
                .unwrap_or_else(|| url.clone());
            Some(Link { url, text })
        }
        _ => None,
    }
}
