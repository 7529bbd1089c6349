use serde_json::Value;

/// HTML-escapes the five reserved characters; everything else passes through.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Text form of a loose JSON value: null is empty, strings are taken as-is,
/// anything else uses its JSON rendering.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn escape_value(value: &Value) -> String {
    escape(&value_text(value))
}

/// Feed-style truthiness: null, false, "", and zero are all "not provided".
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(value_text(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_all_reserved_characters() {
        assert_eq!(escape("<a>&\"'"), "&lt;a&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(escape("Café — 8pm {links.x}"), "Café — 8pm {links.x}");
    }

    #[test]
    fn output_never_contains_raw_reserved_characters() {
        let inputs = [
            "",
            "&&&",
            "<script>alert('x')</script>",
            "\"quoted\" & 'single'",
            "&amp; already escaped",
            "mixed <b>bold</b> & \"more\"",
        ];
        for input in inputs {
            let out = escape(input);
            assert!(!out.contains(['<', '>', '"', '\'']), "{out}");
            // Every '&' left must start one of our entities.
            for (i, _) in out.match_indices('&') {
                let rest = &out[i..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                        .iter()
                        .any(|e| rest.starts_with(e)),
                    "{out}"
                );
            }
        }
    }

    #[test]
    fn coerces_json_values() {
        assert_eq!(escape_value(&json!(null)), "");
        assert_eq!(escape_value(&json!(12)), "12");
        assert_eq!(escape_value(&json!("<i>")), "&lt;i&gt;");
    }

    #[test]
    fn truthiness_follows_feed_rules() {
        assert_eq!(truthy_text(None), None);
        assert_eq!(truthy_text(Some(&json!(null))), None);
        assert_eq!(truthy_text(Some(&json!(""))), None);
        assert_eq!(truthy_text(Some(&json!(0))), None);
        assert_eq!(truthy_text(Some(&json!(false))), None);
        assert_eq!(truthy_text(Some(&json!(15))), Some("15".to_string()));
        assert_eq!(truthy_text(Some(&json!(" "))), Some(" ".to_string()));
    }
}
