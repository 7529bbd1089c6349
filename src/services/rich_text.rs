use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::entry::LinkMap;
use crate::services::escape::escape;

const LINK_PREFIX: &str = "links.";

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Renders free text as markup, turning `{links.<key>}` into an anchor.
///
/// Placeholders that are not link references, or that name a link we don't
/// have, come out double-braced (`{{key}}`) so they stay visible. Everything
/// that reaches the output is escaped, and the result is never rescanned.
pub fn render(text: &str, links: &LinkMap) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&escape(&text[last..whole.start()]));
        out.push_str(&substitute(&caps, links));
        last = whole.end();
    }

    out.push_str(&escape(&text[last..]));
    out
}

fn substitute(caps: &Captures<'_>, links: &LinkMap) -> String {
    let key = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    let link = key
        .strip_prefix(LINK_PREFIX)
        .and_then(|link_key| links.get(link_key))
        .filter(|l| !l.url.is_empty());

    match link {
        Some(l) => format!(
            r#"<a href="{}" target="_blank" rel="noreferrer noopener">{}</a>"#,
            escape(&l.url),
            escape(&l.text)
        ),
        None => format!("{{{{{}}}}}", escape(key)),
    }
}
