use std::sync::LazyLock;

use regex::Regex;

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    // href="..." or href='...', attribute name case-insensitive.
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Every anchor `href` value found in a directory-listing page, in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    HREF_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|h| !h.is_empty())
        .collect()
}
