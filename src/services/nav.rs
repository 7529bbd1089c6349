/// Element id an in-page nav link scrolls to. Anything that isn't a
/// `#fragment` is left to normal navigation.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.trim()
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
}
