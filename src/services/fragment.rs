use crate::model::section::FragmentOutcome;
use crate::services::fetch::Fetcher;

/// What the host should do with an include element pointing at `path`.
pub async fn include_fragment(fetcher: &Fetcher, path: &str) -> FragmentOutcome {
    let path = path.trim();
    if path.is_empty() {
        return FragmentOutcome::Remove;
    }

    match fetcher.text(path).await {
        Some(markup) => FragmentOutcome::Replace { markup },
        None => FragmentOutcome::Remove,
    }
}
