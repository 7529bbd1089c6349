use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::model::media::MediaManifest;
use crate::parsers::listing;
use crate::services::fetch::Fetcher;

const MEDIA_ROOT: &str = "media/";

const IMAGE_EXTENSIONS: [&str; 7] = ["avif", "gif", "jpg", "jpeg", "png", "webp", "svg"];

/// Where media paths can come from, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    Manifest,
    DirectoryListing,
}

impl MediaSource {
    pub const ORDER: [MediaSource; 2] = [MediaSource::Manifest, MediaSource::DirectoryListing];

    /// Resolved, filtered, deduplicated paths from this source, or `None`
    /// when the source is unavailable or has nothing usable.
    pub async fn collect(self, fetcher: &Fetcher, cfg: &SiteConfig) -> Option<Vec<String>> {
        let raw = match self {
            MediaSource::Manifest => {
                let value = fetcher.json(&cfg.media_manifest_path).await?;
                MediaManifest::from_value(&value).paths
            }
            MediaSource::DirectoryListing => {
                let html = fetcher.text(&cfg.media_listing_path).await?;
                listing::hrefs(&html)
            }
        };

        let paths = resolve_all(raw);
        if paths.is_empty() {
            None
        } else {
            Some(paths)
        }
    }
}

fn is_remote(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Maps a manifest or listing entry onto the path the page should load.
///
/// Absolute http(s) URLs are left alone. Relative paths lose any leading
/// `./`, `/` and `media/` and are re-rooted under `media/`.
pub fn resolve_media_path(raw: &str) -> String {
    let raw = raw.trim();
    if is_remote(raw) {
        return raw.to_string();
    }

    let mut rest = raw;
    loop {
        let stripped = rest
            .strip_prefix("./")
            .or_else(|| rest.strip_prefix('/'))
            .or_else(|| rest.strip_prefix(MEDIA_ROOT));
        match stripped {
            Some(s) => rest = s,
            None => break,
        }
    }

    format!("{MEDIA_ROOT}{rest}")
}

/// True when the path (ignoring any query or fragment) ends in an allowed
/// image extension, case-insensitively.
pub fn is_media_file(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let Some((stem, ext)) = path.rsplit_once('.') else {
        return false;
    };
    if stem.is_empty() || stem.ends_with('/') {
        return false;
    }
    IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e))
}

/// Keeps the first occurrence of each path.
pub fn dedupe(paths: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

/// Resolves raw entries, keeps images only, and drops duplicates.
pub fn resolve_all(raw: Vec<String>) -> Vec<String> {
    let resolved = raw
        .iter()
        .map(|p| resolve_media_path(p))
        .filter(|p| is_media_file(p))
        .collect();
    dedupe(resolved)
}

/// Finds the site's media: manifest first, directory listing second,
/// nothing at all last.
pub async fn discover(fetcher: &Fetcher, cfg: &SiteConfig) -> Vec<String> {
    for source in MediaSource::ORDER {
        if let Some(paths) = source.collect(fetcher, cfg).await {
            log::info!("media: {} paths from {:?}", paths.len(), source);
            return paths;
        }
        log::debug!("media: {source:?} gave nothing, trying next source");
    }

    log::info!("media: no sources available");
    Vec::new()
}
