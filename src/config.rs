use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_shows_json_path() -> String {
    "data/shows.json".to_string()
}

fn default_shows_csv_path() -> String {
    "show-list.csv".to_string()
}

fn default_media_manifest_path() -> String {
    "media/manifest.json".to_string()
}

fn default_media_listing_path() -> String {
    "media/".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShowFeed {
    #[default]
    Json,
    Csv,
}

/// Where the site's data lives. Every field has a default so the host can
/// send only what differs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub shows_feed: ShowFeed,

    #[serde(default = "default_shows_json_path")]
    pub shows_json_path: String,

    #[serde(default = "default_shows_csv_path")]
    pub shows_csv_path: String,

    #[serde(default = "default_media_manifest_path")]
    pub media_manifest_path: String,

    #[serde(default = "default_media_listing_path")]
    pub media_listing_path: String,

    /// Upper bound per request; unset means a request may wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: default_base_url(),
            shows_feed: ShowFeed::default(),
            shows_json_path: default_shows_json_path(),
            shows_csv_path: default_shows_csv_path(),
            media_manifest_path: default_media_manifest_path(),
            media_listing_path: default_media_listing_path(),
            timeout_secs: None,
        }
    }
}

impl SiteConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        SiteConfig {
            base_url: base_url.into(),
            ..SiteConfig::default()
        }
    }
}
