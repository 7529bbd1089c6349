use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::model::section::Section;
use crate::services::fetch::Fetcher;
use crate::services::{media, populate, shows};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Page {
    pub shows: Section,
    pub media: Section,
}

/// Builds both page sections. The two run side by side on the current
/// thread and neither can take the other down; each ends up either filled
/// or showing its placeholder.
pub async fn render_page(cfg: &SiteConfig, now: NaiveDateTime) -> Page {
    let fetcher = match Fetcher::new(cfg) {
        Ok(f) => f,
        Err(e) => {
            log::error!("cannot build fetcher: {e}");
            return Page {
                shows: populate::shows_table(&[]),
                media: populate::media_grid(&[]),
            };
        }
    };

    let (entries, paths) = tokio::join!(
        shows::load_shows(&fetcher, cfg, now),
        media::discover(&fetcher, cfg)
    );

    Page {
        shows: populate::shows_table(&entries),
        media: populate::media_grid(&paths),
    }
}
