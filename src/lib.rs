//! # gigboard-core
//!
//! Headless core behind a band site's show list and media grid.
//!
//! It fetches the show feed (JSON or CSV) and the media manifest or
//! directory listing, normalizes whatever comes back, and hands the host page
//! ready-to-insert markup. Every source may be missing or broken; the worst
//! outcome is a "stay tuned" placeholder, never an error on the page.
//!
//! The binary speaks one JSON object per line on stdin/stdout, see
//! [`protocol::handle`].

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parsers;
pub mod protocol;
pub mod services;

pub use config::{ShowFeed, SiteConfig};
pub use error::{FetchError, FetchResult};
pub use model::entry::{Link, LinkMap, ShowEntry};
pub use model::media::MediaManifest;
pub use model::section::{FragmentOutcome, Section};
pub use services::escape::escape;
pub use services::fetch::Fetcher;
pub use services::rich_text::render as render_rich_text;
