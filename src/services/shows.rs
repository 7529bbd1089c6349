use chrono::{Days, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::config::{ShowFeed, SiteConfig};
use crate::model::entry::ShowEntry;
use crate::parsers::csv::{self, CsvRow};
use crate::services::escape::truthy_text;
use crate::services::fetch::Fetcher;
use crate::services::links::normalize_links;

/// Oldest listed date is this many days before `now`'s calendar day: a full
/// week counted back from yesterday, so with `now` on 2024-06-15 the
/// 2024-06-07 show still appears and the 2024-06-06 one does not.
const WINDOW_DAYS: u64 = 8;

/// CSV header name → entry field.
const CSV_COLUMNS: [(&str, &str); 6] = [
    ("Date", "date"),
    ("Time", "time"),
    ("Venue", "venue"),
    ("Address", "address"),
    ("Price", "price"),
    ("Notes", "notes"),
];

/// Builds a [`ShowEntry`] from a raw feed record, or `None` if it has no date.
pub fn normalize_entry(raw: &Value) -> Option<ShowEntry> {
    let obj = raw.as_object()?;

    let date = truthy_text(obj.get("date"))?.trim().to_string();
    if date.is_empty() {
        return None;
    }

    let field = |key: &str| truthy_text(obj.get(key)).unwrap_or_default();

    Some(ShowEntry {
        date,
        time: field("time"),
        venue: field("venue"),
        location: field("location"),
        address: field("address"),
        price: field("price"),
        notes: field("notes"),
        links: normalize_links(obj.get("links")),
    })
}

pub fn parse_show_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Keeps shows from the last week onwards, in their original order.
///
/// The cutoff is local midnight `WINDOW_DAYS` before `now`'s calendar day
/// and is inclusive. Entries whose date doesn't parse are dropped.
pub fn filter_recent_and_upcoming(entries: Vec<ShowEntry>, now: NaiveDateTime) -> Vec<ShowEntry> {
    let today = now.date();
    let Some(cutoff) = today.checked_sub_days(Days::new(WINDOW_DAYS)) else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|e| match parse_show_date(&e.date) {
            Some(d) => d >= cutoff,
            None => {
                log::debug!("dropping show with unparsable date {:?}", e.date);
                false
            }
        })
        .collect()
}

/// Maps CSV rows (header first) onto show entries.
pub fn entries_from_rows(rows: &[CsvRow]) -> Vec<ShowEntry> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };

    let columns: Vec<(usize, &str)> = CSV_COLUMNS
        .iter()
        .filter_map(|(name, field)| {
            header
                .iter()
                .position(|h| h.trim() == *name)
                .map(|idx| (idx, *field))
        })
        .collect();

    body.iter()
        .filter_map(|row| {
            let mut raw = Map::new();
            for (idx, field) in &columns {
                let cell = row.get(*idx).map(|c| c.trim()).unwrap_or_default();
                raw.insert(field.to_string(), Value::String(cell.to_string()));
            }
            normalize_entry(&Value::Object(raw))
        })
        .collect()
}

pub fn entries_from_csv(text: &str) -> Vec<ShowEntry> {
    entries_from_rows(&csv::parse(text))
}

pub fn entries_from_json(value: &Value) -> Vec<ShowEntry> {
    match value.as_array() {
        Some(items) => items.iter().filter_map(normalize_entry).collect(),
        None => {
            log::warn!("show feed is not a JSON array");
            Vec::new()
        }
    }
}

/// Fetches the configured show feed and returns the entries worth listing.
/// Any failure along the way just means fewer (or no) entries.
pub async fn load_shows(fetcher: &Fetcher, cfg: &SiteConfig, now: NaiveDateTime) -> Vec<ShowEntry> {
    let entries = match cfg.shows_feed {
        ShowFeed::Json => fetcher
            .json(&cfg.shows_json_path)
            .await
            .map(|v| entries_from_json(&v))
            .unwrap_or_default(),
        ShowFeed::Csv => fetcher
            .text(&cfg.shows_csv_path)
            .await
            .map(|t| entries_from_csv(&t))
            .unwrap_or_default(),
    };

    let total = entries.len();
    let kept = filter_recent_and_upcoming(entries, now);
    log::info!("shows: {} of {} entries in window", kept.len(), total);

    kept
}
