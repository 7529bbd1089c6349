use std::fmt::Write;

use crate::model::entry::ShowEntry;
use crate::model::section::Section;
use crate::services::escape::escape;
use crate::services::rich_text;
use crate::services::shows::parse_show_date;

pub const NO_SHOWS_MESSAGE: &str = "No upcoming shows -- stay tuned!";
pub const NO_MEDIA_MESSAGE: &str = "Media coming soon.";

fn empty_section(message: &str) -> Section {
    Section {
        body: String::new(),
        visible: false,
        placeholder: Some(format!(r#"<p class="empty-state">{}</p>"#, escape(message))),
    }
}

/// "Sat, Jun 15, 2024" when the date parses, the raw text otherwise.
pub fn display_date(date: &str) -> String {
    match parse_show_date(date) {
        Some(d) => d.format("%a, %b %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Table-body rows for the show list.
pub fn shows_table(entries: &[ShowEntry]) -> Section {
    if entries.is_empty() {
        return empty_section(NO_SHOWS_MESSAGE);
    }

    let mut body = String::new();
    for e in entries {
        let _ = write!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&display_date(&e.date)),
            escape(&e.time),
            escape(&e.venue),
            escape(e.place()),
            escape(&e.price),
            rich_text::render(&e.notes, &e.links),
        );
    }

    Section {
        body,
        visible: true,
        placeholder: None,
    }
}

/// Cards for the media grid.
pub fn media_grid(paths: &[String]) -> Section {
    if paths.is_empty() {
        return empty_section(NO_MEDIA_MESSAGE);
    }

    let mut body = String::new();
    for p in paths {
        let _ = write!(
            body,
            r#"<figure class="media-card"><img src="{}" alt="" loading="lazy"></figure>"#,
            escape(p)
        );
    }

    Section {
        body,
        visible: true,
        placeholder: None,
    }
}
