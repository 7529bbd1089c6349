use chrono::{Local, NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::model::entry::ShowEntry;
use crate::model::media::MediaManifest;
use crate::model::section::FragmentOutcome;
use crate::parsers::csv;
use crate::services::{
    escape, fetch::Fetcher, fragment, links, media, nav, page, populate, rich_text, shows,
};

mod command;
pub use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

static NULL: Value = Value::Null;

fn get_payload(req: &Value) -> &Value {
    req.get("payload").unwrap_or(&NULL)
}

fn get_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn parse_config(payload: &Value) -> Result<SiteConfig, String> {
    match payload.get("config") {
        None | Some(Value::Null) => Ok(SiteConfig::default()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| format!("invalid payload.config: {e}")),
    }
}

/// `now` from the payload (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`), else the local clock.
fn parse_now(payload: &Value) -> Result<NaiveDateTime, String> {
    let raw = get_str(payload, "now").trim();
    if raw.is_empty() {
        return Ok(Local::now().naive_local());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid payload.now: {raw}"))
}

fn parse_entries_from_payload(payload: &Value) -> Result<Vec<ShowEntry>, String> {
    let arr = payload
        .get("entries")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "payload.entries must be an array".to_string())?;

    Ok(arr.iter().filter_map(shows::normalize_entry).collect())
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

async fn dispatch(cmd: Command, payload: &Value) -> Result<Value, String> {
    match cmd {
        Command::Ping => Ok(json!({ "message": "gigboard-core alive" })),

        Command::Escape => {
            let text = payload.get("text").unwrap_or(&NULL);
            Ok(json!({ "text": escape::escape_value(text) }))
        }

        Command::NormalizeLinks => {
            let links = links::normalize_links(payload.get("links"));
            Ok(json!({ "links": links }))
        }

        Command::RenderRichText => {
            let links = links::normalize_links(payload.get("links"));
            let markup = rich_text::render(get_str(payload, "text"), &links);
            Ok(json!({ "markup": markup }))
        }

        Command::NormalizeShow => {
            let entry = payload.get("entry").and_then(shows::normalize_entry);
            Ok(json!({ "entry": entry }))
        }

        Command::FilterShows => {
            let entries = parse_entries_from_payload(payload)?;
            let now = parse_now(payload)?;
            let kept = shows::filter_recent_and_upcoming(entries, now);
            Ok(json!({ "entries": kept }))
        }

        Command::ParseCsv => {
            let rows = csv::parse(get_str(payload, "text"));
            Ok(json!({ "rows": rows }))
        }

        Command::ShowsFromCsv => {
            let entries = shows::entries_from_csv(get_str(payload, "text"));
            Ok(json!({ "entries": entries }))
        }

        Command::LoadShows => {
            let cfg = parse_config(payload)?;
            let now = parse_now(payload)?;
            let entries = match Fetcher::new(&cfg) {
                Ok(fetcher) => shows::load_shows(&fetcher, &cfg, now).await,
                Err(e) => {
                    log::error!("cannot build fetcher: {e}");
                    Vec::new()
                }
            };
            let section = populate::shows_table(&entries);
            Ok(json!({ "entries": entries, "section": section }))
        }

        Command::ResolveMedia => {
            let manifest_val = payload.get("manifest").unwrap_or(&NULL);
            let manifest = MediaManifest::from_value(manifest_val);
            Ok(json!({ "paths": media::resolve_all(manifest.paths) }))
        }

        Command::DiscoverMedia => {
            let cfg = parse_config(payload)?;
            let paths = match Fetcher::new(&cfg) {
                Ok(fetcher) => media::discover(&fetcher, &cfg).await,
                Err(e) => {
                    log::error!("cannot build fetcher: {e}");
                    Vec::new()
                }
            };
            let section = populate::media_grid(&paths);
            Ok(json!({ "paths": paths, "section": section }))
        }

        Command::RenderPage => {
            let cfg = parse_config(payload)?;
            let now = parse_now(payload)?;
            let rendered = page::render_page(&cfg, now).await;
            Ok(to_json(&rendered))
        }

        Command::IncludeFragment => {
            let cfg = parse_config(payload)?;
            let path = get_str(payload, "path");
            let outcome = match Fetcher::new(&cfg) {
                Ok(fetcher) => fragment::include_fragment(&fetcher, path).await,
                Err(e) => {
                    log::error!("cannot build fetcher: {e}");
                    FragmentOutcome::Remove
                }
            };
            Ok(to_json(&outcome))
        }

        Command::NavTarget => {
            let target = nav::anchor_target(get_str(payload, "href"));
            Ok(json!({ "target": target }))
        }

        Command::Unknown => Err("unknown command".to_string()),
    }
}

/// Handles one request line and returns the response line.
pub async fn handle(input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    let cmd = Command::from(cmd_str);
    log::debug!("request {cmd_str:?} -> {cmd:?}");

    match dispatch(cmd, payload).await {
        Ok(result) => ok(id, result),
        Err(e) => {
            log::warn!("{cmd_str}: {e}");
            err(id, e)
        }
    }
}
