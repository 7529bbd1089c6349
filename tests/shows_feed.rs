// File: tests/shows_feed.rs
use chrono::{NaiveDate, NaiveDateTime};
use gigboard_core::services::shows;
use gigboard_core::{Fetcher, ShowFeed, SiteConfig};
use mockito::Server;
use pretty_assertions::assert_eq;

fn june_15() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .unwrap()
        .and_hms_opt(21, 0, 0)
        .unwrap()
}

fn config_for(url: &str, feed: ShowFeed) -> SiteConfig {
    SiteConfig {
        shows_feed: feed,
        ..SiteConfig::with_base_url(format!("{url}/"))
    }
}

#[tokio::test]
async fn json_feed_is_normalized_and_windowed() {
    let mut server = Server::new_async().await;
    let cfg = config_for(&server.url(), ShowFeed::Json);

    let feed = server
        .mock("GET", "/data/shows.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"date": "2024-05-01", "venue": "Too Old"},
                {"date": "2024-06-07", "venue": "Last Week", "location": "Springfield"},
                {"venue": "No Date"},
                {"date": "someday", "venue": "Bad Date"},
                {"date": "2024-07-04", "venue": "Park", "price": 0,
                 "notes": "Free! {links.rsvp}",
                 "links": {"rsvp": {"href": "https://rsvp.example", "label": "RSVP"}, "dead": null}}
            ]"#,
        )
        .create_async()
        .await;

    let fetcher = Fetcher::new(&cfg).expect("fetcher");
    let entries = shows::load_shows(&fetcher, &cfg, june_15()).await;

    let venues: Vec<&str> = entries.iter().map(|e| e.venue.as_str()).collect();
    assert_eq!(venues, vec!["Last Week", "Park"]);

    let park = &entries[1];
    assert_eq!(park.price, "");
    assert_eq!(park.links.len(), 1);
    assert_eq!(park.links["rsvp"].text, "RSVP");

    feed.assert_async().await;
}

#[tokio::test]
async fn csv_feed_is_parsed_and_windowed() {
    let mut server = Server::new_async().await;
    let cfg = config_for(&server.url(), ShowFeed::Csv);

    server
        .mock("GET", "/show-list.csv")
        .with_status(200)
        .with_header("content-type", "text/csv")
        .with_body(
            "Date,Time,Venue,Address,Price,Notes\r\n\
             2024-06-01,8pm,Old Bar,1 Elm St,$5,\r\n\
             2024-06-20,9pm,\"The \"\"Big\"\" Room\",\"22 Oak Ave, Shelbyville\",$12,Late show\r\n\
             \r\n",
        )
        .create_async()
        .await;

    let fetcher = Fetcher::new(&cfg).expect("fetcher");
    let entries = shows::load_shows(&fetcher, &cfg, june_15()).await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].venue, "The \"Big\" Room");
    assert_eq!(entries[0].address, "22 Oak Ave, Shelbyville");
    assert_eq!(entries[0].place(), "22 Oak Ave, Shelbyville");
    assert_eq!(entries[0].notes, "Late show");
}

#[tokio::test]
async fn failed_feed_means_no_shows() {
    let mut server = Server::new_async().await;
    let cfg = config_for(&server.url(), ShowFeed::Json);

    server
        .mock("GET", "/data/shows.json")
        .with_status(503)
        .create_async()
        .await;

    let fetcher = Fetcher::new(&cfg).expect("fetcher");
    assert!(shows::load_shows(&fetcher, &cfg, june_15()).await.is_empty());
}

#[tokio::test]
async fn non_array_feed_means_no_shows() {
    let mut server = Server::new_async().await;
    let cfg = config_for(&server.url(), ShowFeed::Json);

    server
        .mock("GET", "/data/shows.json")
        .with_status(200)
        .with_body(r#"{"shows": [{"date": "2024-07-01"}]}"#)
        .create_async()
        .await;

    let fetcher = Fetcher::new(&cfg).expect("fetcher");
    assert!(shows::load_shows(&fetcher, &cfg, june_15()).await.is_empty());
}

#[tokio::test]
async fn custom_feed_path_is_used() {
    let mut server = Server::new_async().await;
    let mut cfg = config_for(&server.url(), ShowFeed::Json);
    cfg.shows_json_path = "api/gigs.json".to_string();

    let feed = server
        .mock("GET", "/api/gigs.json")
        .with_status(200)
        .with_body(r#"[{"date": "2024-06-30", "venue": "Somewhere"}]"#)
        .create_async()
        .await;

    let fetcher = Fetcher::new(&cfg).expect("fetcher");
    let entries = shows::load_shows(&fetcher, &cfg, june_15()).await;

    assert_eq!(entries.len(), 1);
    feed.assert_async().await;
}
