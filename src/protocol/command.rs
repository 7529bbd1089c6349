#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Escape,
    NormalizeLinks,
    RenderRichText,
    NormalizeShow,
    FilterShows,
    ParseCsv,
    ShowsFromCsv,
    LoadShows,
    ResolveMedia,
    DiscoverMedia,
    RenderPage,
    IncludeFragment,
    NavTarget,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "escape" => Command::Escape,
            "links.normalize" => Command::NormalizeLinks,
            "render_rich_text" => Command::RenderRichText,
            "show.normalize" => Command::NormalizeShow,
            "shows.filter" => Command::FilterShows,
            "parse_csv" => Command::ParseCsv,
            "shows.from_csv" => Command::ShowsFromCsv,
            "shows.load" => Command::LoadShows,
            "media.resolve" => Command::ResolveMedia,
            "media.discover" => Command::DiscoverMedia,
            "page.render" => Command::RenderPage,
            "fragment.include" => Command::IncludeFragment,
            "nav.target" => Command::NavTarget,
            _ => Command::Unknown,
        }
    }
}
