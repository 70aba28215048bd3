use std::fmt;

use reqwest::Url;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Movie,
    Series,
    Anime,
}

impl ContentType {
    /// Infers the content type from the path of a catalog link.
    pub fn from_href(href: &str) -> Self {
        if href.contains("/series/") {
            ContentType::Series
        } else if href.contains("/anime/") {
            ContentType::Anime
        } else {
            ContentType::Movie
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Movie => "Movie",
            ContentType::Series => "Series",
            ContentType::Anime => "Anime",
        };

        f.write_str(s)
    }
}

/// One poster tile of a catalog or search listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub href: Url,
    pub poster_url: Option<Url>,
    pub content_type: ContentType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeRef {
    pub display_name: String,
    pub source_url: Url,
    pub season: Option<u32>,
    pub episode: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Playback {
    /// Series seasons, or the entries of a movie franchise
    Episodes(Vec<EpisodeRef>),
    /// A standalone movie, played from its own details page
    Movie { data_url: Url },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleDetails {
    pub title: String,
    pub url: Url,
    pub poster_url: Option<Url>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub year: Option<i32>,
    pub content_type: ContentType,
    pub playback: Playback,
}

impl TitleDetails {
    pub fn episodes(&self) -> &[EpisodeRef] {
        match &self.playback {
            Playback::Episodes(episodes) => episodes,
            Playback::Movie { .. } => &[],
        }
    }

    pub fn play_url(&self) -> Option<&Url> {
        match &self.playback {
            Playback::Movie { data_url } => Some(data_url),
            Playback::Episodes(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quality {
    #[default]
    Unknown,
    Height(u16),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Unknown => f.write_str("?"),
            Quality::Height(h) => write!(f, "{h}p"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayableLink {
    pub provider_label: String,
    pub display_label: String,
    pub media_url: Url,
    pub referer_url: Url,
    pub quality: Quality,
    pub is_segmented: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtitleFile {
    pub lang: String,
    pub url: Url,
}
