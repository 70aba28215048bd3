pub mod selector;
pub mod wecima;

use std::fmt;

use crate::errors::Result;
use crate::model::{CatalogEntry, ContentType, PlayableLink, SubtitleFile, TitleDetails};

pub use wecima::WeCima;

/// Fixed catalog listings of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    TopSeries,
    Movies,
    Series,
    Anime,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::TopSeries,
        Section::Movies,
        Section::Series,
        Section::Anime,
    ];

    /// Path of the listing below the site origin
    pub fn path(&self) -> &'static str {
        match self {
            Section::TopSeries => "seriestv/top/",
            Section::Movies => "movies/",
            Section::Series => "seriestv/",
            Section::Anime => "list/anime/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::TopSeries => "أشهر المسلسلات",
            Section::Movies => "أحدث الأفلام",
            Section::Series => "أحدث المسلسلات",
            Section::Anime => "أحدث الأنمي",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Host facing contract of a streaming site
pub trait Provider {
    const NAME: &'static str;
    const LANG: &'static str;
    const SUPPORTED_TYPES: &'static [ContentType];

    /// Listings shown on the host's main page
    fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    async fn list_page(&self, section: Section, page: u32) -> Result<Vec<CatalogEntry>>;

    async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>>;

    async fn load_details(&self, url: &str) -> Result<TitleDetails>;

    /// Reports every playable link of an episode or movie page through
    /// `on_link`. Returns `true` once every watch server has been visited,
    /// whether or not any link was found.
    async fn resolve_links<S, L>(&self, url: &str, on_subtitle: S, on_link: L) -> Result<bool>
    where
        S: FnMut(SubtitleFile) + Send,
        L: FnMut(PlayableLink) + Send;
}
