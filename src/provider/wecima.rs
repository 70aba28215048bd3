use reqwest::Url;
use scraper::{ElementRef, Html};
use tracing::{debug, trace, warn};

use super::{Provider, Section, selector};
use crate::client::Fetcher;
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::extractor::{Extractor, ServerKind};
use crate::model::{
    CatalogEntry, ContentType, EpisodeRef, PlayableLink, Playback, Quality, SubtitleFile,
    TitleDetails,
};
use crate::parser::{clean_heading, clean_movie_label, parse_lazy_style, parse_number};

const TILE: &str = "div.Grid--WecimaPosts div.GridItem div.Thumb--GridItem";
const EPISODES: &str = "div.Episodes--Seasons--Episodes a";
const SEASONS: &str = "div.List--Seasons--Episodes a";
const RELATED: &str = "singlerelated.hasdivider";
const SERVERS: &str = "ul.WatchServersList li";

const SERIES_LABEL: &str = "المسلسل";
const FRANCHISE_LABEL: &str = "سلسلة";
const CATEGORY_LABEL: &str = "التصنيف";
const GENRE_LABEL: &str = "النوع";
const YEAR_LABEL: &str = "سنة الإنتاج";
const SEASON_LABEL: &str = "الموسم";

const SITE_NAME: &str = "WeCima";
const OWN_SERVER_CLASS: &str = "MyCimaServer";
const OWN_SERVER_LABEL: &str = "WeCima Server";

/// Adapter for the WeCima streaming site
pub struct WeCima<E> {
    origin: Url,
    client: Fetcher,
    extractor: E,
}

impl<E: Extractor> WeCima<E> {
    pub fn new(config: &Config, extractor: E) -> Result<Self> {
        Ok(Self {
            origin: config.origin.clone(),
            client: Fetcher::new(config)?,
            extractor,
        })
    }

    /// Client carrying the configured user agent and proxy
    pub fn client(&self) -> &Fetcher {
        &self.client
    }

    /// Referer sent along with every playable link
    pub fn referer(&self) -> &Url {
        &self.origin
    }

    fn resolve(&self, href: &str) -> Result<Url> {
        absolute(&self.origin, href).ok_or_else(|| Error::InvalidUrl(href.to_string()))
    }

    pub fn catalog_url(&self, section: Section, page: u32) -> Result<Url> {
        let mut url = self.resolve(section.path())?;
        url.set_query(Some(&format!("page_number={page}")));

        Ok(url)
    }

    /// Search urls carry the query as a single, percent-encoded path segment
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.origin.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidOrigin(self.origin.to_string()))?
            .pop_if_empty()
            .extend(["search", query, "page", "1", ""]);

        Ok(url)
    }

    /// Fetches every season that is not the current page, oldest first.
    async fn collect_seasons(&self, plan: SeasonPlan) -> Result<Vec<EpisodeRef>> {
        if plan.seasons.is_empty() {
            return Ok(episode_refs(1, &plan.current));
        }

        let mut episodes = vec![];
        for season in &plan.seasons {
            if season.selected {
                episodes.extend(episode_refs(season.number, &plan.current));
                continue;
            }

            let url = self.resolve(&season.href)?;
            debug!(season = season.number, %url, "fetching season");

            let text = self.client.get_text(&url).await?;
            let anchors = parse_episode_anchors(&Html::parse_document(&text), &self.origin);
            episodes.extend(episode_refs(season.number, &anchors));
        }

        Ok(episodes)
    }
}

impl<E: Extractor> Provider for WeCima<E> {
    const NAME: &'static str = SITE_NAME;
    const LANG: &'static str = "ar";
    const SUPPORTED_TYPES: &'static [ContentType] =
        &[ContentType::Movie, ContentType::Series, ContentType::Anime];

    async fn list_page(&self, section: Section, page: u32) -> Result<Vec<CatalogEntry>> {
        let url = self.catalog_url(section, page)?;
        let text = self.client.get_text(&url).await?;

        Ok(parse_catalog(&Html::parse_document(&text), &self.origin))
    }

    async fn search(&self, query: &str) -> Result<Vec<CatalogEntry>> {
        let url = self.search_url(query)?;
        let text = self.client.get_text(&url).await?;

        Ok(parse_catalog(&Html::parse_document(&text), &self.origin))
    }

    async fn load_details(&self, url: &str) -> Result<TitleDetails> {
        let url = self.resolve(url)?;
        let text = self.client.get_text(&url).await?;

        let DetailsPage {
            title,
            poster_url,
            description,
            genres,
            year,
            layout,
        } = DetailsPage::parse(&text, &self.origin);

        let (content_type, playback) = match layout {
            Layout::Series(plan) => {
                let episodes = self.collect_seasons(plan).await?;
                (ContentType::Series, Playback::Episodes(episodes))
            }
            Layout::Franchise(episodes) => (ContentType::Movie, Playback::Episodes(episodes)),
            Layout::Standalone => (
                ContentType::Movie,
                Playback::Movie {
                    data_url: url.clone(),
                },
            ),
        };

        Ok(TitleDetails {
            title,
            url,
            poster_url,
            description,
            genres,
            year,
            content_type,
            playback,
        })
    }

    async fn resolve_links<S, L>(&self, url: &str, mut on_subtitle: S, mut on_link: L) -> Result<bool>
    where
        S: FnMut(SubtitleFile) + Send,
        L: FnMut(PlayableLink) + Send,
    {
        let url = self.resolve(url)?;
        let text = self.client.get_text(&url).await?;
        let servers = parse_servers(&Html::parse_document(&text), &self.origin);

        for server in servers {
            if server.kind.is_direct(&server.url) {
                match direct_link(&server.url, self.referer()) {
                    Some(link) => on_link(link),
                    None => trace!(url = %server.url, "unable to rewrite own server url"),
                }
                continue;
            }

            debug!(
                kind = %server.kind,
                name = %server.name,
                url = %server.url,
                "delegating server"
            );
            let res = self
                .extractor
                .extract(&server.url, self.referer(), &mut on_subtitle, &mut on_link)
                .await;

            if let Err(err) = res {
                warn!(url = %server.url, "{err}");
            }
        }

        Ok(true)
    }
}

fn absolute(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    base.join(href).ok()
}

/// Turns an own-server `/run/` url into a direct, auto-playing media url
fn direct_link(url: &Url, referer: &Url) -> Option<PlayableLink> {
    let media = url.as_str().replace("?Key", "/?Key") + "&auto=true";

    Some(PlayableLink {
        provider_label: SITE_NAME.to_string(),
        display_label: OWN_SERVER_LABEL.to_string(),
        media_url: Url::parse(&media).ok()?,
        referer_url: referer.clone(),
        quality: Quality::Unknown,
        is_segmented: false,
    })
}

pub fn parse_catalog(page: &Html, base: &Url) -> Vec<CatalogEntry> {
    let tile = selector::from(TILE);

    page.select(&tile)
        .filter_map(|t| {
            let entry = parse_tile(t, base);
            if entry.is_none() {
                trace!("skipping tile without title or link");
            }
            entry
        })
        .collect()
}

fn parse_tile(tile: ElementRef, base: &Url) -> Option<CatalogEntry> {
    let a = tile.select(&selector::from("a")).next()?;

    let title = a.value().attr("title").map(str::trim).filter(|t| !t.is_empty())?;
    let href = absolute(base, a.value().attr("href")?)?;

    let poster_url = tile
        .select(&selector::from("a > span.BG--GridItem"))
        .next()
        .and_then(|span| span.value().attr("data-lazy-style"))
        .and_then(parse_lazy_style)
        .and_then(|p| absolute(base, p));

    Some(CatalogEntry {
        title: title.to_string(),
        content_type: ContentType::from_href(href.as_str()),
        href,
        poster_url,
    })
}

/// Where the title of a details page comes from, in order of precedence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleSource {
    /// The "series" row of the details list, present on episode pages
    SeriesLabel,
    /// The anchor of the related "movie series" block
    FranchiseBlock,
    /// The page heading, stripped of year and movie markers
    Heading,
}

impl TitleSource {
    pub const ORDER: [TitleSource; 3] = [
        TitleSource::SeriesLabel,
        TitleSource::FranchiseBlock,
        TitleSource::Heading,
    ];

    /// The title this source yields, `None` when the page lacks it
    pub fn extract(self, page: &Html) -> Option<String> {
        match self {
            TitleSource::SeriesLabel => {
                let p = selector::under_item(page, SERIES_LABEL, &selector::from("p"));
                (!p.is_empty()).then(|| join_text(&p))
            }
            TitleSource::FranchiseBlock => {
                let a = selector::in_block(
                    page,
                    &selector::from(RELATED),
                    FRANCHISE_LABEL,
                    &selector::from("a"),
                );
                a.first().map(|a| selector::text(*a))
            }
            TitleSource::Heading => {
                let h1 = selector::from("div.Title--Content--Single-begin > h1");
                let heading = page.select(&h1).collect::<Vec<_>>();
                Some(clean_heading(&join_text(&heading)))
            }
        }
    }

    pub fn resolve(page: &Html) -> (TitleSource, String) {
        Self::ORDER
            .iter()
            .find_map(|s| s.extract(page).map(|t| (*s, t)))
            .unwrap_or((TitleSource::Heading, String::new()))
    }
}

fn join_text(elements: &[ElementRef]) -> String {
    elements
        .iter()
        .map(|e| selector::text(*e))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeAnchor {
    pub text: String,
    pub url: Url,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonLink {
    pub number: u32,
    pub href: String,
    pub selected: bool,
}

/// Seasons in ascending order, along with the episodes listed on the page
/// that was fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeasonPlan {
    pub seasons: Vec<SeasonLink>,
    pub current: Vec<EpisodeAnchor>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Series(SeasonPlan),
    Franchise(Vec<EpisodeRef>),
    Standalone,
}

impl Layout {
    /// Episode or season links make a series, a related "movie series" block
    /// makes a franchise, anything else is a standalone movie.
    pub fn detect(page: &Html, base: &Url) -> Self {
        let current = parse_episode_anchors(page, base);
        let seasons = parse_seasons(page);

        if !current.is_empty() || !seasons.is_empty() {
            return Layout::Series(SeasonPlan { seasons, current });
        }

        let franchise = selector::in_block(
            page,
            &selector::from(RELATED),
            FRANCHISE_LABEL,
            &selector::from("div.Thumb--GridItem a"),
        );
        if !franchise.is_empty() {
            let episodes = franchise
                .into_iter()
                .enumerate()
                .filter_map(|(i, a)| {
                    Some(EpisodeRef {
                        display_name: clean_movie_label(&selector::text(a)),
                        source_url: absolute(base, a.value().attr("href")?)?,
                        season: None,
                        episode: i as u32 + 1,
                    })
                })
                .collect();

            return Layout::Franchise(episodes);
        }

        Layout::Standalone
    }
}

pub fn parse_episode_anchors(page: &Html, base: &Url) -> Vec<EpisodeAnchor> {
    let a = selector::from(EPISODES);

    page.select(&a)
        .filter_map(|a| {
            Some(EpisodeAnchor {
                text: selector::text(a),
                url: absolute(base, a.value().attr("href")?)?,
            })
        })
        .collect()
}

/// Season links come newest first; they are returned oldest first, numbered
/// by their label or by position.
pub fn parse_seasons(page: &Html) -> Vec<SeasonLink> {
    let a = selector::from(SEASONS);
    let links = page.select(&a).collect::<Vec<_>>();

    links
        .into_iter()
        .rev()
        .enumerate()
        .map(|(i, a)| SeasonLink {
            number: parse_number(&selector::text(a)).unwrap_or(i as u32 + 1),
            href: a.value().attr("href").unwrap_or_default().to_string(),
            selected: a.value().classes().any(|c| c == "selected"),
        })
        .collect()
}

pub fn episode_refs(season: u32, anchors: &[EpisodeAnchor]) -> Vec<EpisodeRef> {
    anchors
        .iter()
        .map(|a| EpisodeRef {
            display_name: format!("{SEASON_LABEL} {season} : {}", a.text),
            source_url: a.url.clone(),
            season: Some(season),
            episode: parse_number(&a.text).unwrap_or(1),
        })
        .collect()
}

/// Everything a details page yields before any further fetch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailsPage {
    pub title: String,
    pub poster_url: Option<Url>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub year: Option<i32>,
    pub layout: Layout,
}

impl DetailsPage {
    pub fn parse(html: &str, base: &Url) -> Self {
        let page = Html::parse_document(html);

        let (source, title) = TitleSource::resolve(&page);
        trace!(?source, %title, "resolved title");

        let poster_url = page
            .select(&selector::from("div.Poster--Single-begin img"))
            .next()
            .and_then(|img| img.value().attr("src"))
            .and_then(|src| absolute(base, src));

        let description = page
            .select(&selector::from("div.AsideContext > div.StoryMovieContent"))
            .next()
            .map(selector::text);

        let genres = selector::item_links(&page, &[CATEGORY_LABEL, GENRE_LABEL])
            .into_iter()
            .map(selector::text)
            .collect();

        let year = selector::under_item(&page, YEAR_LABEL, &selector::from("p"))
            .first()
            .and_then(|p| selector::text(*p).parse().ok());

        Self {
            title,
            poster_url,
            description,
            genres,
            year,
            layout: Layout::detect(&page, base),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerEntry {
    pub kind: ServerKind,
    pub name: String,
    pub url: Url,
}

pub fn parse_servers(page: &Html, base: &Url) -> Vec<ServerEntry> {
    let li = selector::from(SERVERS);
    let btn = selector::from("btn");

    page.select(&li)
        .filter_map(|server| {
            let data_url = server
                .select(&btn)
                .next()
                .and_then(|b| b.value().attr("data-url"));

            let Some(url) = data_url.and_then(|u| absolute(base, u)) else {
                trace!("skipping server without url");
                return None;
            };

            let name = selector::text(server).to_lowercase();
            let own = server.value().classes().any(|c| c == OWN_SERVER_CLASS);

            Some(ServerEntry {
                kind: ServerKind::classify(own, &name),
                name,
                url,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://wecima.show/").unwrap()
    }

    mod catalog {
        use super::*;

        const GRID: &str = r#"
            <div class="Grid--WecimaPosts">
                <div class="GridItem">
                    <div class="Thumb--GridItem">
                        <a href="https://wecima.show/anime/attack-on-titan/" title="هجوم العمالقة">
                            <span class="BG--GridItem" data-lazy-style="--image:url(https://wecima.show/img/aot.jpg);"></span>
                        </a>
                    </div>
                </div>
                <div class="GridItem">
                    <div class="Thumb--GridItem">
                        <a href="/series/dark/" title="Dark">
                            <span class="BG--GridItem" data-lazy-style="--image:url(/img/dark.jpg);"></span>
                        </a>
                    </div>
                </div>
                <div class="GridItem">
                    <div class="Thumb--GridItem"><a href="/watch/no-title/"></a></div>
                </div>
                <div class="GridItem">
                    <div class="Thumb--GridItem"><a title="No link"></a></div>
                </div>
                <div class="GridItem">
                    <div class="Thumb--GridItem"><span>no anchor</span></div>
                </div>
                <div class="GridItem">
                    <div class="Thumb--GridItem">
                        <a href="/watch/inception/" title="Inception"><span class="BG--GridItem"></span></a>
                    </div>
                </div>
            </div>"#;

        #[test]
        fn test_parse_catalog() {
            let page = Html::parse_document(GRID);
            let entries = parse_catalog(&page, &base());

            assert_eq!(entries.len(), 3);

            assert_eq!(entries[0].title, "هجوم العمالقة");
            assert_eq!(entries[0].content_type, ContentType::Anime);
            assert_eq!(
                entries[0].poster_url.as_ref().map(Url::as_str),
                Some("https://wecima.show/img/aot.jpg")
            );

            assert_eq!(entries[1].href.as_str(), "https://wecima.show/series/dark/");
            assert_eq!(entries[1].content_type, ContentType::Series);
            assert_eq!(
                entries[1].poster_url.as_ref().map(Url::as_str),
                Some("https://wecima.show/img/dark.jpg")
            );

            assert_eq!(entries[2].title, "Inception");
            assert_eq!(entries[2].content_type, ContentType::Movie);
            assert_eq!(entries[2].poster_url, None);
        }

        #[test]
        fn test_tiles_outside_grid_are_ignored() {
            let html = r#"<div class="Thumb--GridItem"><a href="/x/" title="X"></a></div>"#;
            let page = Html::parse_document(html);

            assert!(parse_catalog(&page, &base()).is_empty());
        }
    }

    mod title {
        use super::*;

        const SERIES: &str = r#"
            <div class="Title--Content--Single-begin"><h1>مسلسل Dark الموسم 2 الحلقة 3 مترجمة</h1></div>
            <singlerelated class="hasdivider"><span>سلسلة</span><a href="/x">Wrong</a></singlerelated>
            <ul><li><span>المسلسل :</span><p>Dark</p></li></ul>"#;

        const FRANCHISE: &str = r#"
            <div class="Title--Content--Single-begin"><h1>مشاهدة فيلم Saw II مترجم (2005)</h1></div>
            <singlerelated class="hasdivider"><span>سلسلة افلام</span><a href="/saw">Saw</a></singlerelated>"#;

        const MOVIE: &str = r#"
            <div class="Title--Content--Single-begin"><h1>مشاهدة فيلم Inception مترجم (2010)</h1></div>
            <singlerelated class="hasdivider"><span>افلام مشابهة</span><a href="/x">Interstellar</a></singlerelated>"#;

        #[test]
        fn test_order() {
            assert_eq!(
                TitleSource::ORDER,
                [
                    TitleSource::SeriesLabel,
                    TitleSource::FranchiseBlock,
                    TitleSource::Heading
                ]
            );
        }

        #[test]
        fn test_series_label() {
            let page = Html::parse_document(SERIES);

            assert_eq!(
                TitleSource::resolve(&page),
                (TitleSource::SeriesLabel, "Dark".to_string())
            );
        }

        #[test]
        fn test_franchise_block() {
            let page = Html::parse_document(FRANCHISE);

            assert_eq!(TitleSource::SeriesLabel.extract(&page), None);
            assert_eq!(
                TitleSource::resolve(&page),
                (TitleSource::FranchiseBlock, "Saw".to_string())
            );
        }

        #[test]
        fn test_heading() {
            let page = Html::parse_document(MOVIE);

            assert_eq!(TitleSource::FranchiseBlock.extract(&page), None);
            assert_eq!(
                TitleSource::resolve(&page),
                (TitleSource::Heading, "Inception".to_string())
            );
        }

        #[test]
        fn test_missing_heading() {
            let page = Html::parse_document("<p>nothing here</p>");

            assert_eq!(
                TitleSource::resolve(&page),
                (TitleSource::Heading, String::new())
            );
        }
    }

    mod details {
        use super::*;

        const MOVIE: &str = r#"
            <div class="Poster--Single-begin"><img src="/img/inception.jpg"></div>
            <div class="Title--Content--Single-begin"><h1>مشاهدة فيلم Inception مترجم (2010)</h1></div>
            <div class="AsideContext"><div class="StoryMovieContent">  لص يسرق   الاسرار  </div></div>
            <ul class="Terms--Content--Single-begin">
                <li><span>التصنيف</span><p><a href="/c/action">اكشن</a><a href="/c/scifi">خيال علمي</a></p></li>
                <li><span>النوع</span><p><a href="/g/movie">فيلم</a></p></li>
                <li><span>سنة الإنتاج</span><p>2010</p></li>
            </ul>"#;

        #[test]
        fn test_standalone_movie() {
            let details = DetailsPage::parse(MOVIE, &base());

            assert_eq!(details.title, "Inception");
            assert_eq!(
                details.poster_url.as_ref().map(Url::as_str),
                Some("https://wecima.show/img/inception.jpg")
            );
            assert_eq!(details.description.as_deref(), Some("لص يسرق الاسرار"));
            assert_eq!(details.genres, vec!["اكشن", "خيال علمي", "فيلم"]);
            assert_eq!(details.year, Some(2010));
            assert_eq!(details.layout, Layout::Standalone);
        }

        #[test]
        fn test_optional_fields() {
            let html = r#"
                <div class="Title--Content--Single-begin"><h1>Film</h1></div>
                <ul><li><span>سنة الإنتاج</span><p>غير معروف</p></li></ul>"#;
            let details = DetailsPage::parse(html, &base());

            assert_eq!(details.title, "Film");
            assert_eq!(details.poster_url, None);
            assert_eq!(details.description, None);
            assert!(details.genres.is_empty());
            assert_eq!(details.year, None);
        }

        #[test]
        fn test_franchise() {
            let html = r#"
                <div class="Title--Content--Single-begin"><h1>مشاهدة فيلم Saw II مترجم (2005)</h1></div>
                <singlerelated class="hasdivider">
                    <span>سلسلة افلام Saw</span>
                    <div class="Thumb--GridItem"><a href="/watch/saw/">مشاهدة فيلم Saw مترجم</a></div>
                    <div class="Thumb--GridItem"><a>broken</a></div>
                    <div class="Thumb--GridItem"><a href="/watch/saw-3/">مشاهدة فيلم Saw III (2006) مترجم</a></div>
                </singlerelated>"#;
            let details = DetailsPage::parse(html, &base());

            let Layout::Franchise(episodes) = details.layout else {
                panic!("expected a franchise")
            };

            assert_eq!(episodes.len(), 2);
            assert_eq!(episodes[0].display_name, "Saw");
            assert_eq!(episodes[0].episode, 1);
            assert_eq!(episodes[0].season, None);
            assert_eq!(episodes[0].source_url.as_str(), "https://wecima.show/watch/saw/");
            assert_eq!(episodes[1].display_name, "Saw III (2006)");
            assert_eq!(episodes[1].episode, 3);
        }

        #[test]
        fn test_single_season() {
            let html = r#"
                <div class="Episodes--Seasons--Episodes">
                    <a href="/episode/dark-1/"><episodeTitle>الحلقة 1</episodeTitle></a>
                    <a href="/episode/dark-2/"><episodeTitle>الحلقة 2</episodeTitle></a>
                    <a href="/episode/dark-final/"><episodeTitle>الحلقة الاخيرة</episodeTitle></a>
                </div>"#;
            let details = DetailsPage::parse(html, &base());

            let Layout::Series(plan) = details.layout else {
                panic!("expected a series")
            };
            assert!(plan.seasons.is_empty());

            let episodes = episode_refs(1, &plan.current);
            assert_eq!(episodes.len(), 3);
            assert_eq!(episodes[0].display_name, "الموسم 1 : الحلقة 1");
            assert_eq!(episodes[1].episode, 2);
            assert_eq!(episodes[1].season, Some(1));
            assert_eq!(episodes[2].episode, 1);
            assert_eq!(
                episodes[2].source_url.as_str(),
                "https://wecima.show/episode/dark-final/"
            );
        }

        #[test]
        fn test_seasons_are_reversed() {
            let html = r#"
                <div class="List--Seasons--Episodes">
                    <a class="selected" href="/series/dark-s3/">الموسم 3</a>
                    <a href="/series/dark-s2/">الموسم الثاني</a>
                    <a href="/series/dark-s1/">الموسم 1</a>
                </div>"#;
            let page = Html::parse_document(html);
            let seasons = parse_seasons(&page);

            let numbers = seasons.iter().map(|s| s.number).collect::<Vec<_>>();
            assert_eq!(numbers, vec![1, 2, 3]);
            assert_eq!(seasons[1].href, "/series/dark-s2/");
            assert_eq!(
                seasons.iter().map(|s| s.selected).collect::<Vec<_>>(),
                vec![false, false, true]
            );
        }

        #[test]
        fn test_season_list_alone_is_series() {
            let html = r#"<div class="List--Seasons--Episodes"><a href="/s1/">الموسم 1</a></div>"#;
            let details = DetailsPage::parse(html, &base());

            assert!(matches!(details.layout, Layout::Series(_)));
        }
    }

    mod servers {
        use super::*;

        const SERVERS_HTML: &str = r#"
            <ul class="WatchServersList">
                <li class="MyCimaServer"><btn data-url="https://wecima.show/run/watch/abc?Key=xyz">سيرفر وي سيما</btn></li>
                <li class="MyCimaServer"><btn data-url="https://wecima.show/embed/abc">سيرفر وي سيما 2</btn></li>
                <li><btn data-url="https://vidshare.tv/embed-1.html"><strong>VidShare Server 1</strong></btn></li>
                <li><btn>no url</btn></li>
                <li><span>no button</span></li>
                <li><btn data-url="//dood.watch/e/1">Dood</btn></li>
            </ul>"#;

        #[test]
        fn test_parse_servers() {
            let page = Html::parse_document(SERVERS_HTML);
            let servers = parse_servers(&page, &base());

            let kinds = servers.iter().map(|s| s.kind).collect::<Vec<_>>();
            assert_eq!(
                kinds,
                vec![
                    ServerKind::MyCima,
                    ServerKind::MyCima,
                    ServerKind::VidShare,
                    ServerKind::DoodStream
                ]
            );
            assert_eq!(servers[2].name, "vidshare server 1");
            assert_eq!(servers[3].url.as_str(), "https://dood.watch/e/1");

            assert!(servers[0].kind.is_direct(&servers[0].url));
            assert!(!servers[1].kind.is_direct(&servers[1].url));
            assert!(!servers[2].kind.is_direct(&servers[2].url));
        }

        #[test]
        fn test_direct_link() {
            let url = Url::parse("https://wecima.show/run/watch/abc?Key=xyz").unwrap();
            let link = direct_link(&url, &base()).unwrap();

            assert_eq!(
                link.media_url.as_str(),
                "https://wecima.show/run/watch/abc/?Key=xyz&auto=true"
            );
            assert_eq!(link.provider_label, "WeCima");
            assert_eq!(link.display_label, "WeCima Server");
            assert_eq!(link.referer_url, base());
            assert_eq!(link.quality, Quality::Unknown);
            assert!(!link.is_segmented);
        }
    }
}
