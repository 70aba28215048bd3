pub mod input;
pub mod progress;
pub mod selector;
pub mod style;
pub mod table;

use anyhow::Result;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use wecima::{CatalogEntry, PlayableLink, TitleDetails};

use progress::ProgressManager;
use table::{build_catalog_table, build_episodes_table, build_links_table, print_title};

/// Main TUI struct for managing terminal user interface
pub struct Tui {
    progress: ProgressManager,
}

impl Default for Tui {
    fn default() -> Self {
        Self::new()
    }
}

impl Tui {
    pub fn new() -> Self {
        Self {
            progress: ProgressManager::new(),
        }
    }

    pub fn add_bar(&self) -> ProgressBar {
        self.progress.add_bar()
    }

    pub fn print_catalog(title: &str, entries: &[CatalogEntry]) {
        let rows = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    (i + 1).to_string(),
                    e.title.clone(),
                    e.content_type.to_string(),
                    e.href.to_string(),
                ]
            })
            .collect();

        let table = build_catalog_table(vec!["Index", "Title", "Type", "Link"], rows);

        print_title(title);
        println!("{table}");
    }

    pub fn print_details(details: &TitleDetails) {
        print_title(&details.title);

        let field = |name: &str, value: String| println!("{} {value}", format!("{name}:").bold());
        field("Type", details.content_type.to_string());
        if let Some(year) = details.year {
            field("Year", year.to_string());
        }
        if !details.genres.is_empty() {
            field("Genres", details.genres.join(", "));
        }
        if let Some(poster) = &details.poster_url {
            field("Poster", poster.to_string());
        }
        if let Some(description) = &details.description {
            println!("\n{description}");
        }
        println!();

        match details.play_url() {
            Some(url) => field("Play", url.to_string()),
            None => {
                let rows = selector::episode_rows(details);
                let table = build_episodes_table(vec!["Index", "Season", "Episode"], rows);
                println!("{table}");
            }
        }
    }

    pub fn print_links(links: &[PlayableLink]) {
        let rows = selector::link_rows(links)
            .into_iter()
            .zip(links)
            .map(|(mut row, l)| {
                row.push(l.media_url.to_string());
                row
            })
            .collect();

        let table = build_links_table(vec!["Index", "Server", "Quality", "Kind", "Link"], rows);
        println!("{table}");
    }

    pub fn select_link(links: &[PlayableLink]) -> Result<&PlayableLink> {
        selector::select_link(links)
    }

    pub fn select_episodes(details: &TitleDetails) -> Result<Vec<usize>> {
        selector::select_episodes(details)
    }
}
