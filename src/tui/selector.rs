use std::process::exit;

use anyhow::{Result, ensure};
use wecima::{PlayableLink, TitleDetails};

use super::input::{Command, parse_commands, parse_input};
use super::table::{build_episodes_table, build_links_table, print_prompt, print_title};

pub fn episode_rows(details: &TitleDetails) -> Vec<Vec<String>> {
    details
        .episodes()
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let season = e.season.map(|s| s.to_string()).unwrap_or_else(|| "•".into());
            vec![(i + 1).to_string(), season, e.display_name.clone()]
        })
        .collect()
}

pub fn link_rows(links: &[PlayableLink]) -> Vec<Vec<String>> {
    links
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let kind = if l.is_segmented { "HLS" } else { "MP4" };
            vec![
                (i + 1).to_string(),
                l.display_label.clone(),
                l.quality.to_string(),
                kind.to_string(),
            ]
        })
        .collect()
}

/// Selects one playable link
pub fn select_link(links: &[PlayableLink]) -> Result<&PlayableLink> {
    if let [link] = links {
        return Ok(link);
    }

    let table = build_links_table(vec!["Index", "Server", "Quality", "Kind"], link_rows(links));

    println!("{table}");
    print_prompt("Pick a server (eg: 2) [<enter> for the first, <q> for exit]");

    let index = match parse_commands()? {
        Command::Default(input) => parse_input(&input, links.len())?
            .first()
            .copied()
            .unwrap_or(1),
        Command::Quit => exit(0),
    };
    println!();

    links
        .get(index.saturating_sub(1))
        .ok_or_else(|| anyhow::anyhow!("Invalid input"))
}

/// Selects episodes of a title, as positions in its episode list
pub fn select_episodes(details: &TitleDetails) -> Result<Vec<usize>> {
    let count = details.episodes().len();

    let table = build_episodes_table(vec!["Index", "Season", "Episode"], episode_rows(details));

    print_title(&details.title);
    println!("{table}");
    print_prompt("Make your selection (eg: 1 2 3 or 1-3) [<enter> for all, <q> for exit]");

    let selected: Vec<_> = match parse_commands()? {
        Command::Default(input) if input.is_empty() => (0..count).collect(),
        Command::Default(input) => parse_input(&input, count)?
            .into_iter()
            .filter(|i| (1..=count).contains(i))
            .map(|i| i - 1)
            .collect(),
        Command::Quit => exit(0),
    };
    println!();

    ensure!(!selected.is_empty(), "Invalid input");

    Ok(selected)
}
