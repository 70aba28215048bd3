use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use futures::stream::StreamExt;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use reqwest::Url;
use reqwest::header::{CONTENT_LENGTH, RANGE, REFERER};
use tokio::{fs, io::AsyncWriteExt};
use tokio_stream as stream;
use tracing::{info, warn};
use wecima::{PassthroughExtractor, PlayableLink, Playback, Provider, TitleDetails, WeCima};

use crate::range::Range;
use crate::tui::Tui;

/// Download episodes or movies served by the site's own server
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct Args {
    /// Title page url
    pub url: String,

    /// Maximum number of simultaneous downloads allowed
    #[arg(
        default_value = "4",
        short = 'm',
        long = "max-concurrent",
        name = "MAX"
    )]
    pub dim_buff: usize,

    /// Root path where store files
    #[arg(default_value = ".", short, long)]
    pub dir: PathBuf,

    /// Override existent files
    #[arg(short, long)]
    pub force: bool,

    /// Positions in the episode list to download (es. `1-4` or `1,2,3,4`)
    #[arg(short = 'r', long = "range")]
    pub range: Option<Range<usize>>,
}

/// One file to download
struct Target {
    page: Url,
    filename: String,
}

pub async fn execute(cmd: Args, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;
    let details = site.load_details(&cmd.url).await?;

    let targets = targets(&details, cmd.range)?;
    ensure!(!targets.is_empty(), "No episode found");

    let tui = Tui::new();
    let pool = targets.into_iter().map(|target| {
        let pb = tui.add_bar();
        let (site, dir, force) = (&site, cmd.dir.as_path(), cmd.force);

        async move {
            let name = target.filename.clone();
            download_worker(site, target, dir, force, pb)
                .await
                .with_context(|| format!("Unable to download {name}"))
        }
    });

    let results = stream::iter(pool)
        .buffer_unordered(cmd.dim_buff.max(1))
        .collect::<Vec<_>>()
        .await;

    report(results)
}

/// Prints every failed download, failing when there is at least one
fn report(results: Vec<Result<()>>) -> Result<()> {
    let failed = results
        .into_iter()
        .filter_map(Result::err)
        .inspect(|err| eprintln!("{}", format!("{err:#}").red()))
        .count();
    ensure!(failed == 0, "{failed} download(s) failed");

    Ok(())
}

fn targets(details: &TitleDetails, range: Option<Range<usize>>) -> Result<Vec<Target>> {
    let title = sanitize(&details.title);

    let episodes = match &details.playback {
        Playback::Movie { data_url } => {
            return Ok(vec![Target {
                page: data_url.clone(),
                filename: format!("{title}.mp4"),
            }]);
        }
        Playback::Episodes(episodes) => episodes,
    };

    let positions = match range {
        Some(range) => (0..episodes.len()).filter(|i| range.contains(&(i + 1))).collect(),
        None => Tui::select_episodes(details)?,
    };

    let targets = positions
        .into_iter()
        .filter_map(|i| episodes.get(i))
        .map(|e| {
            let filename = match e.season {
                Some(season) => format!("{title} S{season:02}E{:02}.mp4", e.episode),
                None => format!("{}.mp4", sanitize(&e.display_name)),
            };

            Target {
                page: e.source_url.clone(),
                filename,
            }
        })
        .collect();

    Ok(targets)
}

/// First link that points straight at a media file
fn direct(links: &[PlayableLink]) -> Option<&PlayableLink> {
    links
        .iter()
        .find(|l| !l.is_segmented && l.provider_label == WeCima::<PassthroughExtractor>::NAME)
}

async fn download_worker(
    site: &WeCima<PassthroughExtractor>,
    target: Target,
    dir: &Path,
    force: bool,
    pb: ProgressBar,
) -> Result<()> {
    let mut links = vec![];
    site.resolve_links(target.page.as_str(), |_| {}, |l| links.push(l))
        .await?;

    let Some(link) = direct(&links) else {
        warn!(page = %target.page, "no direct link");
        pb.finish_and_clear();
        anyhow::bail!("No direct link for {}", target.filename);
    };

    let client = site.client();
    let referer = link.referer_url.as_str();

    let source_size: u64 = client
        .head(link.media_url.clone())
        .header(REFERER, referer)
        .send()
        .await?
        .error_for_status()?
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|ct_len| ct_len.to_str().ok())
        .and_then(|ct_len| ct_len.parse().ok())
        .unwrap_or_default();

    let mut dest = {
        if !dir.exists() {
            fs::create_dir_all(dir).await?;
        }

        fs::OpenOptions::new()
            .append(!force)
            .truncate(force)
            .write(force)
            .create(true)
            .open(dir.join(&target.filename))
            .await?
    };

    let file_size = dest.metadata().await?.len();
    ensure!(
        source_size == 0 || file_size < source_size,
        "{} already exists",
        target.filename
    );

    pb.set_position(file_size);
    pb.set_length(source_size);
    pb.set_message(target.filename.clone());
    info!(url = %link.media_url, file = %target.filename, "downloading");

    let mut source = client
        .get(link.media_url.clone())
        .header(RANGE, format!("bytes={file_size}-"))
        .header(REFERER, referer)
        .send()
        .await?
        .error_for_status()?;

    while let Some(chunk) = source.chunk().await? {
        dest.write_all(&chunk).await?;
        pb.inc(chunk.len() as u64);
    }

    pb.finish_with_message(target.filename + " 👍");

    Ok(())
}

/// Replaces characters that are not allowed in file names
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wecima::{ContentType, EpisodeRef, Quality};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn details(playback: Playback) -> TitleDetails {
        TitleDetails {
            title: "Dark: Cycle".into(),
            url: url("https://wecima.show/series/dark/"),
            poster_url: None,
            description: None,
            genres: vec![],
            year: None,
            content_type: ContentType::Series,
            playback,
        }
    }

    fn link(provider: &str, segmented: bool) -> PlayableLink {
        PlayableLink {
            provider_label: provider.into(),
            display_label: format!("{provider} Server"),
            media_url: url("https://cdn.wecima.show/run/a/?Key=1&auto=true"),
            referer_url: url("https://wecima.show/"),
            quality: Quality::Unknown,
            is_segmented: segmented,
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Dark: Cycle / 2"), "Dark_ Cycle _ 2");
        assert_eq!(sanitize(" فيلم "), "فيلم");
    }

    #[test]
    fn test_movie_target() {
        let details = details(Playback::Movie {
            data_url: url("https://wecima.show/watch/dark/"),
        });
        let targets = targets(&details, None).unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].filename, "Dark_ Cycle.mp4");
        assert_eq!(targets[0].page.as_str(), "https://wecima.show/watch/dark/");
    }

    #[test]
    fn test_episode_targets_in_range() {
        let episodes = (1..=4)
            .map(|i| EpisodeRef {
                display_name: format!("الموسم 1 : الحلقة {i}"),
                source_url: url(&format!("https://wecima.show/episode/{i}/")),
                season: Some(1),
                episode: i,
            })
            .collect();
        let details = details(Playback::Episodes(episodes));

        let targets = targets(&details, Some(Range::new(2, 3))).unwrap();

        let names = targets.iter().map(|t| t.filename.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Dark_ Cycle S01E02.mp4", "Dark_ Cycle S01E03.mp4"]);
    }

    #[test]
    fn test_open_range_runs_to_the_last_episode() {
        let episodes = (1..=5)
            .map(|i| EpisodeRef {
                display_name: format!("الموسم 2 : الحلقة {i}"),
                source_url: url(&format!("https://wecima.show/episode/{i}/")),
                season: Some(2),
                episode: i,
            })
            .collect();
        let details = details(Playback::Episodes(episodes));

        let range = "3-".parse::<Range<usize>>().unwrap();
        let targets = targets(&details, Some(range)).unwrap();

        let names = targets.iter().map(|t| t.filename.as_str()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "Dark_ Cycle S02E03.mp4",
                "Dark_ Cycle S02E04.mp4",
                "Dark_ Cycle S02E05.mp4"
            ]
        );
    }

    #[test]
    fn test_report() {
        assert!(report(vec![Ok(()), Ok(())]).is_ok());
        assert!(report(vec![]).is_ok());

        let err = report(vec![Ok(()), Err(anyhow::anyhow!("gone"))]).unwrap_err();
        assert_eq!(err.to_string(), "1 download(s) failed");
    }

    #[test]
    fn test_direct() {
        let links = vec![
            link("DoodStream", false),
            link("WeCima", true),
            link("WeCima", false),
        ];

        assert!(std::ptr::eq(direct(&links).unwrap(), &links[2]));
        assert!(direct(&links[..2]).is_none());
    }
}
