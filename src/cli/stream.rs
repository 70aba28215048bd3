use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tokio::process::Command;
use which::which;
use wecima::Provider;

use crate::tui::Tui;

/// Play an episode or movie in a media player
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct Args {
    /// Episode or movie page url
    pub url: String,
}

pub async fn execute(cmd: Args, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;

    let mut links = vec![];
    site.resolve_links(&cmd.url, |_| {}, |l| links.push(l)).await?;
    ensure!(!links.is_empty(), "No link found");

    let link = Tui::select_link(&links)?;
    let referrer = &link.referer_url;

    let (player, player_referrer) = match which("mpv") {
        Ok(c) => (c, format!("--referrer={referrer}")),
        _ => (
            which("vlc").unwrap_or_else(|_| PathBuf::from(r"C:\Program Files\VideoLAN\VLC\vlc")),
            format!("--http-referrer={referrer}"),
        ),
    };

    Command::new(player)
        .arg(&player_referrer)
        .arg(link.media_url.as_str())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("`mpv` or `vlc` required for streaming")?;

    Ok(())
}
