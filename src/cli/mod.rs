use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use wecima::{Config, PassthroughExtractor, Section, WeCima, config};

mod browse;
mod download;
mod stream;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default)]
pub enum SectionArg {
    #[default]
    TopSeries,
    Movies,
    Series,
    Anime,
}

impl From<SectionArg> for Section {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::TopSeries => Section::TopSeries,
            SectionArg::Movies => Section::Movies,
            SectionArg::Series => Section::Series,
            SectionArg::Anime => Section::Anime,
        }
    }
}

/// Browse, stream and download from WeCima
#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// Site origin, overrides the configured one
    #[arg(long, global = true, env = "WECIMA_ORIGIN")]
    origin: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    #[command(alias = "h")]
    Home(browse::HomeArgs),
    #[command(alias = "s")]
    Search(browse::SearchArgs),
    #[command(alias = "i")]
    Info(browse::InfoArgs),
    #[command(alias = "l")]
    Links(browse::LinksArgs),
    Stream(stream::Args),
    #[command(alias = "d")]
    Download(download::Args),
    Config(ConfigArgs),
    /// Delete the configuration file
    Clean,
}

/// Save site settings
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
struct ConfigArgs {
    /// Site origin (eg: https://wecima.show)
    #[arg(long = "set-origin", name = "URL")]
    origin: Option<String>,

    /// User agent sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Proxy for every request (eg: http://127.0.0.1:8080)
    #[arg(long)]
    proxy: Option<String>,
}

pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Home(cmd) => browse::home(cmd, args.origin).await,
        Command::Search(cmd) => browse::search(cmd, args.origin).await,
        Command::Info(cmd) => browse::info(cmd, args.origin).await,
        Command::Links(cmd) => browse::links(cmd, args.origin).await,
        Command::Stream(cmd) => stream::execute(cmd, args.origin).await,
        Command::Download(cmd) => download::execute(cmd, args.origin).await,
        Command::Config(cmd) => save_config(cmd),
        Command::Clean => config::clean().context("Unable to delete configuration"),
    }
}

/// Loads the saved configuration, applying the origin override
fn load_config(origin: Option<String>) -> Result<Config> {
    let mut config = Config::load().context("Unable to load configuration")?;
    if let Some(origin) = origin {
        config.origin = config::parse_origin(&origin)?;
    }

    Ok(config)
}

fn site(origin: Option<String>) -> Result<WeCima<PassthroughExtractor>> {
    let config = load_config(origin)?;

    Ok(WeCima::new(&config, PassthroughExtractor)?)
}

fn save_config(cmd: ConfigArgs) -> Result<()> {
    let mut config = load_config(cmd.origin)?;
    if let Some(user_agent) = cmd.user_agent {
        config = config.user_agent(&user_agent);
    }
    if cmd.proxy.is_some() {
        config = config.proxy(cmd.proxy);
    }

    config.save().context("Unable to save configuration")?;
    println!(
        "{} {}",
        "Saved".green(),
        config::config_path().display().bold()
    );

    Ok(())
}
