use anyhow::{Result, ensure};
use clap::Parser;
use wecima::Provider;

use super::SectionArg;
use crate::tui::Tui;

/// List a catalog page
#[derive(Parser, Debug)]
pub struct HomeArgs {
    /// Catalog listing
    #[arg(value_enum, default_value_t)]
    pub section: SectionArg,

    /// Page number
    #[arg(short, long, default_value = "1")]
    pub page: u32,
}

/// Search the site
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct SearchArgs {
    /// Search words
    #[arg(required = true)]
    pub query: Vec<String>,
}

/// Show the details of a title
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct InfoArgs {
    /// Title page url
    pub url: String,
}

/// List the playable links of an episode or movie
#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct LinksArgs {
    /// Episode or movie page url
    pub url: String,
}

pub async fn home(cmd: HomeArgs, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;
    let section = cmd.section.into();

    let entries = site.list_page(section, cmd.page.max(1)).await?;
    ensure!(!entries.is_empty(), "Nothing found");

    let title = format!("{} ({})", section.label(), cmd.page.max(1));
    Tui::print_catalog(&title, &entries);

    Ok(())
}

pub async fn search(cmd: SearchArgs, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;
    let query = cmd.query.join(" ");

    let entries = site.search(&query).await?;
    ensure!(!entries.is_empty(), "No title found");

    Tui::print_catalog(&query, &entries);

    Ok(())
}

pub async fn info(cmd: InfoArgs, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;

    let details = site.load_details(&cmd.url).await?;
    Tui::print_details(&details);

    Ok(())
}

pub async fn links(cmd: LinksArgs, origin: Option<String>) -> Result<()> {
    let site = super::site(origin)?;

    let mut links = vec![];
    site.resolve_links(&cmd.url, |_| {}, |l| links.push(l)).await?;
    ensure!(!links.is_empty(), "No link found");

    Tui::print_links(&links);

    Ok(())
}
