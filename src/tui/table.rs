use owo_colors::OwoColorize;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Modify, Style,
        object::{Columns, Rows},
        themes::Colorization,
    },
};

use super::style::*;

fn build_table<const N: usize>(
    headers: Vec<&str>,
    rows: Vec<Vec<String>>,
    colors: [Color; N],
) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Colorization::columns(colors))
        .with(Modify::new(Rows::first()).with(TABLE_HEADER_COLOR))
        .with(Modify::new(Columns::first()).with(Alignment::center()));

    table
}

/// Builds a table with consistent styling for catalog and search results
pub fn build_catalog_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    build_table(headers, rows, TABLE_COLORS_CATALOG).to_string()
}

/// Builds a table for episode selection
pub fn build_episodes_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    let mut table = build_table(headers, rows, TABLE_COLORS_EPISODES);
    table.with(Modify::new(Columns::one(1)).with(Alignment::center()));

    table.to_string()
}

/// Builds a table for playable links
pub fn build_links_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    build_table(headers, rows, TABLE_COLORS_LINKS).to_string()
}

/// Prints a selection prompt with consistent formatting
pub fn print_prompt(instructions: &str) {
    println!("\n{} {}", "::".red(), instructions.bold());
}

/// Prints a title header with consistent formatting
pub fn print_title(title: &str) {
    let formatted = title.cyan().bold().to_string();
    println!("{formatted}\n");
}
