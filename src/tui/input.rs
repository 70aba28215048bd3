use std::collections::BTreeSet;

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rustyline::{ColorMode, DefaultEditor, config::Configurer};

use crate::range::Range;

pub enum Command {
    Quit,
    Default(String),
}

/// Reads one line from the terminal
pub fn parse_commands() -> Result<Command> {
    let mut rl = DefaultEditor::new()?;
    rl.set_color_mode(ColorMode::Enabled);

    let line = match rl.readline(&"~❯ ".red().to_string()) {
        Ok(line) => line.trim().to_owned(),
        Err(err) => bail!(err),
    };

    Ok(match line.as_str() {
        "q" | "Q" => Command::Quit,
        _ => Command::Default(line),
    })
}

/// Turns a selection such as `1 3-5, 8-` into sorted, unique positions.
/// Open ranges run up to `last`.
pub fn parse_input(line: &str, last: usize) -> Result<Vec<usize>> {
    let mut selected = BTreeSet::new();

    for token in line.split([' ', ',']).filter(|t| !t.is_empty()) {
        let Ok(range) = Range::parse(token, Some(last)) else {
            bail!("Invalid input `{token}`")
        };
        selected.extend(range);
    }

    Ok(selected.into_iter().collect())
}
