/// Leading "watch movie" marker of movie headings and franchise labels
pub const WATCH_MOVIE: &str = "مشاهدة فيلم ";

/// "Translated" marker, everything from here on is dropped
pub const TRANSLATED: &str = "مترجم";

const LAZY_STYLE_PREFIX: &str = "-image:url(";
const LAZY_STYLE_SUFFIX: &str = ");";

fn before<'a>(input: &'a str, delim: &str) -> &'a str {
    input.split_once(delim).map_or(input, |(head, _)| head)
}

fn ascii_digit(c: char) -> Option<char> {
    let offset = match c {
        '0'..='9' => return Some(c),
        '\u{0660}'..='\u{0669}' => c as u32 - 0x0660,
        '\u{06F0}'..='\u{06F9}' => c as u32 - 0x06F0,
        _ => return None,
    };

    char::from_digit(offset, 10)
}

/// Concatenates every digit of `input`, ASCII or Arabic-Indic, into a number.
///
/// `"الحلقة 12"` gives `12`, `"الموسم ٣"` gives `3`. Labels without digits,
/// or with more digits than fit a `u32`, give `None`.
pub fn parse_number(input: &str) -> Option<u32> {
    input
        .chars()
        .filter_map(ascii_digit)
        .collect::<String>()
        .parse()
        .ok()
}

/// Removes the movie markers from a franchise entry label
pub fn clean_movie_label(label: &str) -> String {
    let mut label = label.to_string();
    while label.contains(WATCH_MOVIE) {
        label = label.replace(WATCH_MOVIE, "");
    }

    before(&label, TRANSLATED).trim().to_string()
}

/// Cleans the heading of a standalone movie page: the production year in
/// parentheses goes first, then the movie markers.
pub fn clean_heading(heading: &str) -> String {
    clean_movie_label(before(heading, " ("))
}

/// Extracts the image url from a `data-lazy-style` attribute such as
/// `--image:url(https://host/poster.jpg);`
pub fn parse_lazy_style(style: &str) -> Option<&str> {
    let (_, rest) = style.split_once(LAZY_STYLE_PREFIX)?;
    let url = before(rest, LAZY_STYLE_SUFFIX).trim_matches(|c| c == '\'' || c == '"');

    (!url.is_empty()).then_some(url)
}

/// Collapses runs of whitespace the way a browser renders text
pub fn normalize_text<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
