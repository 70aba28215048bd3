use std::ops::RangeInclusive;
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Inclusive range of positions typed on the command line, such as `2-5`,
/// `(2..5)` or the open form `2-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    pub start: T,
    pub end: T,
    open: bool,
}

impl<T> Range<T>
where
    T: Copy + FromStr + Ord,
{
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            open: false,
        }
    }

    /// Open ranges contain every value from `start` on
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.start && (self.open || *value <= self.end)
    }

    /// Parses a range and fits it below `last`: open ranges run up to it and
    /// longer ones are cut at it.
    pub fn parse(s: &str, last: Option<T>) -> Result<Self> {
        let range = s.parse::<Self>()?;

        Ok(match last {
            Some(last) if range.open || range.end > last => Self::new(range.start, last),
            _ => range,
        })
    }
}

impl<T> From<Range<T>> for RangeInclusive<T> {
    fn from(val: Range<T>) -> Self {
        val.start..=val.end
    }
}

impl<T> IntoIterator for Range<T>
where
    RangeInclusive<T>: Iterator<Item = T>,
{
    type Item = T;
    type IntoIter = RangeInclusive<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into()
    }
}

impl<T> FromStr for Range<T>
where
    T: Copy + FromStr + Ord,
{
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (start, end) = s
            .split_once("..")
            .or_else(|| s.split_once('-'))
            .unwrap_or((s, s));

        let start = start
            .trim()
            .parse::<T>()
            .ok()
            .with_context(|| format!("Invalid range `{s}`"))?;

        let end = end.trim();
        let range = match end.parse::<T>() {
            Ok(end) if end >= start => Self::new(start, end),
            Ok(_) => bail!("Invalid range `{s}`"),
            Err(_) if end.is_empty() => Self {
                start,
                end: start,
                open: true,
            },
            Err(_) => bail!("Invalid range `{s}`"),
        };

        Ok(range)
    }
}
