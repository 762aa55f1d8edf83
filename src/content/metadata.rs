//! Metadata normalization
//!
//! Turns raw front-matter strings into the typed values a [`super::Post`]
//! carries. Nothing here fails: missing or malformed values fall back to
//! a default.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use super::FrontMatter;

/// Accepted date formats, tried in order
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Shortest tag string that still has content between its brackets
const MIN_TAGS_LEN: usize = 4;

/// Display title: the `title` field, or one derived from the slug
pub fn title(fm: &FrontMatter, slug: &str) -> String {
    match fm.get("title") {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => title_case(&slug.replace('-', " ")),
    }
}

/// Publication date from the `date` field, or now
pub fn date(fm: &FrontMatter) -> DateTime<Local> {
    fm.get("date")
        .and_then(parse_date)
        .unwrap_or_else(Local::now)
}

/// Tags from the `tags` field
pub fn tags(fm: &FrontMatter) -> Vec<String> {
    fm.get("tags").map(parse_tags).unwrap_or_default()
}

/// Parse a date string against [`DATE_FORMATS`]
///
/// Values without a time component are taken as local midnight.
pub fn parse_date(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    DATE_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(s, fmt).ok().or_else(|| {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
        Local.from_local_datetime(&naive).earliest()
    })
}

/// Parse a `[tag1, tag2]` list
///
/// The first and last characters are taken to be the brackets. Strings
/// too short to hold brackets around anything yield no tags.
pub fn parse_tags(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < MIN_TAGS_LEN {
        return Vec::new();
    }

    let inner: String = chars[1..chars.len() - 1].iter().collect();

    inner
        .split(|c: char| c == ',' || c == ' ')
        .map(|tag| tag.trim().trim_matches('"'))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Capitalize each whitespace-separated word
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
