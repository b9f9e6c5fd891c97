use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use regex::Regex;

use super::dom::Dom;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

/// Free-text date shapes, tried in this order. Matches are returned verbatim.
static DATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        format!(r"\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}}"),
        r"\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}".to_string(),
        format!(r"(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?,\s+\d{{4}}"),
        r"\d{4}-\d{2}-\d{2}".to_string(),
        r"(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday),\s+\w+\s+\d{1,2},\s+\d{4}".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

const META_DATE_SELECTORS: &[&str] = &[
    "meta[name=\"date\"]",
    "meta[property=\"article:published_time\"]",
];

const DISPLAY_FORMAT: &str = "%d %B %Y";

/// First match of the first date shape that matches anywhere in `text`.
pub fn first_date(text: &str) -> Option<String> {
    DATE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

/// Every match of every date shape, grouped by shape.
pub fn all_dates(text: &str) -> Vec<String> {
    DATE_RES
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Publication date from page metadata, as "DD Month YYYY".
/// Missing or unparseable metadata yields `None`.
pub fn meta_date(dom: &Dom) -> Option<String> {
    let raw = META_DATE_SELECTORS
        .iter()
        .find_map(|sel| dom.first_attr(sel, "content"))?;
    parse_loose(&raw).map(|d| d.format(DISPLAY_FORMAT).to_string())
}

/// Processing date, used when nothing else is found.
pub fn today() -> String {
    Local::now().format(DISPLAY_FORMAT).to_string()
}

fn parse_loose(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    ["%Y-%m-%d", "%d %B %Y", "%B %d, %Y", "%d/%m/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
