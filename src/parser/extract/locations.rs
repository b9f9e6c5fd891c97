use std::sync::LazyLock;

use regex::Regex;

use super::{OrderedSet, Recognizer};
use crate::vocab::UK_LOCATIONS;

const MIN_CHARS: usize = 4;

static POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{1,2}[0-9]{1,2}[A-Z]?\s[0-9][A-Z]{2}").unwrap());

static GAZETTEER_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    UK_LOCATIONS
        .iter()
        .map(|name| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name))).unwrap();
            (*name, re)
        })
        .collect()
});

/// Capture group 1 when present, else the whole match.
static CONTEXT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:in|near|from|at)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"([A-Z][a-z]+\s(?:City|Town|Village|County))\b",
        r"[A-Z][a-z]+ (?:Street|Road|Avenue|Lane|Park|Square)",
        r"(?:port of|area of|region of)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Postcodes, gazetteer places and contextual place phrases.
pub struct Locations;

impl Recognizer for Locations {
    type Entity = String;

    fn extract(&self, text: &str) -> Vec<String> {
        let mut found = OrderedSet::default();

        for m in POSTCODE_RE.find_iter(text) {
            found.insert(m.as_str().to_uppercase());
        }

        for (name, re) in GAZETTEER_RES.iter() {
            if re.is_match(text) {
                found.insert(*name);
            }
        }

        for re in CONTEXT_RES.iter() {
            for caps in re.captures_iter(text) {
                let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                let place = m.as_str().trim();
                if place.chars().count() >= MIN_CHARS {
                    found.insert(place);
                }
            }
        }

        found.into_vec()
    }
}
