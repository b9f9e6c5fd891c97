use std::sync::LazyLock;

use regex::Regex;

use super::{OrderedSet, Recognizer};
use crate::vocab::LAW_ENFORCEMENT_ORGS;

const MIN_CHARS: usize = 3;

/// Group 1 is the recorded name.
static CONTEXT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:Police|Unit|Task Force|Agency|Force)\b",
        r"(?:working with|partnered with|alongside)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"(?:Operation|op)\s+([A-Z][a-z]+)",
        r"([A-Z][A-Z0-9]+)\s+(?:officers|investigation|operation)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Named law-enforcement bodies, partner phrases, operation names and acronyms.
pub struct Organizations;

impl Recognizer for Organizations {
    type Entity = String;

    fn extract(&self, text: &str) -> Vec<String> {
        let mut found = OrderedSet::default();

        for org in LAW_ENFORCEMENT_ORGS {
            if text.contains(org) {
                found.insert(*org);
            }
        }

        for re in CONTEXT_RES.iter() {
            for caps in re.captures_iter(text) {
                let Some(m) = caps.get(1).or_else(|| caps.get(0)) else {
                    continue;
                };
                if m.as_str().chars().count() >= MIN_CHARS {
                    found.insert(m.as_str());
                }
            }
        }

        found.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bodies_by_substring() {
        let found = Organizations.extract("The National Crime Agency and Border Force seized the load.");
        assert!(found.contains(&"National Crime Agency".to_string()));
        assert!(found.contains(&"Border Force".to_string()));
    }

    #[test]
    fn operation_names_and_partners() {
        let found = Organizations.extract(
            "Operation Venetic was run working with Dutch Customs. NCA officers made arrests.",
        );
        assert!(found.contains(&"Venetic".to_string()));
        assert!(found.contains(&"Dutch Customs".to_string()));
        assert!(found.contains(&"NCA".to_string()));
    }

    #[test]
    fn force_phrase_records_leading_name() {
        let found = Organizations.extract("Officers from Kent Police attended.");
        assert!(found.contains(&"Kent".to_string()));
    }

    #[test]
    fn short_acronyms_dropped() {
        let found = Organizations.extract("UK officers attended.");
        assert!(!found.contains(&"UK".to_string()));
    }

    #[test]
    fn nothing_found() {
        assert!(Organizations.extract("a quiet day").is_empty());
    }
}
