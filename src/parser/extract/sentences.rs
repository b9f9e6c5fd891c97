use std::sync::LazyLock;

use regex::Regex;

use super::{OrderedSet, Recognizer};

/// Group 1 holds the sentencing clause.
static SENTENCE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)sentenced to\s+([^.;]+)",
        r"(?i)jailed for\s+([^.;]+)",
        r"(?i)imprisonment of\s+([^.;]+)",
        r"(?i)(?:received|given) (?:a|an)\s+([^.;]+)\s+(?:sentence|term|custodial)",
        r"(?i)ordered to (?:pay|forfeit|repay)\s+([^.;]+)",
        r"(?i)(\d+[- ](?:year|month)s?\s+(?:sentence|imprisonment|jail term|custodial sentence))",
        r"(?i)(\d+\s+years?\s+(?:and|&)\s+\d+\s+months?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Descriptions of custodial terms and financial orders.
pub struct Sentences;

impl Recognizer for Sentences {
    type Entity = String;

    fn extract(&self, text: &str) -> Vec<String> {
        let mut found = OrderedSet::default();
        for re in SENTENCE_RES.iter() {
            for caps in re.captures_iter(text) {
                let clause = caps[1].trim();
                if !clause.is_empty() {
                    found.insert(clause);
                }
            }
        }
        found.into_vec()
    }
}
