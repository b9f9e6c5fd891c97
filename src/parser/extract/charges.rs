use std::sync::LazyLock;

use regex::Regex;

use super::{OrderedSet, Recognizer};

const MIN_CHARS: usize = 6;

/// Group 1 holds the offence.
static CHARGE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:pleaded guilty to|admitted|convicted of|charged with)\s+([^.;]+)",
        r"(?i)(?:charges of|accused of|committed)\s+([^.;]+)",
        r"(?i)found guilty of\s+([^.;]+)",
        r"(?i)arrested (?:on suspicion of|for)\s+([^.;]+)",
        r"(?i)prosecuted for\s+([^.;]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Offences a defendant admitted, was charged with or convicted of.
pub struct Charges;

impl Recognizer for Charges {
    type Entity = String;

    fn extract(&self, text: &str) -> Vec<String> {
        let mut found = OrderedSet::default();
        for re in CHARGE_RES.iter() {
            for caps in re.captures_iter(text) {
                let charge = caps[1].trim();
                if charge.chars().count() >= MIN_CHARS {
                    found.insert(charge);
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
    fn charge_phrases() {
        let found = Charges.extract(
            "He pleaded guilty to conspiracy to import cocaine. She was found guilty of money laundering; \
             a third man was arrested on suspicion of people smuggling.",
        );
        assert_eq!(
            found,
            vec![
                "conspiracy to import cocaine",
                "money laundering",
                "people smuggling",
            ]
        );
    }

    #[test]
    fn short_captures_rejected() {
        assert!(Charges.extract("He admitted it. He was charged with ABH.").is_empty());
    }

    #[test]
    fn duplicates_removed() {
        let found = Charges.extract("Charged with fraud offences. Later charged with fraud offences.");
        assert_eq!(found, vec!["fraud offences"]);
    }
}
