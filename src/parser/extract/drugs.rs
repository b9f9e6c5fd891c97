use std::sync::LazyLock;

use regex::{Match, Regex};

use super::Recognizer;
use crate::normalize::context_window;

const UNITS: &str = "kg|kilo|kilos|kilogram|kilograms|grams?|tonnes?|lb|pounds?";
const CONTEXT_CHARS: usize = 50;
const CLASS_LOOKAHEAD_CHARS: usize = 20;

static QUANTITY_OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(\d+(?:\.\d+)?)\s*({UNITS})\s+(?:of\s+)?(\w+)")).unwrap()
});

static QUANTITY_WORTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(\d+(?:\.\d+)?)\s*({UNITS})\s+worth of\s+(\w+)")).unwrap()
});

static WEIGHING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(\w+)\s+weighing\s+(\d+(?:\.\d+)?)\s*({UNITS})")).unwrap()
});

static DRUG_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)class\s+[A-D]\s+\w+").unwrap());

#[derive(Debug, Clone, PartialEq)]
pub struct DrugQuantity {
    pub matched_text: String,
    pub quantity: f64,
    /// Lowercased, as written.
    pub unit: String,
    /// Lowercased; `class a drugs` style when the text names a drug class.
    pub substance: String,
    pub context: String,
}

/// Seizure quantities: "N unit of X", "N unit worth of X" and "X weighing N unit".
/// Every match is kept, so repeated seizures of the same amount give repeated rows.
pub struct DrugQuantities;

impl Recognizer for DrugQuantities {
    type Entity = DrugQuantity;

    fn extract(&self, text: &str) -> Vec<DrugQuantity> {
        let mut found = Vec::new();

        for caps in QUANTITY_OF_RE.captures_iter(text) {
            if caps[3].eq_ignore_ascii_case("worth") {
                continue;
            }
            if let Some(drug) = build(text, &caps[0], &caps[1], &caps[2], caps.get(3)) {
                found.push(drug);
            }
        }
        for caps in QUANTITY_WORTH_RE.captures_iter(text) {
            if let Some(drug) = build(text, &caps[0], &caps[1], &caps[2], caps.get(3)) {
                found.push(drug);
            }
        }
        for caps in WEIGHING_RE.captures_iter(text) {
            if let Some(drug) = build(text, &caps[0], &caps[2], &caps[3], caps.get(1)) {
                found.push(drug);
            }
        }
        found
    }
}

fn build(
    text: &str,
    matched: &str,
    quantity: &str,
    unit: &str,
    substance: Option<Match>,
) -> Option<DrugQuantity> {
    let substance = substance?;
    let quantity: f64 = quantity.parse().ok()?;
    let mut name = substance.as_str().to_lowercase();
    if name == "class" {
        if let Some(class) = drug_class_at(text, substance.start()) {
            name = class;
        }
    }
    Some(DrugQuantity {
        matched_text: matched.trim().to_string(),
        quantity,
        unit: unit.to_lowercase(),
        substance: name,
        context: context_window(text, matched, CONTEXT_CHARS).to_string(),
    })
}

/// `class A drugs` and friends, looked for just after the `class` token.
fn drug_class_at(text: &str, start: usize) -> Option<String> {
    let end = text[start..]
        .char_indices()
        .nth(CLASS_LOOKAHEAD_CHARS)
        .map(|(i, _)| start + i)
        .unwrap_or(text.len());
    DRUG_CLASS_RE
        .find(&text[start..end])
        .map(|m| m.as_str().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(found: &[DrugQuantity]) -> Vec<(f64, &str, &str)> {
        found
            .iter()
            .map(|d| (d.quantity, d.unit.as_str(), d.substance.as_str()))
            .collect()
    }

    #[test]
    fn all_three_shapes() {
        let found = DrugQuantities.extract(
            "Officers found 12 KG of Cocaine, 5 kg worth of heroin and cannabis weighing 2 tonnes.",
        );
        assert_eq!(
            summary(&found),
            vec![
                (12.0, "kg", "cocaine"),
                (5.0, "kg", "heroin"),
                (2.0, "tonnes", "cannabis"),
            ]
        );
    }

    #[test]
    fn drug_class_is_recovered() {
        let found = DrugQuantities.extract("They moved 3 kilos of Class A drugs into Dover.");
        assert_eq!(summary(&found), vec![(3.0, "kilos", "class a drugs")]);
        assert_eq!(found[0].matched_text, "3 kilos of Class");
    }

    #[test]
    fn decimal_quantities_and_long_units() {
        let found = DrugQuantities.extract("A 1.5 kilograms block of ketamine and 250 grams ketamine.");
        assert_eq!(
            summary(&found),
            vec![(1.5, "kilograms", "block"), (250.0, "grams", "ketamine")]
        );
    }

    #[test]
    fn separate_seizures_of_same_amount_are_kept() {
        let found = DrugQuantities.extract(
            "Officers seized 2 kg of heroin in Leeds. A week later they found 2 kg of heroin in Hull.",
        );
        assert_eq!(found.len(), 2);
        assert_eq!(summary(&found[1..]), vec![(2.0, "kg", "heroin")]);
        assert!(found[0].context.contains("Leeds"));
    }

    #[test]
    fn nothing_to_find() {
        assert!(DrugQuantities.extract("No seizures were made.").is_empty());
    }
}
