use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Recognizer;
use crate::normalize::{context_window, scale_multiplier};

const CONTEXT_CHARS: usize = 50;

/// Group 1 is the figure, group 2 the optional scale word.
static MONEY_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"Â?£\s*([\d,]+(?:\.\d+)?)(?:\s*((?i:million|billion|thousand|k))\b)?",
        r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:(million|billion|thousand|k)\b\s*)?pounds",
        r"(?i)(\d[\d,]*(?:\.\d+)?)\s*(?:(million|billion|thousand|k)\b\s*)?sterling",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[derive(Debug, Clone, PartialEq)]
pub struct MoneyAmount {
    pub original_text: String,
    /// GBP after the scale word is applied.
    pub amount: f64,
    pub context: String,
}

/// Sterling amounts written as `£N`, `N pounds` or `N sterling`, with an optional scale word.
/// Every match is kept, repeats included.
pub struct MoneyAmounts;

impl Recognizer for MoneyAmounts {
    type Entity = MoneyAmount;

    fn extract(&self, text: &str) -> Vec<MoneyAmount> {
        MONEY_RES
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| amount_from(text, &caps))
            .collect()
    }
}

fn amount_from(text: &str, caps: &Captures) -> Option<MoneyAmount> {
    let value: f64 = caps[1].replace(',', "").parse().ok()?;
    let multiplier = scale_multiplier(caps.get(2).map(|m| m.as_str()));
    let original_text = caps[0].trim().to_string();
    let context = context_window(text, &original_text, CONTEXT_CHARS).to_string();
    Some(MoneyAmount {
        amount: value * multiplier,
        context,
        original_text,
    })
}
