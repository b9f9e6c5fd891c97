use std::sync::LazyLock;

use regex::Regex;

use crate::parser::dom::{element_text, Dom, LEAD_PARAGRAPHS};

static SENTENCE_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").unwrap());

const MIN_LEAD_CHARS: usize = 21;
const MAX_LEAD_CHARS: usize = 299;

/// First body paragraph when it is a sensible length, otherwise the first
/// one or two sentences of the assembled content.
pub fn extract(dom: &Dom, content: &str) -> String {
    if let Some(lead) = dom.first(LEAD_PARAGRAPHS) {
        let lead = element_text(lead).trim().to_string();
        if (MIN_LEAD_CHARS..=MAX_LEAD_CHARS).contains(&lead.chars().count()) {
            return lead;
        }
    }

    if content.is_empty() {
        return String::new();
    }
    let mut sentences = SENTENCE_SPLIT_RE.split(content);
    match (sentences.next(), sentences.next()) {
        (Some(first), Some(second)) => format!("{}. {}", first, second),
        (Some(first), None) => first.to_string(),
        _ => String::new(),
    }
}
