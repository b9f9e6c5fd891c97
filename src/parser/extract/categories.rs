use crate::vocab::CATEGORY_KEYWORDS;

/// Topical tags whose keywords occur anywhere in the body or title, case-insensitively.
/// Tags come out in table order; a document can carry any number of them.
pub fn classify(title: &str, content: &str) -> Vec<String> {
    let haystack = format!("{} {}", content, title).to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| haystack.contains(&kw.to_lowercase()))
        })
        .map(|(category, _)| category.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drug_shipment() {
        let tags = classify("Border seizure", "A shipment of cocaine was intercepted at sea.");
        assert_eq!(tags, vec!["Drug trafficking"]);
    }

    #[test]
    fn no_keywords_no_tags() {
        assert!(classify("Annual review", "The agency published its plan.").is_empty());
    }

    #[test]
    fn title_counts_and_tags_accumulate() {
        let tags = classify("Firearms dealer jailed", "He sold a pistol for cash to a gang.");
        assert_eq!(tags, vec!["Firearms", "Money laundering", "Organized crime"]);
    }

    #[test]
    fn keyword_case_is_ignored() {
        assert_eq!(classify("", "CLASS A substances"), vec!["Drug trafficking"]);
    }
}
