use std::sync::LazyLock;

use regex::Regex;

use super::OrderedSet;
use crate::parser::dates;
use crate::parser::dom::Dom;
use crate::parser::fields::date::last_paragraph_date;

static YEAR_MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|during|since|from|until|by|before|after)\s+\d{4}\b").unwrap()
});

/// Every date-like mention in the article, kept in the form it was found.
///
/// Needs the DOM as well as the body text, so it sits outside [`super::Recognizer`].
pub fn extract(dom: &Dom, content: &str) -> Vec<String> {
    let mut found = OrderedSet::default();

    if let Some(published) = dates::meta_date(dom) {
        found.insert(published);
    }
    for date in dates::all_dates(content) {
        found.insert(date);
    }
    for m in YEAR_MENTION_RE.find_iter(content) {
        found.insert(m.as_str());
    }
    let time_text = dom.joined_text("time");
    if !time_text.is_empty() {
        found.insert(time_text);
    }
    if let Some(date) = last_paragraph_date(dom) {
        found.insert(date);
    }

    found.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gathers_all_sources() {
        let dom = Dom::parse(
            r#"<head><meta name="date" content="2024-01-09"></head>
               <body><time>Today</time>
               <article><p>Body</p><p>Issued 8 Jan 2024</p></article></body>"#,
        );
        let content = "The plot ran from 2019 until 2021 and ended on 5 March 2022.";
        let timeline = extract(&dom, content);
        assert_eq!(
            timeline,
            vec![
                "09 January 2024",
                "5 March 2022",
                "from 2019",
                "until 2021",
                "Today",
                "8 Jan 2024",
            ]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let dom = Dom::parse("<article><p>On 1 May 2020.</p></article>");
        let timeline = extract(&dom, "On 1 May 2020. Again 1 May 2020.");
        assert_eq!(timeline, vec!["1 May 2020"]);
    }

    #[test]
    fn empty_when_nothing_dated() {
        assert!(extract(&Dom::parse("<p>x</p>"), "no dates").is_empty());
    }
}
