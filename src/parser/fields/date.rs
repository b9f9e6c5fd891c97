use crate::parser::dates;
use crate::parser::dom::{element_text, Dom, LEAD_PARAGRAPHS};

/// Article date: page metadata, then a date in the body, then one in the last
/// body paragraph, then a `<time>` element, then the processing date.
pub fn extract(dom: &Dom, content: &str) -> String {
    dates::meta_date(dom)
        .or_else(|| dates::first_date(content))
        .or_else(|| last_paragraph_date(dom))
        .or_else(|| time_element_text(dom))
        .unwrap_or_else(dates::today)
}

/// Date mentioned in the last body paragraph, where sign-off dates usually sit.
pub fn last_paragraph_date(dom: &Dom) -> Option<String> {
    let last = dom.last(LEAD_PARAGRAPHS)?;
    dates::first_date(element_text(last).trim())
}

fn time_element_text(dom: &Dom) -> Option<String> {
    let text = dom.joined_text("time");
    text.chars().any(|c| c.is_ascii_digit()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_first() {
        let dom = Dom::parse(r#"<head><meta name="date" content="2022-06-01"></head>"#);
        assert_eq!(extract(&dom, "On 3 May 2021 he was arrested."), "01 June 2022");
    }

    #[test]
    fn content_date_is_verbatim() {
        let dom = Dom::parse("<p>x</p>");
        assert_eq!(extract(&dom, "Sentencing took place on March 4th, 2023 at court."), "March 4th, 2023");
    }

    #[test]
    fn last_paragraph_consulted() {
        let dom = Dom::parse("<article><p>Body</p><p>Published 2 Feb 2020</p></article>");
        assert_eq!(extract(&dom, "no dates in content"), "2 Feb 2020");
    }

    #[test]
    fn time_element_needs_a_digit() {
        let dom = Dom::parse("<time>Yesterday</time>");
        assert_eq!(extract(&dom, ""), dates::today());

        let dom = Dom::parse("<time>12/04/19</time>");
        assert_eq!(extract(&dom, ""), "12/04/19");
    }
}
