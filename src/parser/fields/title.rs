use crate::parser::dom::{element_text, Dom};

/// Returned when no selector yields a real title.
pub const NO_TITLE: &str = "No title found";

/// Listing pages use this as a generic heading; never a real article title.
const PLACEHOLDER: &str = "News";

const TITLE_SELECTORS: &[&str] = &[
    "h1.uk-article-title",
    "h1.page-header",
    "article h1",
    "meta[property=\"og:title\"]",
    "title",
];

pub fn extract(dom: &Dom, site_suffix: &str) -> String {
    TITLE_SELECTORS
        .iter()
        .filter_map(|sel| dom.first(sel))
        .find_map(|el| {
            let title = el
                .value()
                .attr("content")
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| element_text(el).trim().to_string());
            let title = if site_suffix.is_empty() {
                title
            } else {
                title.replacen(site_suffix, "", 1).trim().to_string()
            };
            (!title.is_empty() && title != PLACEHOLDER).then_some(title)
        })
        .unwrap_or_else(|| NO_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = " - National Crime Agency";

    #[test]
    fn article_title_preferred() {
        let dom = Dom::parse(
            "<title>Other - National Crime Agency</title>\
             <h1 class='uk-article-title'> Gang jailed </h1>",
        );
        assert_eq!(extract(&dom, SUFFIX), "Gang jailed");
    }

    #[test]
    fn placeholder_news_is_skipped() {
        let dom = Dom::parse(
            "<head><title>Drugs seized - National Crime Agency</title></head>\
             <body><h1 class='page-header'>News</h1></body>",
        );
        assert_eq!(extract(&dom, SUFFIX), "Drugs seized");
    }

    #[test]
    fn placeholder_behind_site_suffix_is_skipped() {
        let dom = Dom::parse(
            "<head><title>News - National Crime Agency</title></head>\
             <body><h1 class='page-header'>News</h1></body>",
        );
        assert_eq!(extract(&dom, SUFFIX), NO_TITLE);
    }

    #[test]
    fn og_title_uses_content_attribute() {
        let dom = Dom::parse(r#"<head><meta property="og:title" content="Boat seized"></head>"#);
        assert_eq!(extract(&dom, SUFFIX), "Boat seized");
    }

    #[test]
    fn falls_back_to_sentinel() {
        let dom = Dom::parse("<body><h1 class='page-header'>News</h1><p>text</p></body>");
        assert_eq!(extract(&dom, SUFFIX), NO_TITLE);
    }
}
