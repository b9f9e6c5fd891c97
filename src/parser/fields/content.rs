use crate::parser::dom::Dom;

/// Paragraph selector groups competing on paragraph count.
const PARAGRAPH_GROUPS: &[&str] = &[
    "article p",
    ".uk-article p",
    ".tm-main p",
    ".article-body p",
    ".content-area p",
    ".entry-content p",
    ".main-content p",
];

/// Containers whose paragraphs are taken when no group matched.
const CONTAINERS: &[&str] = &[
    "article",
    ".article",
    ".post",
    ".entry",
    "main",
    ".content",
    "#content",
    ".main-content",
    ".article-content",
];

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// The paragraphs chosen for the article body and the selector that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub selector: String,
    pub paragraphs: Vec<String>,
}

impl Content {
    pub fn text(&self) -> String {
        self.paragraphs.join(PARAGRAPH_SEPARATOR)
    }
}

pub fn extract(dom: &Dom) -> Content {
    let mut best = Content {
        selector: String::new(),
        paragraphs: Vec::new(),
    };

    // Ties keep the earlier group.
    for sel in PARAGRAPH_GROUPS {
        let found = dom.texts(sel);
        if found.len() > best.paragraphs.len() {
            best = Content {
                selector: sel.to_string(),
                paragraphs: found,
            };
        }
    }
    if !best.paragraphs.is_empty() {
        return best;
    }

    for container in CONTAINERS {
        let selector = format!("{} p", container);
        let found = dom.texts(&selector);
        if !found.is_empty() {
            return Content {
                selector,
                paragraphs: found,
            };
        }
    }

    Content {
        selector: "p".to_string(),
        paragraphs: dom.texts("p"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn largest_group_wins() {
        let dom = Dom::parse(
            "<article><p>One</p></article>\
             <div class='entry-content'><p>A</p><p>B</p><p> </p><p>C</p></div>",
        );
        let content = extract(&dom);
        assert_eq!(content.selector, ".entry-content p");
        assert_eq!(content.text(), "A\n\nB\n\nC");
    }

    #[test]
    fn selection_is_stable_across_runs() {
        let html = "<div class='uk-article'><p>x</p><p>y</p></div><article><p>z</p><p>w</p></article>";
        let first = extract(&Dom::parse(html));
        let second = extract(&Dom::parse(html));
        assert_eq!(first, second);
        assert_eq!(first.selector, "article p");
    }

    #[test]
    fn container_fallback() {
        let dom = Dom::parse("<main><div><p>Inside main</p></div></main><p>Outside</p>");
        let content = extract(&dom);
        assert_eq!(content.selector, "main p");
        assert_eq!(content.paragraphs, vec!["Inside main"]);
    }

    #[test]
    fn document_fallback() {
        let dom = Dom::parse("<div><p>Loose one</p><p>Loose two</p></div>");
        let content = extract(&dom);
        assert_eq!(content.selector, "p");
        assert_eq!(content.text(), "Loose one\n\nLoose two");
    }

    #[test]
    fn no_paragraphs_at_all() {
        let content = extract(&Dom::parse("<div>No paragraphs</div>"));
        assert!(content.paragraphs.is_empty());
        assert_eq!(content.text(), "");
    }
}
