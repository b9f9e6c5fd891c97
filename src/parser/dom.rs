use scraper::{ElementRef, Html, Selector};

/// Paragraphs of the main article body, in document order.
pub const LEAD_PARAGRAPHS: &str = "article p, .uk-article p, .tm-main p";

/// Permissive HTML tree. Parsing never fails; malformed markup yields a best-effort tree.
pub struct Dom {
    html: Html,
}

impl Dom {
    pub fn parse(raw: &str) -> Self {
        Dom {
            html: Html::parse_document(raw),
        }
    }

    /// All elements matching `selector`. An invalid selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<ElementRef<'_>> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let found: Vec<ElementRef<'_>> = self.html.select(&sel).collect();
        found
    }

    pub fn first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(selector).ok()?;
        let found = self.html.select(&sel).next();
        found
    }

    pub fn last(&self, selector: &str) -> Option<ElementRef<'_>> {
        let sel = Selector::parse(selector).ok()?;
        let found = self.html.select(&sel).last();
        found
    }

    /// Trimmed, non-empty text of every match.
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.select(selector)
            .into_iter()
            .map(|el| element_text(el).trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Text of all matches concatenated, trimmed.
    pub fn joined_text(&self, selector: &str) -> String {
        self.select(selector)
            .into_iter()
            .map(element_text)
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// First non-empty value of `attr` on the first element matching `selector`.
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.first(selector)?
            .value()
            .attr(attr)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// `content` if present and non-empty, else `src`.
pub fn content_or_src(element: ElementRef) -> Option<String> {
    let value = element.value();
    value
        .attr("content")
        .filter(|v| !v.is_empty())
        .or_else(|| value.attr("src").filter(|v| !v.is_empty()))
        .map(str::to_string)
}
