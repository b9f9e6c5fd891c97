use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::normalize::{collapse_whitespace, resolve_url};
use crate::report::{ListingArticle, ListingPage};

static ITEM_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".items-row .item.column-1").unwrap());
static TITLE_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".page-header h3 a").unwrap());
static ANY_LINK_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static INTRO_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".intro-text p").unwrap());
static DATE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".intro-date").unwrap());
static IMAGE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".pull-left.item-image a img").unwrap());

static CATEGORY_SELS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".article-info .category-name",
        ".tags-links",
        ".category",
        ".article-info-term",
        ".tag-category",
        ".tags",
        ".article-meta .category",
    ]
    .iter()
    .map(|s| Selector::parse(s).unwrap())
    .collect()
});

/// Labels that name the metadata block rather than a category.
const CATEGORY_LABELS: &[&str] = &["article info", "details", "category"];
const LOOSE_CATEGORY_LABELS: &[&str] = &["article info", "details"];
const LOOSE_CATEGORY_MAX_CHARS: usize = 30;

/// Index entries of a news listing page. Items without both a title and a link are dropped.
pub fn parse_listing(html: &str, site_origin: &str) -> ListingPage {
    let doc = Html::parse_document(html);
    let articles = doc
        .select(&ITEM_SEL)
        .filter_map(|item| parse_item(item, site_origin))
        .collect();
    ListingPage { articles }
}

fn parse_item(item: ElementRef, site_origin: &str) -> Option<ListingArticle> {
    let title = scoped_text(item, &TITLE_LINK_SEL);
    let mut link = first_attr(item, &TITLE_LINK_SEL, "href").unwrap_or_default();
    if link.is_empty() {
        warn!(title = %title, "No headline link, using first link in item");
        link = first_attr(item, &ANY_LINK_SEL, "href").unwrap_or_default();
    }
    if title.is_empty() || link.is_empty() {
        return None;
    }

    let image_url = first_attr(item, &IMAGE_SEL, "src")
        .map(|src| resolve_url(site_origin, &src))
        .unwrap_or_default();

    Some(ListingArticle {
        url: resolve_url(site_origin, &link),
        intro: scoped_text(item, &INTRO_SEL),
        date: scoped_text(item, &DATE_SEL),
        category: category(item),
        image_url,
        title,
    })
}

fn category(item: ElementRef) -> String {
    let labelled = CATEGORY_SELS
        .iter()
        .map(|sel| scoped_text(item, sel))
        .find(|text| !text.is_empty() && !is_label(text, CATEGORY_LABELS));
    if let Some(category) = labelled {
        return category;
    }

    item.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find_map(|el| {
            let class = el.value().attr("class").unwrap_or_default();
            if !(class.contains("cat") || class.contains("tag")) {
                return None;
            }
            let text = el.text().collect::<String>();
            let text = text.trim();
            let usable = !text.is_empty()
                && text.chars().count() < LOOSE_CATEGORY_MAX_CHARS
                && !is_label(text, LOOSE_CATEGORY_LABELS);
            usable.then(|| collapse_whitespace(text))
        })
        .unwrap_or_default()
}

fn is_label(text: &str, labels: &[&str]) -> bool {
    let lower = text.to_lowercase();
    labels.contains(&lower.as_str())
}

/// Text of every match under `scope`, concatenated and whitespace-collapsed.
fn scoped_text(scope: ElementRef, sel: &Selector) -> String {
    let raw: String = scope.select(sel).flat_map(|el| el.text()).collect();
    collapse_whitespace(&raw)
}

fn first_attr(scope: ElementRef, sel: &Selector, attr: &str) -> Option<String> {
    let value = scope
        .select(sel)
        .next()?
        .value()
        .attr(attr)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGIN: &str = "https://www.nationalcrimeagency.gov.uk";

    fn item(inner: &str) -> String {
        format!(
            r#"<div class="items-row"><div class="item column-1">{}</div></div>"#,
            inner
        )
    }

    #[test]
    fn full_entry() {
        let html = item(
            r#"<div class="page-header"><h3><a href="/news/gang-jailed">  Gang
                 jailed </a></h3></div>
               <div class="pull-left item-image"><a href="/news/gang-jailed"><img src="/images/g.jpg"></a></div>
               <div class="intro-date">12 March 2024</div>
               <div class="intro-text"><p>Five men were   jailed.</p></div>
               <div class="article-info"><span class="category-name">Drugs</span></div>"#,
        );
        let page = parse_listing(&html, ORIGIN);
        assert_eq!(page.articles.len(), 1);
        let a = &page.articles[0];
        assert_eq!(a.title, "Gang jailed");
        assert_eq!(a.url, "https://www.nationalcrimeagency.gov.uk/news/gang-jailed");
        assert_eq!(a.image_url, "https://www.nationalcrimeagency.gov.uk/images/g.jpg");
        assert_eq!(a.date, "12 March 2024");
        assert_eq!(a.intro, "Five men were jailed.");
        assert_eq!(a.category, "Drugs");
    }

    #[test]
    fn link_falls_back_to_first_anchor() {
        let html = item(
            r#"<a href="https://other.example/story">Read</a>
               <div class="page-header"><h3><a>Untitled link</a></h3></div>"#,
        );
        let page = parse_listing(&html, ORIGIN);
        assert_eq!(page.articles[0].url, "https://other.example/story");
        assert_eq!(page.articles[0].title, "Untitled link");
    }

    #[test]
    fn entries_without_title_or_link_are_skipped() {
        let html = format!(
            "{}{}",
            item(r#"<div class="page-header"><h3><a href="/x"></a></h3></div>"#),
            item(r#"<div class="page-header"><h3>No anchor</h3></div>"#),
        );
        assert!(parse_listing(&html, ORIGIN).articles.is_empty());
    }

    #[test]
    fn label_text_is_not_a_category() {
        let html = item(
            r#"<div class="page-header"><h3><a href="/a">A</a></h3></div>
               <dl class="article-info"><dt class="article-info-term">Details</dt></dl>
               <span class="tags">Firearms</span>"#,
        );
        assert_eq!(parse_listing(&html, ORIGIN).articles[0].category, "Firearms");
    }

    #[test]
    fn loose_category_from_class_name() {
        let html = item(
            r#"<div class="page-header"><h3><a href="/a">A</a></h3></div>
               <span class="meta-cat"> Cyber </span>"#,
        );
        assert_eq!(parse_listing(&html, ORIGIN).articles[0].category, "Cyber");
    }

    #[test]
    fn page_without_items() {
        let page = parse_listing("<html><body><p>Nothing</p></body></html>", ORIGIN);
        assert!(page.articles.is_empty());
    }
}
