use crate::normalize::resolve_url;
use crate::parser::dom::{content_or_src, Dom};

const IMAGE_SELECTORS: &[&str] = &[
    ".tm-article-image img",
    "article img",
    ".uk-article img",
    "meta[property=\"og:image\"]",
    ".tm-main img",
];

/// Absolute URL of the main article image, or empty.
pub fn extract(dom: &Dom, site_origin: &str) -> String {
    IMAGE_SELECTORS
        .iter()
        .filter_map(|sel| dom.first(sel))
        .find_map(content_or_src)
        .map(|src| resolve_url(site_origin, &src))
        .unwrap_or_default()
}
