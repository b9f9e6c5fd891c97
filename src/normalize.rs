use std::sync::LazyLock;

use regex::Regex;

static SLUG_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static SLUG_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SLUG_DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Convert a drug quantity to kilograms. Unknown units pass through unchanged.
pub fn to_kilograms(quantity: f64, unit: &str) -> f64 {
    let unit = unit.to_lowercase();
    if unit.contains("kg") || unit.contains("kilo") {
        quantity
    } else if unit.contains("gram") || unit == "g" {
        quantity / 1000.0
    } else if unit.contains("tonne") {
        quantity * 1000.0
    } else if unit.contains("lb") || unit.contains("pound") {
        quantity * 0.453592
    } else {
        quantity
    }
}

/// Multiplier for a scale word following an amount ("million", "k", ...).
pub fn scale_multiplier(word: Option<&str>) -> f64 {
    match word.map(str::to_lowercase).as_deref() {
        Some("thousand") | Some("k") => 1e3,
        Some("million") => 1e6,
        Some("billion") => 1e9,
        _ => 1.0,
    }
}

/// GBP with no decimal places and comma grouping: `£1,500,000`.
pub fn format_gbp(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}£{}", sign, grouped)
}

/// Build an article URL from its title: lowercase, strip punctuation, hyphenate.
pub fn url_from_title(base_url: &str, title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    let lower = title.to_lowercase();
    let stripped = SLUG_STRIP_RE.replace_all(&lower, "");
    let hyphenated = SLUG_SPACE_RE.replace_all(&stripped, "-");
    let slug = SLUG_DASH_RE.replace_all(&hyphenated, "-");
    format!("{}{}", base_url, slug)
}

/// Make an `href`/`src` absolute against the site origin.
pub fn resolve_url(origin: &str, src: &str) -> String {
    if src.starts_with("http") {
        src.to_string()
    } else if src.starts_with('/') {
        format!("{}{}", origin, src)
    } else {
        format!("{}/{}", origin, src)
    }
}

/// Up to `radius` characters either side of the first occurrence of `term`.
/// Empty when `term` does not occur.
pub fn context_window<'a>(text: &'a str, term: &str, radius: usize) -> &'a str {
    let Some(idx) = text.find(term) else {
        return "";
    };
    let start = text[..idx]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(idx);
    let after = idx + term.len();
    let end = text[after..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| after + i)
        .unwrap_or(text.len());
    &text[start..end]
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
