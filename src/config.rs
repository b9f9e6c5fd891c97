use ::config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_SITE_ORIGIN: &str = "https://www.nationalcrimeagency.gov.uk";
const DEFAULT_NEWS_BASE_URL: &str = "https://www.nationalcrimeagency.gov.uk/news/";
const DEFAULT_TITLE_SUFFIX: &str = " - National Crime Agency";
const DEFAULT_REPORT_FILE: &str = "report.json";

/// Site-specific constants, overridable with `NCA_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Origin used to absolutise relative image and article links.
    pub site_origin: String,
    /// Prefix for URLs built from article titles.
    pub news_base_url: String,
    /// Suffix stripped from page titles.
    pub title_suffix: String,
    pub report_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            news_base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            title_suffix: DEFAULT_TITLE_SUFFIX.to_string(),
            report_file_name: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("site_origin", DEFAULT_SITE_ORIGIN)?
            .set_default("news_base_url", DEFAULT_NEWS_BASE_URL)?
            .set_default("title_suffix", DEFAULT_TITLE_SUFFIX)?
            .set_default("report_file_name", DEFAULT_REPORT_FILE)?
            .add_source(Environment::with_prefix("NCA"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_nca() {
        let s = Settings::default();
        assert_eq!(s.site_origin, "https://www.nationalcrimeagency.gov.uk");
        assert!(s.news_base_url.ends_with("/news/"));
        assert_eq!(s.report_file_name, "report.json");
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let s = Settings::load().unwrap();
        assert!(!s.site_origin.is_empty());
        assert!(!s.title_suffix.is_empty());
    }
}
