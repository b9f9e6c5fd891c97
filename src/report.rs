use std::fs;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::{ReportError, Result};

// ── Full-article records ──

/// One assembled extraction result for one input document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub title: String,
    pub content: String,
    pub source: String,
    pub processed_at: String,
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
    pub timeline: Vec<String>,
    pub perpetrators: Vec<String>,
    pub sentences: Vec<String>,
    pub charges: Vec<String>,
    pub money_amounts: Vec<MoneyAmountRow>,
    pub drug_quantities: Vec<DrugQuantityRow>,
    pub categories: Vec<String>,
    pub url: String,
    pub intro: String,
    pub date: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoneyAmountRow {
    pub original: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub amount: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugQuantityRow {
    pub original: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub quantity: f64,
    pub unit: String,
    pub drug: String,
    #[serde(serialize_with = "whole_as_integer")]
    pub kg_equivalent: f64,
}

// ── Listing-page entries ──

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingArticle {
    pub title: String,
    pub url: String,
    pub intro: String,
    pub date: String,
    pub image_url: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub articles: Vec<ListingArticle>,
}

/// Emit `1500000` rather than `1500000.0` for whole-valued amounts.
fn whole_as_integer<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write the whole collection to `<output_dir>/<file_name>` in one go.
pub fn save_report(output_dir: &Path, file_name: &str, json: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Output {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(file_name);
    fs::write(&path, json).map_err(|source| ReportError::Output {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
