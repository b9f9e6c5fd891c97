pub mod dates;
pub mod dom;
pub mod extract;
pub mod fields;

use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::config::Settings;
use crate::loader::SourceDocument;
use crate::normalize::{format_gbp, to_kilograms, url_from_title};
use crate::report::{ArticleRecord, DrugQuantityRow, MoneyAmountRow};
use dom::Dom;
use extract::categories;

/// One document in, one record out: fields from the tree, entities from the body text.
pub fn process_document(doc: &SourceDocument, settings: &Settings) -> ArticleRecord {
    let dom = Dom::parse(&doc.html);

    let title = fields::title::extract(&dom, &settings.title_suffix);
    let content = fields::content::extract(&dom).text();
    let entities = extract::extract_all(&dom, &content);

    debug!(
        source = %doc.source,
        locations = entities.locations.len(),
        perpetrators = entities.perpetrators.len(),
        victims = entities.victims.len(),
        money = entities.money.len(),
        drugs = entities.drugs.len(),
        "Entities extracted"
    );

    let money_amounts = entities
        .money
        .into_iter()
        .map(|m| MoneyAmountRow {
            formatted: format_gbp(m.amount),
            amount: m.amount,
            original: m.original_text,
        })
        .collect();

    let drug_quantities = entities
        .drugs
        .into_iter()
        .map(|d| DrugQuantityRow {
            original: format!("{} {} of {}", d.quantity, d.unit, d.substance),
            kg_equivalent: to_kilograms(d.quantity, &d.unit),
            quantity: d.quantity,
            unit: d.unit,
            drug: d.substance,
        })
        .collect();

    ArticleRecord {
        url: url_from_title(&settings.news_base_url, &title),
        intro: fields::intro::extract(&dom, &content),
        date: fields::date::extract(&dom, &content),
        image_url: fields::image::extract(&dom, &settings.site_origin),
        categories: categories::classify(&title, &content),
        source: doc.source.clone(),
        processed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        locations: entities.locations,
        organizations: entities.organizations,
        timeline: entities.timeline,
        perpetrators: entities.perpetrators.into_iter().map(|p| p.name).collect(),
        sentences: entities.sentences,
        charges: entities.charges,
        money_amounts,
        drug_quantities,
        title,
        content,
    }
}
