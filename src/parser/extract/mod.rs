pub mod categories;
pub mod charges;
pub mod drugs;
pub mod locations;
pub mod money;
pub mod organizations;
pub mod people;
pub mod sentences;
pub mod timeline;

use std::collections::HashSet;

use super::dom::Dom;
use charges::Charges;
use drugs::{DrugQuantities, DrugQuantity};
use locations::Locations;
use money::{MoneyAmount, MoneyAmounts};
use organizations::Organizations;
use people::{People, Person, Role};
use sentences::Sentences;

/// A heuristic mapping from body text to typed entity matches.
///
/// The assembler only sees this interface, so a recognizer can change its
/// matching strategy without touching the pipeline.
pub trait Recognizer {
    type Entity;

    fn extract(&self, text: &str) -> Vec<Self::Entity>;
}

/// Everything recognised in one article body.
pub struct ExtractedEntities {
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
    pub timeline: Vec<String>,
    pub perpetrators: Vec<Person>,
    pub victims: Vec<Person>,
    pub sentences: Vec<String>,
    pub charges: Vec<String>,
    pub money: Vec<MoneyAmount>,
    pub drugs: Vec<DrugQuantity>,
}

pub fn extract_all(dom: &Dom, content: &str) -> ExtractedEntities {
    ExtractedEntities {
        locations: Locations.extract(content),
        organizations: Organizations.extract(content),
        timeline: timeline::extract(dom, content),
        perpetrators: People::new(Role::Perpetrator).extract(content),
        victims: People::new(Role::Victim).extract(content),
        sentences: Sentences.extract(content),
        charges: Charges.extract(content),
        money: MoneyAmounts.extract(content),
        drugs: DrugQuantities.extract(content),
    }
}

/// Insertion-ordered string set.
#[derive(Debug, Default)]
pub(crate) struct OrderedSet {
    seen: HashSet<String>,
    items: Vec<String>,
}

impl OrderedSet {
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_set_keeps_first_occurrence_order() {
        let mut set = OrderedSet::default();
        assert!(set.insert("Leeds"));
        assert!(set.insert("Dover"));
        assert!(!set.insert("Leeds"));
        assert!(set.contains("Dover"));
        assert_eq!(set.into_vec(), vec!["Leeds", "Dover"]);
    }

    #[test]
    fn extract_all_on_empty_body() {
        let dom = Dom::parse("<html></html>");
        let e = extract_all(&dom, "");
        assert!(e.locations.is_empty());
        assert!(e.organizations.is_empty());
        assert!(e.timeline.is_empty());
        assert!(e.perpetrators.is_empty());
        assert!(e.victims.is_empty());
        assert!(e.sentences.is_empty());
        assert!(e.charges.is_empty());
        assert!(e.money.is_empty());
        assert!(e.drugs.is_empty());
    }
}
