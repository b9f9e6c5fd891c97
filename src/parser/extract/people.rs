use std::sync::LazyLock;

use regex::Regex;

use super::{OrderedSet, Recognizer};
use crate::normalize::{collapse_whitespace, context_window};
use crate::vocab::{PERPETRATOR_KEYWORDS, VICTIM_KEYWORDS};

/// Characters either side of a name searched for role keywords, age and home town.
const CONTEXT_RADIUS: usize = 150;

const NAME: &str = r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}\b";
const AGE_AND_TOWN: &str =
    r"(?:\s*,\s*(\d{1,2}))?(?:\s*,\s*(?:from|of)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*))?";

/// Name, optional age, optional town, then a verb phrase naming the outcome.
static ANCHORED_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\s+(?:was|has been|had been|is|were|have been)\s+(?:arrested|charged|convicted|jailed|sentenced|found guilty)",
        r"\s+(?:pleaded|admitted)",
    ]
    .iter()
    .map(|verb| Regex::new(&format!("({}){}{}", NAME, AGE_AND_TOWN, verb)).unwrap())
    .collect()
});

static CANDIDATE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(NAME).unwrap());

static AGE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:aged|age)\s+(\d{1,2})\b",
        r"(\d{1,2})\s+(?:year|years)\s+old",
        r"(\d{1,2})-year-old",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static HOME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:from|in|of|residing in)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
        r"(?:address in|house in|property in)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Perpetrator,
    Victim,
}

impl Role {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Role::Perpetrator => PERPETRATOR_KEYWORDS,
            Role::Victim => VICTIM_KEYWORDS,
        }
    }

    /// Whether the context mentions any of this role's keywords.
    pub fn is_relevant(self, context: &str) -> bool {
        let lower = context.to_lowercase();
        self.keywords().iter().any(|kw| lower.contains(&kw.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: Option<u32>,
    pub location: Option<String>,
    pub role: Role,
    pub context: String,
}

/// People mentioned in a role. Each role is classified independently, so the
/// same name can come back from both a perpetrator and a victim pass.
pub struct People {
    role: Role,
}

impl People {
    pub fn new(role: Role) -> Self {
        People { role }
    }

    fn classify(
        &self,
        text: &str,
        name: &str,
        age: Option<u32>,
        location: Option<String>,
    ) -> Option<Person> {
        let context = context_window(text, name, CONTEXT_RADIUS);
        if !self.role.is_relevant(context) {
            return None;
        }
        Some(Person {
            name: name.to_string(),
            age: age.or_else(|| age_in(context)),
            location: location.or_else(|| home_in(context)),
            role: self.role,
            context: collapse_whitespace(context),
        })
    }
}

impl Recognizer for People {
    type Entity = Person;

    fn extract(&self, text: &str) -> Vec<Person> {
        let mut names = OrderedSet::default();
        let mut people = Vec::new();

        for re in ANCHORED_RES.iter() {
            for caps in re.captures_iter(text) {
                let name = &caps[1];
                if names.contains(name) {
                    continue;
                }
                let age = caps.get(2).and_then(|m| m.as_str().parse().ok());
                let location = caps.get(3).map(|m| m.as_str().to_string());
                if let Some(person) = self.classify(text, name, age, location) {
                    names.insert(name);
                    people.push(person);
                }
            }
        }

        // Any capitalised two-to-three word run not already placed.
        let mut candidates = OrderedSet::default();
        for m in CANDIDATE_NAME_RE.find_iter(text) {
            candidates.insert(m.as_str());
        }
        for name in candidates.into_vec() {
            if names.contains(&name) {
                continue;
            }
            if let Some(person) = self.classify(text, &name, None, None) {
                names.insert(name);
                people.push(person);
            }
        }

        people
    }
}

fn age_in(context: &str) -> Option<u32> {
    AGE_RES
        .iter()
        .find_map(|re| re.captures(context))
        .and_then(|caps| caps[1].parse().ok())
}

fn home_in(context: &str) -> Option<String> {
    HOME_RES
        .iter()
        .find_map(|re| re.captures(context))
        .map(|caps| caps[1].to_string())
}
