//! Fixed vocabularies used by the recognizers. Read-only, process-wide.

/// UK place names and regions matched as whole words, case-insensitively.
pub const UK_LOCATIONS: &[&str] = &[
    "London", "Manchester", "Birmingham", "Leeds", "Liverpool", "Glasgow", "Edinburgh",
    "Bristol", "Sheffield", "Newcastle", "Nottingham", "Cardiff", "Belfast", "Derby",
    "Leicester", "Southampton", "Portsmouth", "Brighton", "Plymouth", "Aberdeen",
    "Greater London", "West Midlands", "Greater Manchester", "West Yorkshire",
    "South Yorkshire", "West Country", "East Anglia", "Home Counties",
    "Kent", "Surrey", "Essex", "Hampshire", "Devon", "Lancashire", "Cheshire",
    "UK", "England", "Scotland", "Wales", "Northern Ireland", "Republic of Ireland",
    "Dover", "Hull", "Bradford", "Rotherham", "Sunderland", "Bolton",
    "West London", "East London", "North London", "South London", "Midlands",
    "Yorkshire", "Merseyside", "Teesside", "Tyneside", "Heathrow", "Gatwick",
];

/// Named law-enforcement bodies matched as exact substrings.
pub const LAW_ENFORCEMENT_ORGS: &[&str] = &[
    "National Crime Agency", "NCA", "Metropolitan Police", "Met Police", "Police Scotland",
    "City of London Police", "British Transport Police", "Border Force", "HM Revenue & Customs",
    "Crown Prosecution Service", "CPS", "National Police Chiefs Council", "Interpol", "Europol",
    "Organised Crime Partnership", "OCP", "Armed Operations Unit",
    "Home Office Immigration Enforcement", "Cleveland Police", "West Midlands Police",
    "Derbyshire Police", "HMRC",
];

pub const VICTIM_KEYWORDS: &[&str] = &[
    "victim", "victims", "targeted", "assaulted", "injured", "killed", "murdered",
    "exploited", "abused", "harmed", "attacked", "affected", "vulnerable", "survivor",
    "survivors", "child victims", "sexually exploited", "trafficked", "missing person",
    "migrants", "minor", "minors", "young girl", "young boy", "children",
];

pub const PERPETRATOR_KEYWORDS: &[&str] = &[
    "arrested", "charged", "convicted", "sentenced", "pleaded", "admitted", "defendant",
    "accused", "suspect", "perpetrator", "offender", "gang member", "conspirator",
    "smuggler", "trafficker", "dealer", "criminal", "ringleader", "mastermind", "fugitive",
];

/// Category name to trigger keywords, in output order.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Drug trafficking",
        &["drug", "cocaine", "heroin", "cannabis", "ketamine", "amphetamine", "class A", "narcotic"],
    ),
    ("Firearms", &["gun", "firearm", "pistol", "weapon", "ammunition", "shotgun", "rifle"]),
    (
        "Money laundering",
        &["money laundering", "launder", "cash", "financial", "proceeds of crime"],
    ),
    (
        "People smuggling",
        &["smuggling", "small boat", "migrant", "channel crossing", "immigration"],
    ),
    (
        "Human trafficking",
        &["trafficking", "modern slavery", "forced labor", "exploitation"],
    ),
    (
        "Child sexual abuse",
        &["child", "sexual abuse", "indecent", "sexual exploitation"],
    ),
    ("Cyber crime", &["cyber", "online", "internet", "dark web", "hack", "ransomware"]),
    (
        "Organized crime",
        &["organised crime", "organized crime", "criminal group", "gang", "network"],
    ),
    ("Fraud", &["fraud", "scam", "counterfeit", "fake", "forgery"]),
];
