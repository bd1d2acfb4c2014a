//! The canned answer table for the showroom assistant
//!
//! Static, load-time data: a small set of known questions with prepared
//! answers, related content links, and matching tags. Read-only at runtime.
//! The built-in table ships in the binary; deployments can point the config
//! at a JSON file with their own table instead.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Content kind a related link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    Article,
    Video,
    CarDetail,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Article => "article",
            LinkKind::Video => "video",
            LinkKind::CarDetail => "carDetail",
        }
    }
}

/// A piece of related content surfaced next to an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl RelatedLink {
    pub fn new(kind: LinkKind, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            url: url.into(),
            thumbnail: None,
        }
    }
}

/// One entry in the answer table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CannedAnswer {
    /// Known phrasings of the question
    pub questions: Vec<String>,
    /// Prepared response text
    pub answer: String,
    #[serde(default)]
    pub related_links: Vec<RelatedLink>,
    /// Matching aids; hyphenated tags also match on their parts
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CannedAnswer {
    fn new(questions: &[&str], answer: &str, tags: &[&str]) -> Self {
        Self {
            questions: questions.iter().map(|q| q.to_string()).collect(),
            answer: answer.to_string(),
            related_links: Vec::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn with_links(mut self, links: Vec<RelatedLink>) -> Self {
        self.related_links = links;
        self
    }
}

/// Load an answer table from a JSON file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<CannedAnswer>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer table: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse answer table: {}", path.display()))
}

/// The built-in answer table
pub fn builtin() -> Vec<CannedAnswer> {
    vec![
        CannedAnswer::new(
            &[
                "What is the best SUV?",
                "Which SUV should I buy?",
                "best suv",
            ],
            "For most shoppers the Kia Telluride is the strongest all-round pick: \
             three rows, strong safety scores, and the best warranty in its class. \
             If you want something smaller, the Mazda CX-50 drives the nicest; \
             for towing, look at the Toyota Grand Highlander.",
            &["suv", "family-car", "recommendation"],
        )
        .with_links(vec![
            RelatedLink::new(
                LinkKind::Article,
                "SUV buyer's guide: every size class ranked",
                "/articles/suv-buyers-guide",
            ),
            RelatedLink::new(LinkKind::CarDetail, "Kia Telluride", "/cars/kia-telluride"),
        ]),
        CannedAnswer::new(
            &[
                "How far can an electric car go on a charge?",
                "What is the range of an EV?",
                "ev range",
            ],
            "Most current EVs cover 230-330 miles on a full charge. Cold weather \
             can cut that by a quarter, and sustained highway speeds drain faster \
             than city driving. If you regularly drive long distances, prioritize \
             cars with 250+ miles of rated range and fast-charging above 150 kW.",
            &["ev", "electric-vehicle", "range", "charging"],
        )
        .with_links(vec![RelatedLink::new(
            LinkKind::Article,
            "Real-world EV range, tested",
            "/articles/ev-range-tested",
        )]),
        CannedAnswer::new(
            &[
                "How do car loans work?",
                "How much car can I afford?",
                "monthly payment",
            ],
            "A car loan spreads the price plus interest over a fixed term, \
             typically 36-72 months. A good rule of thumb is to keep the monthly \
             payment under 10% of take-home pay and the term at 60 months or \
             less. Use the payment calculator on any car page to see how down \
             payment and APR change the monthly number.",
            &["financing", "loan", "apr", "monthly-payment"],
        )
        .with_links(vec![RelatedLink::new(
            LinkKind::Article,
            "Car financing explained in five minutes",
            "/articles/financing-explained",
        )]),
        CannedAnswer::new(
            &[
                "How often should I change my oil?",
                "oil change interval",
            ],
            "For most modern cars running synthetic oil, every 7,500-10,000 miles \
             or once a year, whichever comes first. Check the maintenance schedule \
             in your owner's manual - turbocharged engines and frequent short \
             trips call for shorter intervals.",
            &["maintenance", "oil-change", "service"],
        ),
        CannedAnswer::new(
            &[
                "Do I need winter tires?",
                "When should I put on winter tires?",
            ],
            "If temperatures in your area regularly drop below 45°F (7°C), yes - \
             winter tires outbrake all-seasons on cold pavement, not just on snow. \
             Swap them on when overnight lows stay near freezing and back off in \
             spring.",
            &["winter-tires", "snow", "safety"],
        )
        .with_links(vec![RelatedLink::new(
            LinkKind::Video,
            "Winter tires vs all-seasons: braking test",
            "/videos/winter-tire-test",
        )]),
        CannedAnswer::new(
            &[
                "What is the best family car?",
                "best family car",
            ],
            "A minivan is still the honest answer: the Honda Odyssey and Toyota \
             Sienna carry more people and gear than any three-row crossover, with \
             easier access for car seats. If a van is a hard no, the Telluride \
             and Pilot are the closest substitutes.",
            &["family-car", "minivan", "three-row"],
        )
        .with_links(vec![RelatedLink::new(
            LinkKind::CarDetail,
            "Honda Odyssey",
            "/cars/honda-odyssey",
        )]),
    ]
}
