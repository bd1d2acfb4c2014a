//! Query matching for the showroom assistant
//!
//! Scores a free-text query against the canned answer table with three
//! heuristics: exact phrasing, word-set overlap, and tag substrings. The
//! formula is the compatibility contract - including its quirks, like the
//! additive tag bonus with no upper bound - so resist the urge to make it
//! smarter.

use crate::assistant::answers::{CannedAnswer, RelatedLink};
use std::collections::HashSet;

/// Minimum score a candidate needs to be returned at all
pub const CONFIDENCE_THRESHOLD: f32 = 0.4;

/// Flat bonus per matching tag
pub const TAG_BONUS: f32 = 0.2;

/// A confident match: the prepared answer plus the score that selected it
///
/// The confidence is the raw heuristic score, not a probability - exact
/// phrasing matches report 1.0, tag bonuses can push scores past it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerMatch {
    pub answer: String,
    pub related_links: Vec<RelatedLink>,
    pub confidence: f32,
}

/// Match a query against the table, or `None` if nothing clears the bar
///
/// Total over all inputs: the empty query scores 0 everywhere and returns
/// `None`. Ties go to the earlier table entry (strict `>` tracking).
pub fn match_query(query: &str, table: &[CannedAnswer]) -> Option<AnswerMatch> {
    let normalized = query.trim().to_lowercase();

    // An exact phrasing wins outright
    for entry in table {
        if entry
            .questions
            .iter()
            .any(|phrasing| phrasing.to_lowercase() == normalized)
        {
            return Some(AnswerMatch {
                answer: entry.answer.clone(),
                related_links: entry.related_links.clone(),
                confidence: 1.0,
            });
        }
    }

    let query_words: HashSet<&str> = normalized.split_whitespace().collect();

    let mut best: Option<(&CannedAnswer, f32)> = None;
    for entry in table {
        let score = score_entry(&normalized, &query_words, entry);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((entry, score)),
        }
    }

    best.filter(|(_, score)| *score >= CONFIDENCE_THRESHOLD)
        .map(|(entry, score)| AnswerMatch {
            answer: entry.answer.clone(),
            related_links: entry.related_links.clone(),
            confidence: score,
        })
}

/// Word-overlap component (max over phrasings) plus the flat tag bonus
fn score_entry(query: &str, query_words: &HashSet<&str>, entry: &CannedAnswer) -> f32 {
    let overlap = entry
        .questions
        .iter()
        .map(|phrasing| word_overlap(query_words, phrasing))
        .fold(0.0_f32, f32::max);

    let tag_hits = entry.tags.iter().filter(|tag| tag_matches(query, tag)).count();

    overlap + TAG_BONUS * tag_hits as f32
}

/// `|intersection| / max(|query words|, |phrasing words|)` over word sets
fn word_overlap(query_words: &HashSet<&str>, phrasing: &str) -> f32 {
    let phrasing = phrasing.to_lowercase();
    let phrasing_words: HashSet<&str> = phrasing.split_whitespace().collect();

    let denominator = query_words.len().max(phrasing_words.len());
    if denominator == 0 {
        return 0.0;
    }

    let shared = query_words.intersection(&phrasing_words).count();
    shared as f32 / denominator as f32
}

/// A tag matches if the query contains it, or any hyphen-delimited part of it
fn tag_matches(query: &str, tag: &str) -> bool {
    let tag = tag.to_lowercase();
    if query.contains(&tag) {
        return true;
    }

    tag.split('-')
        .filter(|part| !part.is_empty())
        .any(|part| query.contains(part))
}
