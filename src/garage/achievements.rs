//! Garage gamification - points, levels, titles
//!
//! The point rule is deliberately pluggable. The platform never settled on
//! a scoring formula, so the default here is a placeholder: any replacement
//! only has to stay monotonic in every category count.

use crate::garage::types::{Ownership, SavedItem};

/// Per-category counts derived from the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GarageTally {
    pub total: usize,
    pub owned: usize,
    pub test_driven: usize,
    pub interested: usize,
}

impl GarageTally {
    /// Count items per ownership bucket
    pub fn of(items: &[SavedItem]) -> Self {
        let mut tally = GarageTally {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            match item.metadata.ownership {
                Some(Ownership::Owned) => tally.owned += 1,
                Some(Ownership::TestDriven) => tally.test_driven += 1,
                Some(Ownership::Interested) => tally.interested += 1,
                None => {}
            }
        }

        tally
    }
}

/// Strategy seam for the point-award rule
pub trait ScoringRule {
    fn points(&self, tally: &GarageTally) -> u32;
}

/// Placeholder default: flat per-item base plus ownership bonuses
///
/// 5 points per saved item, +20 per owned car, +10 per test drive,
/// +5 per interest mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScoring;

impl ScoringRule for DefaultScoring {
    fn points(&self, tally: &GarageTally) -> u32 {
        let base = tally.total as u32 * 5;
        let bonus =
            tally.owned as u32 * 20 + tally.test_driven as u32 * 10 + tally.interested as u32 * 5;
        base + bonus
    }
}

/// Derived gamification summary shown on the garage dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievements {
    pub points: u32,
    pub level: u32,
    pub title: &'static str,
}

impl Achievements {
    /// Compute the summary for a tally under a given rule
    pub fn compute(tally: &GarageTally, rule: &dyn ScoringRule) -> Self {
        let points = rule.points(tally);
        let (level, title) = match points {
            0..=49 => (1, "Window Shopper"),
            50..=149 => (2, "Weekend Driver"),
            150..=399 => (3, "Gearhead"),
            _ => (4, "Collector"),
        };

        Achievements {
            points,
            level,
            title,
        }
    }
}
