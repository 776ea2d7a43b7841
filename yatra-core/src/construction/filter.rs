#[cfg(test)]
#[path = "../../tests/unit/construction/filter_test.rs"]
mod filter_test;

use crate::models::{Attraction, Interest};
use std::sync::Arc;

/// Max amount of attractions taken when nothing matches selected interests.
pub const FALLBACK_SIZE: usize = 6;

/// A result of interest filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Selected attractions in catalog order.
    pub attractions: Vec<Arc<Attraction>>,
    /// True if no attraction matched and the fallback selection was used.
    pub is_fallback: bool,
}

/// Selects attractions whose category is one of the interests preserving catalog order.
/// If nothing matches, the first [`FALLBACK_SIZE`] attractions are returned instead.
pub fn filter_by_interests(attractions: &[Arc<Attraction>], interests: &[Interest]) -> FilterOutcome {
    let matched = attractions
        .iter()
        .filter(|attraction| interests.contains(&attraction.category))
        .cloned()
        .collect::<Vec<_>>();

    if matched.is_empty() {
        FilterOutcome { attractions: attractions.iter().take(FALLBACK_SIZE).cloned().collect(), is_fallback: true }
    } else {
        FilterOutcome { attractions: matched, is_fallback: false }
    }
}
