#[cfg(test)]
#[path = "../../tests/unit/construction/partition_test.rs"]
mod partition_test;

use crate::models::{Attraction, DayPlan};
use crate::utils::GenericResult;
use std::sync::Arc;

/// Hours assumed for an attraction whose visit duration cannot be parsed.
const DEFAULT_VISIT_HOURS: u32 = 1;

/// Returns amount of attractions assigned to each day.
pub fn get_attractions_per_day(total: usize, days: usize) -> usize {
    if days == 0 { 0 } else { total.div_ceil(days) }
}

/// Distributes attractions across the given amount of days by consecutive slicing.
/// Exactly `days` plans are returned; trailing ones can be empty.
pub fn partition_into_days(attractions: &[Arc<Attraction>], days: usize) -> GenericResult<Vec<DayPlan>> {
    if days == 0 {
        return Err("trip duration should be at least one day".into());
    }

    let total = attractions.len();
    let per_day = get_attractions_per_day(total, days);

    Ok((1..=days)
        .map(|day| {
            let start = ((day - 1) * per_day).min(total);
            let end = (start + per_day).min(total);
            let attractions = attractions[start..end].to_vec();
            let total_hours =
                attractions.iter().fold(0_u32, |acc, attraction| acc.saturating_add(attraction.estimated_hours()));

            DayPlan { day, attractions, total_hours }
        })
        .collect())
}

/// Estimates visit hours from free text duration, e.g. "2-3 hours" gives 2.
///
/// Only the leading integer before the first dash is taken into account, so "1.5 hours" gives 1
/// and "30 minutes" gives 30. Text without a leading number, or zero, gives 1. Numbers which do
/// not fit into `u32` are clamped to `u32::MAX`.
pub fn estimate_visit_hours(duration: &str) -> u32 {
    let head = duration.split('-').next().unwrap_or_default().trim_start();
    let head = head.strip_prefix('+').unwrap_or(head);
    let digits = head.find(|ch: char| !ch.is_ascii_digit()).map_or(head, |end| &head[..end]);

    if digits.is_empty() {
        return DEFAULT_VISIT_HOURS;
    }

    match digits.parse::<u32>() {
        Ok(0) => DEFAULT_VISIT_HOURS,
        Ok(hours) => hours,
        Err(_) => u32::MAX,
    }
}
