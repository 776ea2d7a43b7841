#[cfg(test)]
#[path = "../../tests/unit/validation/request_test.rs"]
mod request_test;

use super::*;
use crate::format::request::{get_preference, DurationValue};
use std::str::FromStr;
use yatra_core::models::{BudgetTier, GroupSize, Interest, TravelStyle};

/// Checks that city is specified.
fn check_e1000_city_is_specified(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.request.city.trim().is_empty() {
        Err(create_error("E1000", "city is not specified", "select a destination city".to_string()))
    } else {
        Ok(())
    }
}

/// Checks that duration is specified and within allowed range.
fn check_e1001_duration_is_correct(ctx: &ValidationContext) -> Result<(), FormatError> {
    let max = ctx.max_duration as i64;
    let describe = |value: &Option<DurationValue>| match value {
        Some(DurationValue::Days(days)) => days.to_string(),
        Some(DurationValue::Text(text)) => text.clone(),
        None => "nothing".to_string(),
    };

    match ctx.request.duration.as_ref().and_then(DurationValue::to_days) {
        Some(days) if (1..=max).contains(&days) => Ok(()),
        _ => Err(create_error(
            "E1001",
            "invalid trip duration",
            format!("specify duration between 1 and {max} days, got '{}'", describe(&ctx.request.duration)),
        )),
    }
}

/// Checks that at least one interest is selected.
fn check_e1002_interests_are_selected(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.request.interests.is_empty() {
        Err(create_error("E1002", "no interests selected", "select at least one interest".to_string()))
    } else {
        Ok(())
    }
}

/// Checks that interests are not repeated.
fn check_e1003_no_duplicated_interests(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.request.interests.iter()).map_or(Ok(()), |interests| {
        Err(create_error(
            "E1003",
            "duplicated interests",
            format!("remove duplicated interests: {}", interests.join(", ")),
        ))
    })
}

/// Checks that all interests are known.
fn check_e1004_interests_are_known(ctx: &ValidationContext) -> Result<(), FormatError> {
    let unknown = ctx
        .request
        .interests
        .iter()
        .filter(|interest| Interest::from_str(interest.as_str()).is_err())
        .cloned()
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        let known = Interest::ALL.iter().map(|interest| interest.as_str()).collect::<Vec<_>>().join(", ");
        Err(create_error(
            "E1004",
            "unknown interests",
            format!("use one of '{known}' instead of: {}", unknown.join(", ")),
        ))
    }
}

/// Checks that optional preferences have known values.
fn check_e1005_preferences_are_known(ctx: &ValidationContext) -> Result<(), FormatError> {
    let request = ctx.request;
    let invalid = [
        ("budget", get_preference(&request.budget).filter(|value| BudgetTier::from_str(value).is_err())),
        ("travelStyle", get_preference(&request.travel_style).filter(|value| TravelStyle::from_str(value).is_err())),
        ("groupSize", get_preference(&request.group_size).filter(|value| GroupSize::from_str(value).is_err())),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| format!("{name}='{value}'")))
    .collect::<Vec<_>>();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(create_error("E1005", "unknown preference values", format!("check values of {}", invalid.join(", "))))
    }
}

/// Validates trip request.
pub fn validate_request(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_city_is_specified(ctx),
        check_e1001_duration_is_correct(ctx),
        check_e1002_interests_are_selected(ctx),
        check_e1003_no_duplicated_interests(ctx),
        check_e1004_interests_are_known(ctx),
        check_e1005_preferences_are_known(ctx),
    ])
}
