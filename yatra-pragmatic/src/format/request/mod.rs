//! Specifies logic to read a trip request from json input.

use super::*;
use crate::validation::ValidationContext;
use std::io::{BufReader, Read};
use std::str::FromStr;
use yatra_core::models::{BudgetTier, GroupSize, Interest, TravelStyle, TripRequest};
use yatra_core::utils::GenericError;

mod model;
pub use self::model::*;

#[cfg(test)]
#[path = "../../../tests/unit/format/request/reader_test.rs"]
mod reader_test;

/// Default upper bound of a trip duration in days.
pub const DEFAULT_MAX_DURATION: usize = 30;

/// Reads trip request from various sources.
pub trait PragmaticRequest {
    /// Reads trip request defined in pragmatic format.
    fn read_pragmatic(self) -> Result<TripRequest, MultiFormatError>;
}

impl<R: Read> PragmaticRequest for BufReader<R> {
    fn read_pragmatic(self) -> Result<TripRequest, MultiFormatError> {
        deserialize_request(self)?.read_pragmatic()
    }
}

impl PragmaticRequest for String {
    fn read_pragmatic(self) -> Result<TripRequest, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticRequest for Request {
    fn read_pragmatic(self) -> Result<TripRequest, MultiFormatError> {
        map_to_trip_request(self, DEFAULT_MAX_DURATION)
    }
}

/// Validates the request and maps it to core model.
pub fn map_to_trip_request(request: Request, max_duration: usize) -> Result<TripRequest, MultiFormatError> {
    ValidationContext::new(&request, max_duration).validate()?;

    let parse_error = |err: GenericError| {
        MultiFormatError::from(FormatError::new(
            "E1005".to_string(),
            "cannot read request".to_string(),
            format!("check request values: '{err}'"),
        ))
    };

    let interests = request
        .interests
        .iter()
        .map(|interest| Interest::from_str(interest.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(parse_error)?;
    let duration = request.duration.as_ref().and_then(DurationValue::to_days).unwrap_or_default();

    Ok(TripRequest {
        city: request.city.trim().to_string(),
        duration: usize::try_from(duration).map_err(|err| parse_error(err.to_string().into()))?,
        interests,
        budget: get_preference(&request.budget).map(BudgetTier::from_str).transpose().map_err(parse_error)?,
        travel_style: get_preference(&request.travel_style)
            .map(TravelStyle::from_str)
            .transpose()
            .map_err(parse_error)?,
        group_size: get_preference(&request.group_size).map(GroupSize::from_str).transpose().map_err(parse_error)?,
    })
}

/// Maps core trip request back to pragmatic format.
pub fn create_request_model(request: &TripRequest) -> Request {
    Request {
        city: request.city.clone(),
        duration: Some(DurationValue::Days(request.duration as i64)),
        interests: request.interests.iter().map(|interest| interest.to_string()).collect(),
        budget: request.budget.map(|budget| budget.to_string()),
        travel_style: request.travel_style.map(|style| style.to_string()),
        group_size: request.group_size.map(|size| size.to_string()),
    }
}

/// Returns optional preference value treating blank one as not specified.
pub(crate) fn get_preference(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
