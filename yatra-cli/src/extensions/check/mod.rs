//! A helper module which contains functionality to check trip requests and attraction catalogs.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use std::io::{BufReader, Read};
use yatra_pragmatic::format::catalog::deserialize_catalog;
use yatra_pragmatic::format::request::{create_request_model, deserialize_request, map_to_trip_request, Request};
use yatra_pragmatic::format::MultiFormatError;
use yatra_pragmatic::validation::{CatalogValidationContext, ValidationContext};

/// Checks trip request and/or attraction catalog and returns all found errors.
pub fn check_pragmatic_inputs<R1: Read, R2: Read>(
    request_reader: Option<BufReader<R1>>,
    catalog_reader: Option<BufReader<R2>>,
    max_duration: usize,
) -> Result<(), MultiFormatError> {
    let request_errors = request_reader.map(|reader| check_request(reader, max_duration)).and_then(Result::err);
    let catalog_errors = catalog_reader.map(check_catalog).and_then(Result::err);

    let errors = request_errors.into_iter().chain(catalog_errors).flatten().collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
}

/// Checks trip request read from the reader.
pub fn check_request<R: Read>(reader: BufReader<R>, max_duration: usize) -> Result<(), MultiFormatError> {
    let request = deserialize_request(reader)?;

    ValidationContext::new(&request, max_duration).validate()
}

/// Checks attraction catalog read from the reader.
pub fn check_catalog<R: Read>(reader: BufReader<R>) -> Result<(), MultiFormatError> {
    let catalog = deserialize_catalog(reader)?;

    CatalogValidationContext::new(&catalog).validate()
}

/// Reads trip request, validates it and returns it with normalized values: trimmed city, duration
/// as a number and blank preferences removed.
pub fn normalize_request<R: Read>(reader: BufReader<R>, max_duration: usize) -> Result<Request, MultiFormatError> {
    let request = deserialize_request(reader)?;

    map_to_trip_request(request, max_duration).map(|trip| create_request_model(&trip))
}
