//! This module provides functionality to validate trip requests and attraction catalogs for
//! logical correctness.

use crate::format::catalog::Catalog;
use crate::format::request::Request;
use crate::format::{FormatError, MultiFormatError};

mod common;
use self::common::*;

mod request;
use self::request::validate_request;

mod catalog;
use self::catalog::validate_catalog;

/// Validates trip request.
pub struct ValidationContext<'a> {
    /// A request to validate.
    pub request: &'a Request,
    /// Max allowed trip duration in days.
    pub max_duration: usize,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a Request, max_duration: usize) -> Self {
        Self { request, max_duration }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        validate_request(self).map_err(MultiFormatError::from)
    }
}

/// Validates attraction catalog.
pub struct CatalogValidationContext<'a> {
    /// A catalog to validate.
    pub catalog: &'a Catalog,
}

impl<'a> CatalogValidationContext<'a> {
    /// Creates an instance of `CatalogValidationContext`.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Validates catalog on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        validate_catalog(self).map_err(MultiFormatError::from)
    }
}
