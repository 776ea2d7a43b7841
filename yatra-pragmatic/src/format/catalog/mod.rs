//! Specifies logic to read and write attraction catalogs in json format.

use super::*;
use crate::validation::CatalogValidationContext;
use std::io::{BufReader, Read};
use std::str::FromStr;
use yatra_core::models::{
    Attraction as CoreAttraction, Catalog as CoreCatalog, City as CoreCity, Interest,
};

mod model;
pub use self::model::*;

#[cfg(test)]
#[path = "../../../tests/unit/format/catalog/catalog_test.rs"]
mod catalog_test;

pub(crate) type ApiCatalog = Catalog;

/// Reads attraction catalog from various sources.
pub trait PragmaticCatalog {
    /// Reads catalog defined in pragmatic format.
    fn read_pragmatic(self) -> Result<CoreCatalog, MultiFormatError>;
}

impl<R: Read> PragmaticCatalog for BufReader<R> {
    fn read_pragmatic(self) -> Result<CoreCatalog, MultiFormatError> {
        deserialize_catalog(self)?.read_pragmatic()
    }
}

impl PragmaticCatalog for String {
    fn read_pragmatic(self) -> Result<CoreCatalog, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticCatalog for ApiCatalog {
    fn read_pragmatic(self) -> Result<CoreCatalog, MultiFormatError> {
        CatalogValidationContext::new(&self).validate()?;

        let map_error = |err: String| {
            MultiFormatError::from(FormatError::new(
                "E1106".to_string(),
                "cannot create catalog".to_string(),
                format!("check catalog definition: '{err}'"),
            ))
        };

        let cities = self
            .cities
            .iter()
            .map(|city| {
                city.attractions
                    .iter()
                    .map(|attraction| {
                        Interest::from_str(attraction.category.as_str()).map(|category| {
                            CoreAttraction::new(
                                attraction.name.as_str(),
                                attraction.description.as_str(),
                                attraction.time.as_str(),
                                attraction.hours.as_str(),
                                category,
                            )
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(|attractions| CoreCity::new(city.name.as_str(), attractions))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| map_error(err.to_string()))?;

        CoreCatalog::new(cities, self.default_city.as_str()).map_err(|err| map_error(err.to_string()))
    }
}

/// Maps core catalog to pragmatic format.
pub fn create_catalog_model(catalog: &CoreCatalog) -> Catalog {
    Catalog {
        default_city: catalog.default_city().name.clone(),
        cities: catalog
            .cities()
            .map(|city| City {
                name: city.name.clone(),
                attractions: city.attractions.iter().map(|attraction| create_attraction_model(attraction)).collect(),
            })
            .collect(),
    }
}

/// Maps core attraction to pragmatic format.
pub fn create_attraction_model(attraction: &CoreAttraction) -> Attraction {
    Attraction {
        name: attraction.name.clone(),
        description: attraction.description.clone(),
        time: attraction.visit_duration.clone(),
        hours: attraction.opening_hours.clone(),
        category: attraction.category.to_string(),
    }
}
