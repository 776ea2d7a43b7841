use super::*;
use serde::Deserialize;
use std::io::{BufWriter, Write};

/// A single place to visit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Attraction {
    /// An attraction name, unique within the city.
    pub name: String,
    /// A short description.
    pub description: String,
    /// An estimated visit duration as free text, e.g. "2-3 hours".
    pub time: String,
    /// Opening hours as free text.
    pub hours: String,
    /// An interest tag, e.g. "Heritage & Culture".
    pub category: String,
}

/// A city with its attractions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct City {
    /// A city name.
    pub name: String,
    /// Attractions in the order they should be visited.
    pub attractions: Vec<Attraction>,
}

/// An attraction catalog.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// A city used when requested one is not in the catalog.
    pub default_city: String,
    /// Cities with curated attractions.
    pub cities: Vec<City>,
}

/// Deserializes catalog in json format from `BufReader`.
pub fn deserialize_catalog<R: Read>(reader: BufReader<R>) -> Result<Catalog, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0001", "catalog", err))
}

/// Serializes catalog in json into `writer`.
pub fn serialize_catalog<W: Write>(catalog: &Catalog, writer: &mut BufWriter<W>) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(writer, catalog).map_err(std::io::Error::from)
}
