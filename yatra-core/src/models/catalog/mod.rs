#[cfg(test)]
#[path = "../../../tests/unit/models/catalog/catalog_test.rs"]
mod catalog_test;

use crate::models::{Attraction, Interest};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

mod builtin;
pub use self::builtin::{get_builtin_catalog, DEFAULT_CITY, DESTINATIONS};

/// Represents a city with its curated attractions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct City {
    /// A city name as used in trip requests.
    pub name: String,
    /// Attractions in catalog order.
    pub attractions: Vec<Arc<Attraction>>,
}

impl City {
    /// Creates a new instance of `City`.
    pub fn new(name: &str, attractions: Vec<Attraction>) -> Self {
        Self { name: name.to_string(), attractions: attractions.into_iter().map(Arc::new).collect() }
    }

    /// Returns distinct categories of city attractions in catalog order.
    pub fn interests(&self) -> Vec<Interest> {
        let mut seen = FxHashSet::default();
        self.attractions.iter().map(|attraction| attraction.category).filter(|category| seen.insert(*category)).collect()
    }
}

/// A result of city lookup in the catalog.
#[derive(Clone, Copy, Debug)]
pub enum CityLookup<'a> {
    /// The city is known.
    Found(&'a City),
    /// The city is unknown, the default one is used.
    Fallback(&'a City),
}

impl<'a> CityLookup<'a> {
    /// Returns resolved city.
    pub fn city(&self) -> &'a City {
        match self {
            CityLookup::Found(city) | CityLookup::Fallback(city) => city,
        }
    }

    /// Returns true if the default city was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, CityLookup::Fallback(_))
    }
}

/// An immutable mapping from city name to its ordered list of attractions.
#[derive(Debug)]
pub struct Catalog {
    cities: Vec<City>,
    index: FxHashMap<String, usize>,
    default_idx: usize,
}

impl Catalog {
    /// Creates a new instance of `Catalog`. Fails if city names are not unique or
    /// the default city is not present.
    pub fn new(cities: Vec<City>, default_city: &str) -> GenericResult<Self> {
        let mut index = FxHashMap::default();
        for (idx, city) in cities.iter().enumerate() {
            if index.insert(city.name.clone(), idx).is_some() {
                return Err(format!("duplicated city in catalog: '{}'", city.name).into());
            }
        }

        let default_idx = index
            .get(default_city)
            .copied()
            .ok_or_else(|| GenericError::from(format!("default city '{default_city}' is not in catalog")))?;

        Ok(Self { cities, index, default_idx })
    }

    /// Returns a city by exact name.
    pub fn get(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&idx| &self.cities[idx])
    }

    /// Looks up the city by name falling back to the default city when it is unknown.
    pub fn lookup(&self, name: &str) -> CityLookup<'_> {
        match self.get(name) {
            Some(city) => CityLookup::Found(city),
            None => CityLookup::Fallback(self.default_city()),
        }
    }

    /// Returns the default city.
    pub fn default_city(&self) -> &City {
        &self.cities[self.default_idx]
    }

    /// Returns all cities in catalog order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.iter()
    }

    /// Checks whether the city has curated attractions.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}
