#[cfg(test)]
#[path = "../../tests/unit/models/attraction_test.rs"]
mod attraction_test;

use crate::construction::estimate_visit_hours;

string_enum! {
    /// An interest tag used to categorize attractions and to express user preferences.
    Interest as "interest" {
        /// Forts, palaces, monuments and museums.
        HeritageCulture => "Heritage & Culture",
        /// Parks, backwaters and wildlife.
        NatureWildlife => "Nature & Wildlife",
        /// Markets and local cuisine.
        FoodCuisine => "Food & Cuisine",
        AdventureSports => "Adventure Sports",
        /// Temples and other places of worship.
        SpiritualReligious => "Spiritual & Religious",
        /// Performances and traditional crafts.
        ArtCrafts => "Art & Crafts",
        Photography => "Photography",
        Shopping => "Shopping",
        Nightlife => "Nightlife",
        Beaches => "Beaches",
    }
}

/// Represents a single place to visit in a city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attraction {
    /// A unique name within the city.
    pub name: String,
    /// A short description.
    pub description: String,
    /// An estimated visit duration as free text, e.g. "2-3 hours".
    pub visit_duration: String,
    /// Opening hours as free text, e.g. "9:30 AM - 4:30 PM".
    pub opening_hours: String,
    /// A category used to match user interests.
    pub category: Interest,
}

impl Attraction {
    /// Creates a new instance of `Attraction`.
    pub fn new(name: &str, description: &str, visit_duration: &str, opening_hours: &str, category: Interest) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            visit_duration: visit_duration.to_string(),
            opening_hours: opening_hours.to_string(),
            category,
        }
    }

    /// Returns a coarse estimation of visit hours derived from the leading number of visit duration.
    pub fn estimated_hours(&self) -> u32 {
        estimate_visit_hours(self.visit_duration.as_str())
    }
}
