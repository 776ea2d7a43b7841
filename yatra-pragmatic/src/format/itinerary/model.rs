use super::*;
use serde::Deserialize;

/// A notice about fallback taken during planning.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notice {
    /// A notice type: `cityFallback` or `interestFallback`.
    #[serde(rename(deserialize = "type", serialize = "type"))]
    pub type_field: String,
    /// A human readable message.
    pub message: String,
}

/// A message to share the itinerary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Share {
    /// A message title.
    pub title: String,
    /// A message text.
    pub text: String,
}

/// Attractions planned for a single day.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    /// A day number, starts from 1.
    pub day: usize,
    /// Estimated hours.
    pub total_time: u32,
    /// Attractions in visit order.
    pub attractions: Vec<Attraction>,
}

/// A generated itinerary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// A city whose attractions were used.
    pub city: String,
    /// A city as it was requested.
    pub requested_city: String,
    /// A trip duration in days.
    pub duration: usize,
    /// A travel style title.
    pub travel_style: String,
    /// Selected interests.
    pub interests: Vec<String>,
    /// A budget label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// A group size label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,
    /// Estimated hours of the whole trip.
    pub total_time: u32,
    /// Day plans.
    pub days: Vec<Day>,
    /// Fallbacks taken during planning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    /// A share message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
}
