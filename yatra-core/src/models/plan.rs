#[cfg(test)]
#[path = "../../tests/unit/models/plan_test.rs"]
mod plan_test;

use super::{Attraction, Interest};
use std::fmt;
use std::sync::Arc;

/// Represents attractions assigned to a single day of the trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayPlan {
    /// A day number, starts from 1.
    pub day: usize,
    /// Attractions in visit order, can be empty.
    pub attractions: Vec<Arc<Attraction>>,
    /// A rough estimation of hours needed to visit all attractions of the day.
    pub total_hours: u32,
}

/// Specifies a fallback which was taken while building the itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Requested city has no curated attractions and the default city was used instead.
    CityFallback {
        /// A requested city name.
        requested: String,
        /// A city which was actually used.
        resolved: String,
    },
    /// No attraction matched selected interests, so the first attractions of the city were used.
    InterestFallback {
        /// A city which was used.
        city: String,
        /// Selected interests.
        interests: Vec<Interest>,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CityFallback { requested, resolved } => {
                write!(f, "no attractions known for '{requested}', using '{resolved}' instead")
            }
            Notice::InterestFallback { city, interests } => {
                let interests = interests.iter().map(|interest| interest.as_str()).collect::<Vec<_>>().join(", ");
                write!(f, "no attractions in '{city}' match [{interests}], using top attractions instead")
            }
        }
    }
}

/// Represents a generated itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Itinerary {
    /// A city as it was requested.
    pub requested_city: String,
    /// A city whose attractions were used.
    pub city: String,
    /// Day plans, exactly one per requested day.
    pub days: Vec<DayPlan>,
    /// Fallbacks taken during planning.
    pub notices: Vec<Notice>,
}

impl Itinerary {
    /// Returns total estimated hours of the whole trip, saturating at `u32::MAX`.
    pub fn total_hours(&self) -> u32 {
        self.days.iter().fold(0_u32, |acc, day| acc.saturating_add(day.total_hours))
    }

    /// Returns all planned attractions in visit order.
    pub fn attractions(&self) -> impl Iterator<Item = &Arc<Attraction>> + '_ {
        self.days.iter().flat_map(|day| day.attractions.iter())
    }
}

/// A message used to share an itinerary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    /// A message title.
    pub title: String,
    /// A message text.
    pub text: String,
}

impl ShareMessage {
    /// Creates a new instance of `ShareMessage` for the trip.
    pub fn new(city: &str, duration: usize) -> Self {
        Self {
            title: format!("My {city} Travel Itinerary"),
            text: format!("Check out my {duration}-day itinerary for {city}!"),
        }
    }

    /// Returns a notification text shown once itinerary is ready.
    pub fn ready_notice(city: &str, duration: usize) -> String {
        format!("Your {duration}-day trip to {city} is ready.")
    }
}
