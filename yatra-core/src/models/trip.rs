#[cfg(test)]
#[path = "../../tests/unit/models/trip_test.rs"]
mod trip_test;

use super::Interest;

string_enum! {
    /// A budget per person.
    BudgetTier as "budget tier" {
        Budget => "budget",
        MidRange => "mid-range",
        Luxury => "luxury",
    }
}

impl BudgetTier {
    /// Returns a human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "Budget (₹5,000 - ₹15,000)",
            BudgetTier::MidRange => "Mid-range (₹15,000 - ₹30,000)",
            BudgetTier::Luxury => "Luxury (₹30,000+)",
        }
    }
}

string_enum! {
    /// A preferred trip pace.
    TravelStyle as "travel style" {
        Relaxed => "relaxed",
        Balanced => "balanced",
        Intensive => "intensive",
    }
}

impl TravelStyle {
    /// Returns a human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TravelStyle::Relaxed => "Relaxed (2-3 places per day)",
            TravelStyle::Balanced => "Balanced (4-5 places per day)",
            TravelStyle::Intensive => "Intensive (6+ places per day)",
        }
    }

    /// Returns a short name used in itinerary summary.
    pub fn title(&self) -> &'static str {
        match self {
            TravelStyle::Relaxed => "Relaxed",
            TravelStyle::Balanced => "Balanced",
            TravelStyle::Intensive => "Intensive",
        }
    }
}

string_enum! {
    /// An amount of people travelling together.
    GroupSize as "group size" {
        Solo => "solo",
        Couple => "couple",
        Family => "family",
        Group => "group",
    }
}

impl GroupSize {
    /// Returns a human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GroupSize::Solo => "Solo traveler",
            GroupSize::Couple => "Couple (2 people)",
            GroupSize::Family => "Family (3-5 people)",
            GroupSize::Group => "Group (6+ people)",
        }
    }
}

/// Specifies user travel preferences. Once created, it is not supposed to be changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripRequest {
    /// A destination city.
    pub city: String,
    /// A trip duration in days.
    pub duration: usize,
    /// Selected interests in selection order.
    pub interests: Vec<Interest>,
    /// An optional budget tier.
    pub budget: Option<BudgetTier>,
    /// An optional travel style.
    pub travel_style: Option<TravelStyle>,
    /// An optional group size.
    pub group_size: Option<GroupSize>,
}

impl TripRequest {
    /// Creates a new instance of `TripRequest` without optional preferences.
    pub fn new(city: &str, duration: usize, interests: Vec<Interest>) -> Self {
        Self { city: city.to_string(), duration, interests, budget: None, travel_style: None, group_size: None }
    }

    /// Returns travel style or the default one when it is not specified.
    pub fn travel_style_or_default(&self) -> TravelStyle {
        self.travel_style.unwrap_or(TravelStyle::Balanced)
    }
}
