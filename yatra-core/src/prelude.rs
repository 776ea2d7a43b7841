//! This module reimports commonly used types.

pub use crate::construction::{estimate_visit_hours, filter_by_interests, partition_into_days, FilterOutcome};

pub use crate::models::{
    get_builtin_catalog, Attraction, BudgetTier, Catalog, City, CityLookup, DayPlan, GroupSize, Interest, Itinerary,
    Notice, ShareMessage, TravelStyle, TripRequest, DEFAULT_CITY, DESTINATIONS,
};

pub use crate::planner::{generate_itinerary, FallbackPolicy, ItineraryPlanner};

pub use crate::utils::{GenericError, GenericResult, InfoLogger};
