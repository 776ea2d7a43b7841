//! Contains the itinerary planner: a catalog lookup followed by interest filtering and day partitioning.

#[cfg(test)]
#[path = "../tests/unit/planner_test.rs"]
mod planner_test;

use crate::construction::{filter_by_interests, partition_into_days};
use crate::models::*;
use crate::utils::{create_silent_logger, GenericResult, InfoLogger};
use std::sync::Arc;

/// Specifies how the planner reacts on an unknown city or on interests which match nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Fallbacks are applied without any trace.
    Silent,
    /// Fallbacks are applied, reported as notices and logged.
    #[default]
    Warn,
    /// Fallbacks are not allowed: planning fails instead.
    Strict,
}

/// Generates day plans for the city using the given catalog.
///
/// Unknown city resolves to the catalog's default city, interests which match nothing resolve to
/// the first attractions of the city. Fails only when `duration` is zero.
pub fn generate_itinerary(
    catalog: &Catalog,
    city: &str,
    duration: usize,
    interests: &[Interest],
) -> GenericResult<Vec<DayPlan>> {
    let attractions = filter_by_interests(&catalog.lookup(city).city().attractions, interests).attractions;

    partition_into_days(&attractions, duration)
}

/// Builds itineraries for trip requests.
pub struct ItineraryPlanner {
    catalog: Arc<Catalog>,
    policy: FallbackPolicy,
    logger: InfoLogger,
}

impl ItineraryPlanner {
    /// Creates a new instance of `ItineraryPlanner` with default policy and without logging.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, policy: FallbackPolicy::default(), logger: create_silent_logger() }
    }

    /// Sets fallback policy.
    pub fn with_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the catalog used for planning.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.as_ref()
    }

    /// Builds an itinerary for the request.
    pub fn plan(&self, request: &TripRequest) -> GenericResult<Itinerary> {
        let mut notices = Vec::new();

        let lookup = self.catalog.lookup(request.city.as_str());
        let city = lookup.city();
        if lookup.is_fallback() {
            self.accept_fallback(
                &mut notices,
                Notice::CityFallback { requested: request.city.clone(), resolved: city.name.clone() },
            )?;
        }

        let outcome = filter_by_interests(&city.attractions, &request.interests);
        if outcome.is_fallback {
            self.accept_fallback(
                &mut notices,
                Notice::InterestFallback { city: city.name.clone(), interests: request.interests.clone() },
            )?;
        }

        let days = partition_into_days(&outcome.attractions, request.duration)?;

        (self.logger)(&format!(
            "planned {} attractions of '{}' across {} days",
            outcome.attractions.len(),
            city.name,
            days.len()
        ));

        Ok(Itinerary { requested_city: request.city.clone(), city: city.name.clone(), days, notices })
    }

    fn accept_fallback(&self, notices: &mut Vec<Notice>, notice: Notice) -> GenericResult<()> {
        match self.policy {
            FallbackPolicy::Silent => Ok(()),
            FallbackPolicy::Warn => {
                (self.logger)(&format!("warning: {notice}"));
                notices.push(notice);
                Ok(())
            }
            FallbackPolicy::Strict => Err(format!("cannot plan trip: {notice}").into()),
        }
    }
}

impl Default for ItineraryPlanner {
    fn default() -> Self {
        Self::new(get_builtin_catalog())
    }
}
