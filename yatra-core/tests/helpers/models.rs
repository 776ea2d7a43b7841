use crate::models::*;
use std::sync::Arc;

pub fn create_test_attraction(name: &str, visit_duration: &str, category: Interest) -> Arc<Attraction> {
    Arc::new(Attraction::new(name, "test attraction", visit_duration, "24 hours", category))
}

pub fn create_test_attractions(categories: &[Interest]) -> Vec<Arc<Attraction>> {
    categories
        .iter()
        .enumerate()
        .map(|(idx, category)| create_test_attraction(format!("attraction{idx}").as_str(), "1 hour", *category))
        .collect()
}

pub fn create_test_city(name: &str, categories: &[Interest]) -> City {
    City { name: name.to_string(), attractions: create_test_attractions(categories) }
}

pub fn get_names(attractions: &[Arc<Attraction>]) -> Vec<&str> {
    attractions.iter().map(|attraction| attraction.name.as_str()).collect()
}

pub fn get_day_names(days: &[DayPlan]) -> Vec<Vec<&str>> {
    days.iter().map(|day| get_names(&day.attractions)).collect()
}
