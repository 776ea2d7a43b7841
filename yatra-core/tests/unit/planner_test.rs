use super::*;
use crate::helpers::models::*;
use crate::models::Interest::*;
use std::sync::Mutex;

fn create_recording_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = Arc::new({
        let messages = messages.clone();
        move |msg: &str| messages.lock().unwrap().push(msg.to_string())
    });

    (logger, messages)
}

#[test]
fn can_plan_delhi_heritage_trip() {
    let catalog = get_builtin_catalog();

    let days = generate_itinerary(&catalog, "Delhi", 3, &[HeritageCulture]).unwrap();

    assert_eq!(get_day_names(&days), vec![vec!["Red Fort"], vec!["India Gate"], vec!["Humayun's Tomb"]]);
    assert_eq!(days.iter().map(|day| day.total_hours).collect::<Vec<_>>(), vec![2, 1, 1]);
}

#[test]
fn can_plan_unknown_city_using_default_one() {
    let catalog = get_builtin_catalog();

    let days = generate_itinerary(&catalog, "UnknownCity", 2, &[Shopping]).unwrap();

    // nothing in Delhi is about shopping, so top attractions are used
    assert_eq!(
        get_day_names(&days),
        vec![vec!["Red Fort", "India Gate", "Lotus Temple"], vec!["Chandni Chowk", "Humayun's Tomb", "Akshardham Temple"]]
    );
}

#[test]
fn can_plan_jaipur_single_day() {
    let catalog = get_builtin_catalog();

    let days = generate_itinerary(&catalog, "Jaipur", 1, &[HeritageCulture, Shopping]).unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(days[0].day, 1);
    assert_eq!(days[0].attractions.len(), 6);
    assert_eq!(days[0].total_hours, 9);
}

#[test]
fn can_count_minutes_as_hours_in_coarse_estimate() {
    let catalog = get_builtin_catalog();

    let days = generate_itinerary(&catalog, "Kerala (Kochi)", 1, &[HeritageCulture]).unwrap();

    assert_eq!(get_day_names(&days), vec![vec!["Chinese Fishing Nets", "Mattancherry Palace", "St. Francis Church"]]);
    assert_eq!(days[0].total_hours, 1 + 1 + 30);
}

#[test]
fn can_return_exactly_requested_amount_of_days() {
    let catalog = get_builtin_catalog();

    catalog.cities().for_each(|city| {
        (1..=30).for_each(|duration| {
            let days = generate_itinerary(&catalog, city.name.as_str(), duration, Interest::ALL).unwrap();
            assert_eq!(days.len(), duration);
            assert_eq!(days.iter().map(|day| day.attractions.len()).sum::<usize>(), city.attractions.len());
        })
    });
}

#[test]
fn can_generate_same_itinerary_twice() {
    let catalog = get_builtin_catalog();

    let first = generate_itinerary(&catalog, "Delhi", 4, &[SpiritualReligious, FoodCuisine]).unwrap();
    let second = generate_itinerary(&catalog, "Delhi", 4, &[SpiritualReligious, FoodCuisine]).unwrap();

    assert_eq!(first, second);
}

#[test]
fn can_reject_zero_duration() {
    let catalog = get_builtin_catalog();

    assert!(generate_itinerary(&catalog, "Delhi", 0, &[Shopping]).is_err());
}

#[test]
fn can_report_fallbacks_with_warn_policy() {
    let (logger, messages) = create_recording_logger();
    let planner = ItineraryPlanner::default().with_logger(logger);

    let itinerary = planner.plan(&TripRequest::new("Goa", 2, vec![Beaches])).unwrap();

    assert_eq!(itinerary.requested_city, "Goa");
    assert_eq!(itinerary.city, "Delhi");
    assert_eq!(
        itinerary.notices,
        vec![
            Notice::CityFallback { requested: "Goa".to_string(), resolved: "Delhi".to_string() },
            Notice::InterestFallback { city: "Delhi".to_string(), interests: vec![Beaches] },
        ]
    );
    let messages = messages.lock().unwrap();
    assert_eq!(messages.iter().filter(|msg| msg.starts_with("warning: ")).count(), 2);
    assert_eq!(messages.last().unwrap(), "planned 6 attractions of 'Delhi' across 2 days");
}

#[test]
fn can_hide_fallbacks_with_silent_policy() {
    let (logger, messages) = create_recording_logger();
    let planner = ItineraryPlanner::default().with_policy(FallbackPolicy::Silent).with_logger(logger);

    let itinerary = planner.plan(&TripRequest::new("Goa", 2, vec![Beaches])).unwrap();

    assert!(itinerary.notices.is_empty());
    assert_eq!(itinerary.attractions().count(), 6);
    assert_eq!(messages.lock().unwrap().len(), 1);
}

parameterized_test! {can_reject_fallbacks_with_strict_policy, (city, interests, expected), {
    can_reject_fallbacks_with_strict_policy_impl(city, interests, expected);
}}

can_reject_fallbacks_with_strict_policy! {
    case01_unknown_city: ("Goa", vec![HeritageCulture], "cannot plan trip: no attractions known for 'Goa', using 'Delhi' instead"),
    case02_no_match: ("Jaipur", vec![Nightlife], "cannot plan trip: no attractions in 'Jaipur' match [Nightlife], using top attractions instead"),
}

fn can_reject_fallbacks_with_strict_policy_impl(city: &str, interests: Vec<Interest>, expected: &str) {
    let planner = ItineraryPlanner::default().with_policy(FallbackPolicy::Strict);

    let result = planner.plan(&TripRequest::new(city, 3, interests));

    assert_eq!(result.unwrap_err().to_string(), expected);
}

#[test]
fn can_plan_without_notices_for_matching_request() {
    let planner = ItineraryPlanner::default().with_policy(FallbackPolicy::Strict);

    let itinerary = planner.plan(&TripRequest::new("Jaipur", 2, vec![HeritageCulture, Shopping])).unwrap();

    assert!(itinerary.notices.is_empty());
    assert_eq!(itinerary.days.len(), 2);
    assert_eq!(itinerary.total_hours(), 9);
}

#[test]
fn can_plan_with_custom_catalog() {
    let catalog = Catalog::new(vec![create_test_city("Testville", &[Photography, Beaches, Photography])], "Testville")
        .unwrap();
    let planner = ItineraryPlanner::new(Arc::new(catalog));

    let itinerary = planner.plan(&TripRequest::new("Testville", 1, vec![Photography])).unwrap();

    assert_eq!(get_day_names(&itinerary.days), vec![vec!["attraction0", "attraction2"]]);
    assert_eq!(planner.catalog().default_city().name, "Testville");
}
