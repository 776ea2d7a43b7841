use super::*;
use crate::helpers::models::create_test_attraction;

#[test]
fn can_display_notices() {
    let city = Notice::CityFallback { requested: "Goa".to_string(), resolved: "Delhi".to_string() };
    let interests =
        Notice::InterestFallback { city: "Delhi".to_string(), interests: vec![Interest::Beaches, Interest::Nightlife] };

    assert_eq!(city.to_string(), "no attractions known for 'Goa', using 'Delhi' instead");
    assert_eq!(
        interests.to_string(),
        "no attractions in 'Delhi' match [Beaches, Nightlife], using top attractions instead"
    );
}

#[test]
fn can_get_itinerary_totals() {
    let first = create_test_attraction("first", "2-3 hours", Interest::Shopping);
    let second = create_test_attraction("second", "4 hours", Interest::Shopping);
    let itinerary = Itinerary {
        requested_city: "Delhi".to_string(),
        city: "Delhi".to_string(),
        days: vec![
            DayPlan { day: 1, attractions: vec![first], total_hours: 2 },
            DayPlan { day: 2, attractions: vec![second], total_hours: 4 },
            DayPlan { day: 3, attractions: vec![], total_hours: 0 },
        ],
        notices: vec![],
    };

    assert_eq!(itinerary.total_hours(), 6);
    assert_eq!(itinerary.attractions().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["first", "second"]);
}

#[test]
fn can_create_share_message() {
    let message = ShareMessage::new("Jaipur", 4);

    assert_eq!(message.title, "My Jaipur Travel Itinerary");
    assert_eq!(message.text, "Check out my 4-day itinerary for Jaipur!");
    assert_eq!(ShareMessage::ready_notice("Jaipur", 4), "Your 4-day trip to Jaipur is ready.");
}

#[test]
fn can_saturate_itinerary_total_hours() {
    let itinerary = Itinerary {
        requested_city: "Delhi".to_string(),
        city: "Delhi".to_string(),
        days: vec![
            DayPlan { day: 1, attractions: vec![], total_hours: u32::MAX - 1 },
            DayPlan { day: 2, attractions: vec![], total_hours: 5 },
        ],
        notices: vec![],
    };

    assert_eq!(itinerary.total_hours(), u32::MAX);
}
