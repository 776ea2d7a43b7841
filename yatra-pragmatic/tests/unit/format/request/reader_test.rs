use super::*;
use crate::helpers::request::create_test_request;
use std::io::BufWriter;

#[test]
fn can_read_request_from_json() {
    let json = r#"
    {
      "city": "Jaipur",
      "duration": 2,
      "interests": ["Heritage & Culture", "Shopping"],
      "budget": "mid-range",
      "travelStyle": "relaxed",
      "groupSize": "couple"
    }
    "#;

    let request = json.to_string().read_pragmatic().unwrap();

    assert_eq!(request.city, "Jaipur");
    assert_eq!(request.duration, 2);
    assert_eq!(request.interests, vec![Interest::HeritageCulture, Interest::Shopping]);
    assert_eq!(request.budget, Some(BudgetTier::MidRange));
    assert_eq!(request.travel_style, Some(TravelStyle::Relaxed));
    assert_eq!(request.group_size, Some(GroupSize::Couple));
}

#[test]
fn can_read_form_values_as_text() {
    let json = r#"{"city":"Delhi","duration":"3","interests":["Shopping"],"budget":"","travelStyle":"","groupSize":""}"#;

    let request = BufReader::new(json.as_bytes()).read_pragmatic().unwrap();

    assert_eq!(request.duration, 3);
    assert_eq!(request.budget, None);
    assert_eq!(request.travel_style, None);
    assert_eq!(request.group_size, None);
}

#[test]
fn can_report_broken_json() {
    let result = "{ city: ".to_string().read_pragmatic();

    let errors = result.unwrap_err();
    assert!(errors.has_code("E0000"));
    assert_eq!(errors.errors[0].cause, "cannot deserialize request");
}

#[test]
fn can_report_all_validation_errors_at_once() {
    let result = r#"{"duration": 0}"#.to_string().read_pragmatic();

    let errors = result.unwrap_err();
    assert_eq!(errors.iter().map(|err| err.code.as_str()).collect::<Vec<_>>(), vec!["E1000", "E1001", "E1002"]);
}

#[test]
fn can_use_custom_max_duration() {
    let request = create_test_request("Delhi", 45, &["Shopping"]);

    assert!(map_to_trip_request(request.clone(), DEFAULT_MAX_DURATION).is_err());
    assert_eq!(map_to_trip_request(request, 60).unwrap().duration, 45);
}

#[test]
fn can_trim_city_name() {
    let request = create_test_request("  Delhi ", 1, &["Shopping"]);

    assert_eq!(request.read_pragmatic().unwrap().city, "Delhi");
}

#[test]
fn can_create_request_model_from_core_one() {
    let mut request = TripRequest::new("Goa", 4, vec![Interest::Beaches, Interest::Nightlife]);
    request.group_size = Some(GroupSize::Group);

    let model = create_request_model(&request);

    assert_eq!(model.duration, Some(DurationValue::Days(4)));
    assert_eq!(model.interests, vec!["Beaches".to_string(), "Nightlife".to_string()]);
    assert_eq!(model.group_size.as_deref(), Some("group"));
    assert_eq!(model.read_pragmatic().unwrap(), request);
}

#[test]
fn can_serialize_request_without_blank_preferences() {
    let request = create_request_model(&TripRequest::new("Goa", 2, vec![Interest::Beaches]));
    let mut writer = BufWriter::new(Vec::new());

    serialize_request(&request, &mut writer).unwrap();

    let json = String::from_utf8(writer.into_inner().unwrap()).unwrap().replace(' ', "").replace('\n', "");
    assert_eq!(json, r#"{"city":"Goa","duration":2,"interests":["Beaches"]}"#);
}
