use super::*;
use crate::helpers::models::*;
use crate::models::Interest;
use proptest::prelude::*;

parameterized_test! {can_estimate_visit_hours, (duration, expected), {
    assert_eq!(estimate_visit_hours(duration), expected);
}}

can_estimate_visit_hours! {
    case01_range: ("2-3 hours", 2),
    case02_single: ("1 hour", 1),
    case03_fraction: ("1.5 hours", 1),
    case04_minutes: ("30 minutes", 30),
    case05_wide_range: ("4-6 hours", 4),
    case06_text: ("half a day", 1),
    case07_empty: ("", 1),
    case08_zero: ("0 hours", 1),
    case09_leading_space: ("  3 hours", 3),
    case10_plus_sign: ("+2 hours", 2),
    case11_leading_dash: ("-2 hours", 1),
    case12_overflow: ("99999999999 hours", u32::MAX),
    case13_large: ("4000000000 hours", 4_000_000_000),
    case14_zeros_only: ("000 hours", 1),
}

parameterized_test! {can_get_attractions_per_day, (total, days, expected), {
    assert_eq!(get_attractions_per_day(total, days), expected);
}}

can_get_attractions_per_day! {
    case01: (6, 1, 6),
    case02: (6, 4, 2),
    case03: (3, 3, 1),
    case04: (2, 5, 1),
    case05: (0, 3, 0),
    case06: (5, 0, 0),
}

#[test]
fn can_split_into_consecutive_slices() {
    let attractions = create_test_attractions(&[Interest::Shopping; 6]);

    let days = partition_into_days(&attractions, 4).unwrap();

    assert_eq!(
        get_day_names(&days),
        vec![
            vec!["attraction0", "attraction1"],
            vec!["attraction2", "attraction3"],
            vec!["attraction4", "attraction5"],
            Vec::<&str>::new(),
        ]
    );
    assert_eq!(days.iter().map(|day| day.day).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(days.iter().map(|day| day.total_hours).collect::<Vec<_>>(), vec![2, 2, 2, 0]);
}

#[test]
fn can_leave_trailing_days_empty_when_attractions_are_few() {
    let attractions = create_test_attractions(&[Interest::Shopping; 2]);

    let days = partition_into_days(&attractions, 5).unwrap();

    assert_eq!(days.len(), 5);
    assert_eq!(days.iter().map(|day| day.attractions.len()).collect::<Vec<_>>(), vec![1, 1, 0, 0, 0]);
}

#[test]
fn can_create_empty_days_for_empty_list() {
    let days = partition_into_days(&[], 3).unwrap();

    assert_eq!(days.len(), 3);
    assert!(days.iter().all(|day| day.attractions.is_empty() && day.total_hours == 0));
}

#[test]
fn can_reject_zero_days() {
    let attractions = create_test_attractions(&[Interest::Shopping]);

    let result = partition_into_days(&attractions, 0);

    assert_eq!(result.unwrap_err().to_string(), "trip duration should be at least one day");
}

proptest! {
    #[test]
    fn can_preserve_all_attractions_in_order(size in 0_usize..40, days in 1_usize..45) {
        let attractions = create_test_attractions(&vec![Interest::Shopping; size]);

        let plans = partition_into_days(&attractions, days).unwrap();

        prop_assert_eq!(plans.len(), days);
        let flattened = plans.iter().flat_map(|day| day.attractions.iter().cloned()).collect::<Vec<_>>();
        prop_assert_eq!(flattened, attractions);

        let per_day = get_attractions_per_day(size, days);
        prop_assert!(plans.iter().all(|day| day.attractions.len() <= per_day));
    }
}

#[test]
fn can_saturate_day_hours_for_huge_durations() {
    let attractions = vec![
        create_test_attraction("first", "4000000000 hours", Interest::Shopping),
        create_test_attraction("second", "4000000000 hours", Interest::Shopping),
    ];

    let days = partition_into_days(&attractions, 1).unwrap();

    assert_eq!(days.len(), 1);
    assert_eq!(get_day_names(&days), vec![vec!["first", "second"]]);
    assert_eq!(days[0].total_hours, u32::MAX);
}
