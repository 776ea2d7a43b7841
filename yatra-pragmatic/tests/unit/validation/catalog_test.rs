use super::*;
use crate::helpers::catalog::*;

fn assert_result(code: &str, action: &str, result: Option<FormatError>) {
    assert_eq!(result.clone().map(|err| err.code), Some(code.to_string()));
    assert!(result.map_or("".to_string(), |err| err.action).contains(action));
}

#[test]
fn can_accept_valid_catalog() {
    let catalog = create_test_catalog();

    assert!(CatalogValidationContext::new(&catalog).validate().is_ok());
}

#[test]
fn can_detect_empty_catalog() {
    let catalog = Catalog { default_city: "Pune".to_string(), cities: vec![] };

    let errors = CatalogValidationContext::new(&catalog).validate().unwrap_err();

    assert_eq!(errors.iter().map(|err| err.code.as_str()).collect::<Vec<_>>(), vec!["E1100", "E1102"]);
}

#[test]
fn can_detect_duplicated_cities() {
    let mut catalog = create_test_catalog();
    catalog.cities.push(create_test_city("Goa", vec![create_test_attraction("Fort Aguada", "1 hour", "Heritage & Culture")]));

    let result = check_e1101_no_duplicated_cities(&CatalogValidationContext::new(&catalog)).err();

    assert_result("E1101", "Goa", result);
}

#[test]
fn can_detect_missing_default_city() {
    let catalog = Catalog { default_city: "Delhi".to_string(), ..create_test_catalog() };

    let result = check_e1102_default_city_exists(&CatalogValidationContext::new(&catalog)).err();

    assert_result("E1102", "'Delhi'", result);
}

#[test]
fn can_detect_city_without_attractions() {
    let mut catalog = create_test_catalog();
    catalog.cities.push(create_test_city("Hampi", vec![]));

    let result = check_e1103_cities_have_attractions(&CatalogValidationContext::new(&catalog)).err();

    assert_result("E1103", "Hampi", result);
}

#[test]
fn can_detect_duplicated_attractions() {
    let mut catalog = create_test_catalog();
    catalog.cities[1].attractions.push(create_test_attraction("Baga Beach", "1 hour", "Beaches"));

    let result = check_e1104_no_duplicated_attractions(&CatalogValidationContext::new(&catalog)).err();

    assert_result("E1104", "Goa: Baga Beach", result);
}

#[test]
fn can_detect_unknown_categories() {
    let mut catalog = create_test_catalog();
    catalog.cities[1].attractions.push(create_test_attraction("Casino", "2 hours", "Gambling"));

    let result = check_e1105_categories_are_known(&CatalogValidationContext::new(&catalog)).err();

    assert_result("E1105", "Goa/Casino='Gambling'", result);
}
