use super::*;
use crate::helpers::catalog::*;
use std::io::BufWriter;
use yatra_core::models::get_builtin_catalog;

#[test]
fn can_read_catalog_from_model() {
    let catalog = create_test_catalog().read_pragmatic().unwrap();

    assert_eq!(catalog.default_city().name, "Pune");
    assert_eq!(catalog.cities().count(), 2);
    let pune = catalog.get("Pune").unwrap();
    assert_eq!(pune.attractions[0].name, "Aga Khan Palace");
    assert_eq!(pune.attractions[0].visit_duration, "1-2 hours");
    assert_eq!(pune.attractions[2].category, Interest::NatureWildlife);
}

#[test]
fn can_read_catalog_from_json() {
    let json = r#"
    {
      "defaultCity": "Agra",
      "cities": [
        {
          "name": "Agra",
          "attractions": [
            { "name": "Taj Mahal", "description": "Marble mausoleum", "time": "2-3 hours", "hours": "6:00 AM - 6:30 PM", "category": "Heritage & Culture" }
          ]
        }
      ]
    }
    "#;

    let catalog = BufReader::new(json.as_bytes()).read_pragmatic().unwrap();

    assert_eq!(catalog.lookup("Anywhere").city().attractions[0].name, "Taj Mahal");
}

#[test]
fn can_reject_invalid_catalog() {
    let mut catalog = create_test_catalog();
    catalog.default_city = "Mumbai".to_string();

    let errors = catalog.read_pragmatic().unwrap_err();

    assert!(errors.has_code("E1102"));
}

#[test]
fn can_report_broken_catalog_json() {
    let errors = "[]".to_string().read_pragmatic().unwrap_err();

    assert!(errors.has_code("E0001"));
}

#[test]
fn can_write_and_read_builtin_catalog() {
    let builtin = get_builtin_catalog();
    let model = create_catalog_model(&builtin);

    let mut buffer = Vec::new();
    serialize_catalog(&model, &mut BufWriter::new(&mut buffer)).unwrap();
    let catalog = BufReader::new(buffer.as_slice()).read_pragmatic().unwrap();

    assert_eq!(model.default_city, "Delhi");
    assert_eq!(catalog.cities().collect::<Vec<_>>(), builtin.cities().collect::<Vec<_>>());
}
