use super::*;
use std::fs;
use tempfile::NamedTempFile;

fn run_catalog_with_args(args: &[&str]) -> String {
    let out_file = NamedTempFile::new().unwrap();
    let args = [&["catalog", "-o", out_file.path().to_str().unwrap()], args].concat();
    let matches = get_catalog_app().try_get_matches_from(args).unwrap();

    run_catalog(&matches).unwrap();

    fs::read_to_string(out_file.path()).unwrap()
}

#[test]
fn can_list_builtin_destinations_and_interests() {
    let summary = run_catalog_with_args(&[]);

    assert!(summary.starts_with("Destinations:\n  Delhi (curated, default)\n  Mumbai\n"));
    assert!(summary.contains("  Kerala (Kochi) (curated)\n"));
    assert!(summary.contains("  Ooty\nInterests:\n"));
    assert!(summary.contains("  Heritage & Culture: Delhi, Jaipur, Kerala (Kochi)\n"));
    assert!(summary.contains("  Shopping: Jaipur\n"));
    assert!(summary.ends_with("  Beaches\n"));
}

#[test]
fn can_list_custom_catalog() {
    let summary = run_catalog_with_args(&["--catalog", "tests/data/catalog.json"]);

    assert_eq!(
        summary,
        "Destinations:\n  Pune (curated, default)\n  Goa (curated)\nInterests:\n  Heritage & Culture: Pune\n  \
         Nature & Wildlife: Pune\n  Food & Cuisine\n  Adventure Sports\n  Spiritual & Religious\n  Art & Crafts\n  \
         Photography\n  Shopping\n  Nightlife\n  Beaches: Goa\n"
    );
}

#[test]
fn can_dump_catalog() {
    let catalog = run_catalog_with_args(&["--dump", "--catalog", "tests/data/catalog.json"]);
    let catalog = catalog.replace(' ', "").replace('\n', "");

    assert!(catalog.starts_with(r#"{"defaultCity":"Pune","cities":[{"name":"Pune""#));
    assert!(catalog.contains(r#""name":"BagaBeach""#));
}

#[test]
fn can_report_invalid_catalog() {
    let matches =
        get_catalog_app().try_get_matches_from(vec!["catalog", "--catalog", "tests/data/catalog.invalid.json"]).unwrap();

    let err = run_catalog(&matches).unwrap_err();

    assert!(err.starts_with("cannot read catalog:\n"));
    assert!(err.contains("E1102"));
}
