#[cfg(test)]
#[path = "../../tests/unit/validation/catalog_test.rs"]
mod catalog_test;

use super::*;
use std::str::FromStr;
use yatra_core::models::Interest;

/// Checks that catalog has at least one city.
fn check_e1100_has_cities(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    if ctx.catalog.cities.is_empty() {
        Err(create_error("E1100", "catalog has no cities", "add at least one city with attractions".to_string()))
    } else {
        Ok(())
    }
}

/// Checks that city names are unique.
fn check_e1101_no_duplicated_cities(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.catalog.cities.iter().map(|city| &city.name)).map_or(Ok(()), |names| {
        Err(create_error("E1101", "duplicated city names", format!("remove duplicated cities: {}", names.join(", "))))
    })
}

/// Checks that default city is defined in the catalog.
fn check_e1102_default_city_exists(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    let default_city = &ctx.catalog.default_city;

    if ctx.catalog.cities.iter().any(|city| city.name == *default_city) {
        Ok(())
    } else {
        Err(create_error(
            "E1102",
            "default city is not in catalog",
            format!("add '{default_city}' to cities or change default city"),
        ))
    }
}

/// Checks that every city has attractions.
fn check_e1103_cities_have_attractions(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    let names =
        ctx.catalog.cities.iter().filter(|city| city.attractions.is_empty()).map(|city| city.name.clone()).collect::<Vec<_>>();

    if names.is_empty() {
        Ok(())
    } else {
        Err(create_error("E1103", "cities without attractions", format!("add attractions to: {}", names.join(", "))))
    }
}

/// Checks that attraction names are unique within a city.
fn check_e1104_no_duplicated_attractions(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    let duplicates = ctx
        .catalog
        .cities
        .iter()
        .filter_map(|city| {
            get_duplicates(city.attractions.iter().map(|attraction| &attraction.name))
                .map(|names| format!("{}: {}", city.name, names.join(", ")))
        })
        .collect::<Vec<_>>();

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(create_error(
            "E1104",
            "duplicated attraction names",
            format!("remove duplicated attractions in {}", duplicates.join("; ")),
        ))
    }
}

/// Checks that attraction categories are known interests.
fn check_e1105_categories_are_known(ctx: &CatalogValidationContext) -> Result<(), FormatError> {
    let unknown = ctx
        .catalog
        .cities
        .iter()
        .flat_map(|city| city.attractions.iter().map(move |attraction| (city, attraction)))
        .filter(|(_, attraction)| Interest::from_str(attraction.category.as_str()).is_err())
        .map(|(city, attraction)| format!("{}/{}='{}'", city.name, attraction.name, attraction.category))
        .collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(create_error("E1105", "unknown attraction categories", format!("check categories of {}", unknown.join(", "))))
    }
}

/// Validates attraction catalog.
pub fn validate_catalog(ctx: &CatalogValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1100_has_cities(ctx),
        check_e1101_no_duplicated_cities(ctx),
        check_e1102_default_city_exists(ctx),
        check_e1103_cities_have_attractions(ctx),
        check_e1104_no_duplicated_attractions(ctx),
        check_e1105_categories_are_known(ctx),
    ])
}
