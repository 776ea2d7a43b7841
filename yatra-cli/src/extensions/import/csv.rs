//! Import from a simple csv format logic.

#[cfg(all(test, feature = "csv-format"))]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_catalog;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;
    extern crate serde;

    use serde::Deserialize;
    use std::error::Error;
    use std::io::{BufReader, Read};
    use yatra_pragmatic::format::FormatError;
    use yatra_pragmatic::format::catalog::{Attraction, Catalog, City};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    struct CsvAttraction {
        city: String,
        name: String,
        description: String,
        time: String,
        hours: String,
        category: String,
    }

    fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
    where
        for<'de> T: Deserialize<'de>,
    {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut entries = vec![];

        for entry in reader.deserialize() {
            entries.push(entry?);
        }

        Ok(entries)
    }

    fn read_cities<R: Read>(reader: BufReader<R>) -> Result<Vec<City>, Box<dyn Error>> {
        let cities = read_csv_entries::<CsvAttraction, _>(reader)?.into_iter().fold(
            Vec::<City>::new(),
            |mut cities, entry| {
                let attraction = Attraction {
                    name: entry.name,
                    description: entry.description,
                    time: entry.time,
                    hours: entry.hours,
                    category: entry.category,
                };

                match cities.iter_mut().find(|city| city.name == entry.city) {
                    Some(city) => city.attractions.push(attraction),
                    None => cities.push(City { name: entry.city, attractions: vec![attraction] }),
                }

                cities
            },
        );

        Ok(cities)
    }

    fn create_format_error(entity: &str, error: Box<dyn Error>) -> FormatError {
        FormatError::new_with_details(
            "E0002".to_string(),
            format!("cannot read {entity}"),
            format!("check {entity} definition"),
            format!("{error}"),
        )
    }

    /// Reads attraction catalog from csv format with `CITY,NAME,DESCRIPTION,TIME,HOURS,CATEGORY` columns.
    pub fn read_csv_catalog<R: Read>(reader: BufReader<R>, default_city: Option<&str>) -> Result<Catalog, FormatError> {
        let cities = read_cities(reader).map_err(|err| create_format_error("attractions", err))?;

        let default_city = default_city
            .map(|city| city.to_string())
            .or_else(|| cities.first().map(|city| city.name.clone()))
            .ok_or_else(|| create_format_error("attractions", "no attractions found".into()))?;

        Ok(Catalog { default_city, cities })
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use std::io::{BufReader, Read};
    use yatra_pragmatic::format::FormatError;
    use yatra_pragmatic::format::catalog::Catalog;

    /// A stub method for reading attraction catalog from csv format.
    pub fn read_csv_catalog<R: Read>(
        _reader: BufReader<R>,
        _default_city: Option<&str>,
    ) -> Result<Catalog, FormatError> {
        unreachable!("csv-format feature is not included")
    }
}
