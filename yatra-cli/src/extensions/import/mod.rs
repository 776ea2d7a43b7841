//! Import from another format logic.

mod csv;
pub use self::csv::read_csv_catalog;

use std::io::{BufReader, Read};
use yatra_pragmatic::format::catalog::Catalog;

/// Imports attraction catalog from specified format.
///
/// When default city is not specified, the first city of the input becomes the default one.
pub fn import_catalog<R: Read>(
    input_format: &str,
    reader: BufReader<R>,
    default_city: Option<&str>,
) -> Result<Catalog, String> {
    match input_format {
        "csv" => read_csv_catalog(reader, default_city).map_err(|err| format!("cannot read csv: {err}")),
        _ => Err(format!("unknown format: '{input_format}'")),
    }
}
