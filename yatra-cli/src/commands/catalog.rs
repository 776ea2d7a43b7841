#[cfg(test)]
#[path = "../../tests/unit/commands/catalog_test.rs"]
mod catalog_test;

use super::*;
use yatra_core::models::{Interest, DESTINATIONS};
use yatra_pragmatic::format::catalog::{create_catalog_model, serialize_catalog};

const DUMP_ARG_NAME: &str = "dump";

pub fn get_catalog_app() -> Command {
    Command::new("catalog")
        .about("Lists destinations and interests known to the planner")
        .arg(create_catalog_arg())
        .arg(
            Arg::new(DUMP_ARG_NAME)
                .help("Writes the whole catalog in json format instead of a summary")
                .long(DUMP_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(create_out_result_arg())
}

pub fn run_catalog(matches: &ArgMatches) -> Result<(), String> {
    let catalog = get_catalog(matches)?;
    let mut out_buffer = get_out_buffer(matches)?;

    if matches.get_flag(DUMP_ARG_NAME) {
        serialize_catalog(&create_catalog_model(catalog.as_ref()), &mut out_buffer)
            .map_err(|err| format!("cannot serialize catalog: '{err}'"))?;
    } else {
        let is_builtin = matches.get_one::<String>(CATALOG_ARG_NAME).is_none();
        write_summary(catalog.as_ref(), is_builtin, &mut out_buffer)
            .map_err(|err| format!("cannot write catalog summary: '{err}'"))?;
    }

    out_buffer.flush().map_err(|err| format!("cannot write catalog: '{err}'"))
}

/// Writes destinations and interests available in each of them.
fn write_summary<W: Write>(catalog: &Catalog, is_builtin: bool, writer: &mut W) -> std::io::Result<()> {
    let destinations = if is_builtin {
        DESTINATIONS.iter().map(|name| name.to_string()).collect::<Vec<_>>()
    } else {
        catalog.cities().map(|city| city.name.clone()).collect()
    };
    let default_city = catalog.default_city().name.as_str();

    writeln!(writer, "Destinations:")?;
    for destination in destinations.iter() {
        let marker = match (catalog.contains(destination), destination == default_city) {
            (true, true) => " (curated, default)",
            (true, false) => " (curated)",
            (false, _) => "",
        };
        writeln!(writer, "  {destination}{marker}")?;
    }

    writeln!(writer, "Interests:")?;
    for interest in Interest::ALL {
        let cities = catalog
            .cities()
            .filter(|city| city.interests().contains(interest))
            .map(|city| city.name.as_str())
            .collect::<Vec<_>>();

        if cities.is_empty() {
            writeln!(writer, "  {interest}")?;
        } else {
            writeln!(writer, "  {interest}: {}", cities.join(", "))?;
        }
    }

    Ok(())
}
