#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use yatra_cli::extensions::import::import_catalog;
use yatra_pragmatic::format::catalog::serialize_catalog;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "input-file";
const DEFAULT_CITY_ARG_NAME: &str = "default-city";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Provides the way to import attraction catalog from various formats")
        .arg(Arg::new(FORMAT_ARG_NAME).help("Specifies input type").required(true).value_parser(["csv"]).index(1))
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file which contains attractions")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(DEFAULT_CITY_ARG_NAME)
                .help("Specifies a default city of the catalog. The first imported city is used by default")
                .long(DEFAULT_CITY_ARG_NAME),
        )
        .arg(create_out_result_arg())
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("missing input format")?;
    let input_file = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("missing input file")?;
    let default_city = matches.get_one::<String>(DEFAULT_CITY_ARG_NAME).map(String::as_str);

    let catalog = import_catalog(input_format, BufReader::new(open_file(input_file, "input")?), default_city)
        .map_err(|err| format!("cannot import catalog: '{err}'"))?;

    let mut out_buffer = get_out_buffer(matches)?;
    serialize_catalog(&catalog, &mut out_buffer).map_err(|err| format!("cannot serialize result catalog: '{err}'"))?;

    out_buffer.flush().map_err(|err| format!("cannot write result catalog: '{err}'"))
}
