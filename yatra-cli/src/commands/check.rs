#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::ArgGroup;
use yatra_cli::extensions::check::{check_pragmatic_inputs, normalize_request};
use yatra_pragmatic::format::request::{serialize_request, DEFAULT_MAX_DURATION};

const REQUEST_ARG_NAME: &str = "request";
const MAX_DURATION_ARG_NAME: &str = "max-duration";
const NORMALIZE_ARG_NAME: &str = "normalize";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check trip request and attraction catalog for errors")
        .arg(
            Arg::new(REQUEST_ARG_NAME)
                .help("Specifies path to a file with trip request in json format")
                .short('r')
                .long(REQUEST_ARG_NAME),
        )
        .arg(create_catalog_arg())
        .arg(
            Arg::new(MAX_DURATION_ARG_NAME)
                .help("Specifies max allowed trip duration in days")
                .long(MAX_DURATION_ARG_NAME),
        )
        .arg(
            Arg::new(NORMALIZE_ARG_NAME)
                .help("Writes the valid request with normalized values")
                .long(NORMALIZE_ARG_NAME)
                .requires(REQUEST_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(create_out_result_arg())
        .group(ArgGroup::new("input").args([REQUEST_ARG_NAME, CATALOG_ARG_NAME]).required(true).multiple(true))
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let max_duration =
        parse_int_value::<usize>(matches, MAX_DURATION_ARG_NAME, "max trip duration")?.unwrap_or(DEFAULT_MAX_DURATION);

    let request_reader =
        matches.get_one::<String>(REQUEST_ARG_NAME).map(|path| open_file(path, "request")).transpose()?.map(BufReader::new);
    let catalog_reader =
        matches.get_one::<String>(CATALOG_ARG_NAME).map(|path| open_file(path, "catalog")).transpose()?.map(BufReader::new);

    check_pragmatic_inputs(request_reader, catalog_reader, max_duration)
        .map_err(|errors| format!("checker found {} errors:\n{}", errors.errors.len(), errors.format_many("\n")))?;

    match matches.get_one::<String>(REQUEST_ARG_NAME) {
        Some(path) if matches.get_flag(NORMALIZE_ARG_NAME) => write_normalized_request(matches, path, max_duration),
        _ => Ok(()),
    }
}

fn write_normalized_request(matches: &ArgMatches, path: &str, max_duration: usize) -> Result<(), String> {
    let request = normalize_request(BufReader::new(open_file(path, "request")?), max_duration)
        .map_err(|errors| format!("cannot normalize request:\n{}", errors.format_many("\n")))?;

    let mut out_buffer = get_out_buffer(matches)?;
    serialize_request(&request, &mut out_buffer).map_err(|err| format!("cannot write request: '{err}'"))?;

    out_buffer.flush().map_err(|err| format!("cannot write request: '{err}'"))
}
