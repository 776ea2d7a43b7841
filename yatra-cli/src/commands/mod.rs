use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod catalog;
pub mod check;
pub mod import;
pub mod plan;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;
use yatra_cli::extensions::plan::config::{read_config, Config};
use yatra_core::models::{get_builtin_catalog, Catalog};
use yatra_pragmatic::format::catalog::PragmaticCatalog;

pub(crate) const CATALOG_ARG_NAME: &str = "catalog";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn create_catalog_arg() -> Arg {
    Arg::new(CATALOG_ARG_NAME)
        .help("Specifies path to a file with attraction catalog in json format. Built-in one is used by default")
        .long(CATALOG_ARG_NAME)
        .required(false)
}

fn create_out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to file for result output")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
        .required(false)
}

fn get_out_buffer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

fn get_catalog(matches: &ArgMatches) -> Result<Arc<Catalog>, String> {
    match matches.get_one::<String>(CATALOG_ARG_NAME) {
        Some(path) => BufReader::new(open_file(path, "catalog")?)
            .read_pragmatic()
            .map(Arc::new)
            .map_err(|errors| format!("cannot read catalog:\n{}", errors.format_many("\n"))),
        None => Ok(get_builtin_catalog()),
    }
}

fn get_config(matches: &ArgMatches, arg_name: &str) -> Result<Config, String> {
    match matches.get_one::<String>(arg_name) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string()),
        None => Ok(Config::default()),
    }
}
