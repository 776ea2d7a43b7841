//! A command line interface to the travel itinerary planner.

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

mod commands;

use self::commands::catalog::{get_catalog_app, run_catalog};
use self::commands::check::{get_check_app, run_check};
use self::commands::import::{get_import_app, run_import};
use self::commands::plan::{get_plan_app, run_plan};
use clap::Command;
use std::process;

fn get_app() -> Command {
    Command::new("Yatra Itinerary Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the travel itinerary planner")
        .subcommand(get_plan_app())
        .subcommand(get_check_app())
        .subcommand(get_catalog_app())
        .subcommand(get_import_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("plan", plan_matches)) => run_plan(plan_matches),
        Some(("check", check_matches)) => run_check(check_matches),
        Some(("catalog", catalog_matches)) => run_catalog(catalog_matches),
        Some(("import", import_matches)) => run_import(import_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
