#[cfg(test)]
#[path = "../../tests/unit/commands/plan_test.rs"]
mod plan_test;

use super::*;
use std::thread;
use yatra_cli::extensions::plan::config::{
    create_planner_from_config, FallbackType, LoggingConfig, OutputConfig, PlanningConfig, TelemetryConfig,
};
use yatra_core::models::{BudgetTier, GroupSize, Interest, ShareMessage, TravelStyle};
use yatra_pragmatic::format::itinerary::{create_planning_error, write_pragmatic};
use yatra_pragmatic::format::request::{deserialize_request, map_to_trip_request, DurationValue, Request};
use yatra_pragmatic::format::MultiFormatError;

const REQUEST_ARG_NAME: &str = "request";
const CITY_ARG_NAME: &str = "city";
const DURATION_ARG_NAME: &str = "duration";
const INTEREST_ARG_NAME: &str = "interest";
const BUDGET_ARG_NAME: &str = "budget";
const STYLE_ARG_NAME: &str = "style";
const GROUP_SIZE_ARG_NAME: &str = "group-size";
const CONFIG_ARG_NAME: &str = "config";
const FORMAT_ARG_NAME: &str = "format";
const SHARE_ARG_NAME: &str = "share";
const STRICT_ARG_NAME: &str = "strict";
const DELAY_ARG_NAME: &str = "delay";
const QUIET_ARG_NAME: &str = "quiet";

fn get_values<T>(values: &[T], as_str: fn(&T) -> &'static str) -> Vec<&'static str> {
    values.iter().map(as_str).collect()
}

pub fn get_plan_app() -> Command {
    Command::new("plan")
        .about("Generates a day-by-day itinerary for a trip")
        .arg(
            Arg::new(REQUEST_ARG_NAME)
                .help("Specifies path to a file with trip request in json format")
                .short('r')
                .long(REQUEST_ARG_NAME)
                .required_unless_present(CITY_ARG_NAME)
                .conflicts_with_all([CITY_ARG_NAME, DURATION_ARG_NAME, INTEREST_ARG_NAME]),
        )
        .arg(
            Arg::new(CITY_ARG_NAME)
                .help("Specifies destination city")
                .short('c')
                .long(CITY_ARG_NAME)
                .requires_all([DURATION_ARG_NAME, INTEREST_ARG_NAME]),
        )
        .arg(
            Arg::new(DURATION_ARG_NAME)
                .help("Specifies trip duration in days")
                .short('d')
                .long(DURATION_ARG_NAME),
        )
        .arg(
            Arg::new(INTEREST_ARG_NAME)
                .help("Specifies an interest, can be used multiple times")
                .short('i')
                .long(INTEREST_ARG_NAME)
                .action(ArgAction::Append)
                .value_parser(get_values(Interest::ALL, Interest::as_str)),
        )
        .arg(
            Arg::new(BUDGET_ARG_NAME)
                .help("Specifies budget tier")
                .long(BUDGET_ARG_NAME)
                .value_parser(get_values(BudgetTier::ALL, BudgetTier::as_str)),
        )
        .arg(
            Arg::new(STYLE_ARG_NAME)
                .help("Specifies travel style")
                .long(STYLE_ARG_NAME)
                .value_parser(get_values(TravelStyle::ALL, TravelStyle::as_str)),
        )
        .arg(
            Arg::new(GROUP_SIZE_ARG_NAME)
                .help("Specifies group size")
                .long(GROUP_SIZE_ARG_NAME)
                .value_parser(get_values(GroupSize::ALL, GroupSize::as_str)),
        )
        .arg(create_catalog_arg())
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to a planner config file")
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .value_parser(["json", "text"]),
        )
        .arg(
            Arg::new(SHARE_ARG_NAME)
                .help("Includes share message into the output")
                .long(SHARE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(STRICT_ARG_NAME)
                .help("Fails instead of using fallbacks for unknown city or unmatched interests")
                .long(STRICT_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(DELAY_ARG_NAME)
                .help("Specifies a delay in milliseconds before itinerary is shown")
                .long(DELAY_ARG_NAME),
        )
        .arg(create_out_result_arg())
        .arg(
            Arg::new(QUIET_ARG_NAME)
                .help("Disables logging to stderr")
                .short('q')
                .long(QUIET_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_plan(matches: &ArgMatches) -> Result<(), String> {
    let config = apply_arg_overrides(get_config(matches, CONFIG_ARG_NAME)?, matches)?;
    let catalog = get_catalog(matches)?;
    let request = get_request(matches)?;

    let trip = map_to_trip_request(request, config.max_duration()).map_err(|errors| format_errors(&errors))?;

    let logger = config.create_logger();
    let planner = create_planner_from_config(catalog, &config, logger.clone());
    let itinerary = planner.plan(&trip).map_err(|err| create_planning_error(err).to_string())?;

    let delay = config.delay();
    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let output_type = config.output_type().map_err(|err| err.to_string())?;
    let mut out_buffer = get_out_buffer(matches)?;
    write_pragmatic(&trip, &itinerary, config.with_share(), output_type, &mut out_buffer)
        .map_err(|err| format!("cannot write itinerary: '{err}'"))?;

    (logger)(ShareMessage::ready_notice(itinerary.requested_city.as_str(), trip.duration).as_str());

    Ok(())
}

fn get_request(matches: &ArgMatches) -> Result<Request, String> {
    if let Some(path) = matches.get_one::<String>(REQUEST_ARG_NAME) {
        return deserialize_request(BufReader::new(open_file(path, "request")?)).map_err(|errors| format_errors(&errors));
    }

    let get_string = |arg_name: &str| matches.get_one::<String>(arg_name).cloned();

    Ok(Request {
        city: get_string(CITY_ARG_NAME).unwrap_or_default(),
        duration: parse_int_value::<i64>(matches, DURATION_ARG_NAME, "trip duration")?.map(DurationValue::Days),
        interests: matches.get_many::<String>(INTEREST_ARG_NAME).map(|values| values.cloned().collect()).unwrap_or_default(),
        budget: get_string(BUDGET_ARG_NAME),
        travel_style: get_string(STYLE_ARG_NAME),
        group_size: get_string(GROUP_SIZE_ARG_NAME),
    })
}

fn apply_arg_overrides(mut config: Config, matches: &ArgMatches) -> Result<Config, String> {
    let delay = parse_int_value::<u64>(matches, DELAY_ARG_NAME, "delay in milliseconds")?;
    let is_strict = matches.get_flag(STRICT_ARG_NAME);

    if is_strict || delay.is_some() {
        let planning = config.planning.get_or_insert_with(PlanningConfig::default);
        if is_strict {
            planning.fallback = Some(FallbackType::Strict);
        }
        if delay.is_some() {
            planning.delay = delay;
        }
    }

    let format = matches.get_one::<String>(FORMAT_ARG_NAME).cloned();
    let with_share = matches.get_flag(SHARE_ARG_NAME);

    if format.is_some() || with_share {
        let output = config.output.get_or_insert_with(OutputConfig::default);
        if format.is_some() {
            output.format = format;
        }
        if with_share {
            output.share = Some(true);
        }
    }

    if matches.get_flag(QUIET_ARG_NAME) {
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: false, prefix: None }) });
    }

    Ok(config)
}

fn format_errors(errors: &MultiFormatError) -> String {
    format!("cannot read request:\n{}", errors.format_many("\n"))
}
