//! Planner configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/plan/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use yatra_core::models::Catalog;
use yatra_core::planner::{FallbackPolicy, ItineraryPlanner};
use yatra_core::utils::{create_silent_logger, create_stderr_logger, GenericError, GenericResult, InfoLogger};
use yatra_pragmatic::format::itinerary::PragmaticOutputType;
use yatra_pragmatic::format::request::DEFAULT_MAX_DURATION;

/// A planner configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies planning configuration.
    pub planning: Option<PlanningConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies output configuration.
    pub output: Option<OutputConfig>,
}

/// A planning configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningConfig {
    /// Specifies how to handle an unknown city or interests without matches. Default is `warn`.
    pub fallback: Option<FallbackType>,
    /// A cosmetic delay in milliseconds before itinerary is shown. Default is 0.
    pub delay: Option<u64>,
    /// Max trip duration in days accepted by validation. Default is 30.
    pub max_duration: Option<usize>,
}

/// A fallback handling type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackType {
    /// Apply fallbacks silently.
    Silent,
    /// Apply fallbacks and report them.
    Warn,
    /// Reject requests which need fallbacks.
    Strict,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is true.
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,
    /// A prefix added to each log message.
    pub prefix: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

/// An output configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// An output format: `json` or `text`. Default is `json`.
    pub format: Option<String>,
    /// Specifies whether share message is included. Default is false.
    pub share: Option<bool>,
}

impl Config {
    /// Returns fallback policy.
    pub fn fallback_policy(&self) -> FallbackPolicy {
        match self.planning.as_ref().and_then(|planning| planning.fallback) {
            Some(FallbackType::Silent) => FallbackPolicy::Silent,
            Some(FallbackType::Strict) => FallbackPolicy::Strict,
            Some(FallbackType::Warn) | None => FallbackPolicy::Warn,
        }
    }

    /// Returns cosmetic delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.planning.as_ref().and_then(|planning| planning.delay).unwrap_or(0))
    }

    /// Returns max allowed trip duration.
    pub fn max_duration(&self) -> usize {
        self.planning.as_ref().and_then(|planning| planning.max_duration).unwrap_or(DEFAULT_MAX_DURATION)
    }

    /// Returns output type.
    pub fn output_type(&self) -> GenericResult<PragmaticOutputType> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
            .map_or(Ok(PragmaticOutputType::default()), PragmaticOutputType::from_str)
    }

    /// Returns whether share message should be written.
    pub fn with_share(&self) -> bool {
        self.output.as_ref().and_then(|output| output.share).unwrap_or(false)
    }

    /// Creates logger as specified by telemetry configuration.
    pub fn create_logger(&self) -> InfoLogger {
        match self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()) {
            Some(LoggingConfig { enabled: false, .. }) => create_silent_logger(),
            Some(LoggingConfig { prefix, .. }) => create_stderr_logger(prefix.clone()),
            None => create_stderr_logger(None),
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a planner from config.
pub fn create_planner_from_config(catalog: Arc<Catalog>, config: &Config, logger: InfoLogger) -> ItineraryPlanner {
    ItineraryPlanner::new(catalog).with_policy(config.fallback_policy()).with_logger(logger)
}
