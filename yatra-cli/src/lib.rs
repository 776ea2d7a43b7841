//! A crate contains a command line interface and a library api of the travel itinerary planner.
//!
//! The library part exposes helpers which take a trip request in pragmatic json format and return
//! a serialized itinerary. On `wasm32` the same helpers are exported to the browser.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

use crate::extensions::plan::config::{create_planner_from_config, Config};
use std::io::BufWriter;
use std::sync::Arc;
use yatra_core::models::Catalog;
use yatra_pragmatic::format::catalog::{create_catalog_model, serialize_catalog};
use yatra_pragmatic::format::itinerary::{create_planning_error, write_pragmatic};
use yatra_pragmatic::format::request::{map_to_trip_request, Request};
use yatra_pragmatic::format::MultiFormatError;

#[cfg(target_arch = "wasm32")]
mod wasm {
    extern crate wasm_bindgen;

    use super::*;
    use crate::extensions::plan::config::{LoggingConfig, TelemetryConfig};
    use wasm_bindgen::prelude::*;
    use yatra_core::models::get_builtin_catalog;

    fn to_js_error(message: String) -> JsValue {
        JsValue::from(js_sys::Error::new(message.as_str()))
    }

    /// Generates an itinerary for the request in pragmatic format using built-in catalog.
    #[wasm_bindgen]
    pub fn generate_itinerary(request: JsValue) -> Result<JsValue, JsValue> {
        let request: Request = serde_wasm_bindgen::from_value(request)
            .map_err(|err| to_js_error(format!("cannot read request: '{err}'")))?;

        let config = Config {
            telemetry: Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: false, prefix: None }) }),
            ..Config::default()
        };

        get_itinerary_serialized(request, get_builtin_catalog(), &config)
            .map(|itinerary| JsValue::from_str(itinerary.as_str()))
            .map_err(|errors| to_js_error(errors.to_json()))
    }

    /// Returns built-in catalog in pragmatic format.
    #[wasm_bindgen]
    pub fn get_catalog() -> Result<JsValue, JsValue> {
        get_catalog_serialized(get_builtin_catalog().as_ref())
            .map(|catalog| JsValue::from_str(catalog.as_str()))
            .map_err(to_js_error)
    }
}

/// Validates the request, plans the trip and returns itinerary serialized as configured.
pub fn get_itinerary_serialized(
    request: Request,
    catalog: Arc<Catalog>,
    config: &Config,
) -> Result<String, MultiFormatError> {
    let trip = map_to_trip_request(request, config.max_duration())?;

    let planner = create_planner_from_config(catalog, config, config.create_logger());
    let itinerary = planner.plan(&trip).map_err(create_planning_error)?;
    let output_type = config.output_type().map_err(create_planning_error)?;

    let mut writer = BufWriter::new(Vec::new());
    write_pragmatic(&trip, &itinerary, config.with_share(), output_type, &mut writer).map_err(create_planning_error)?;

    let buffer = writer.into_inner().map_err(|err| create_planning_error(err.into_error().into()))?;

    String::from_utf8(buffer).map_err(|err| create_planning_error(err.to_string().into()).into())
}

/// Returns catalog serialized in pragmatic format.
pub fn get_catalog_serialized(catalog: &Catalog) -> Result<String, String> {
    let mut writer = BufWriter::new(Vec::new());
    serialize_catalog(&create_catalog_model(catalog), &mut writer)
        .map_err(|err| format!("cannot serialize catalog: '{err}'"))?;

    let buffer = writer.into_inner().map_err(|err| format!("cannot serialize catalog: '{}'", err.error()))?;

    String::from_utf8(buffer).map_err(|err| format!("cannot serialize catalog: '{err}'"))
}
