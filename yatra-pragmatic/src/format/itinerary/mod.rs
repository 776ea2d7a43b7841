//! Specifies logic to write an itinerary in json or plain text.

use super::*;
use crate::format::catalog::{create_attraction_model, Attraction};
use std::io::{BufReader, BufWriter, Read, Write};
use std::str::FromStr;
use yatra_core::models::{Itinerary as CoreItinerary, Notice as CoreNotice, ShareMessage, TripRequest};
use yatra_core::utils::{GenericError, GenericResult};

mod model;
pub use self::model::*;

mod text_writer;
pub use self::text_writer::write_text;

#[cfg(test)]
#[path = "../../../tests/unit/format/itinerary/writer_test.rs"]
mod writer_test;

/// Specifies itinerary output type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PragmaticOutputType {
    /// A pretty printed json.
    #[default]
    Json,
    /// A human readable plain text.
    Text,
}

impl FromStr for PragmaticOutputType {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "json" => Ok(PragmaticOutputType::Json),
            "text" => Ok(PragmaticOutputType::Text),
            _ => Err(format!("unknown output type: '{value}'").into()),
        }
    }
}

/// Writes itinerary in the given output type.
pub fn write_pragmatic<W: Write>(
    request: &TripRequest,
    itinerary: &CoreItinerary,
    with_share: bool,
    output_type: PragmaticOutputType,
    writer: &mut BufWriter<W>,
) -> GenericResult<()> {
    let model = create_itinerary_model(request, itinerary, with_share);

    match output_type {
        PragmaticOutputType::Json => serialize_itinerary(&model, writer)?,
        PragmaticOutputType::Text => write_text(&model, writer)?,
    }

    writer.flush().map_err(GenericError::from)
}

/// Creates itinerary model in pragmatic format.
pub fn create_itinerary_model(request: &TripRequest, itinerary: &CoreItinerary, with_share: bool) -> Itinerary {
    Itinerary {
        city: itinerary.city.clone(),
        requested_city: itinerary.requested_city.clone(),
        duration: request.duration,
        travel_style: request.travel_style_or_default().title().to_string(),
        interests: request.interests.iter().map(|interest| interest.to_string()).collect(),
        budget: request.budget.map(|budget| budget.label().to_string()),
        group_size: request.group_size.map(|size| size.label().to_string()),
        total_time: itinerary.total_hours(),
        days: itinerary
            .days
            .iter()
            .map(|day| Day {
                day: day.day,
                total_time: day.total_hours,
                attractions: day.attractions.iter().map(|attraction| create_attraction_model(attraction)).collect(),
            })
            .collect(),
        notices: itinerary.notices.iter().map(create_notice_model).collect(),
        share: if with_share {
            let message = ShareMessage::new(itinerary.requested_city.as_str(), request.duration);
            Some(Share { title: message.title, text: message.text })
        } else {
            None
        },
    }
}

fn create_notice_model(notice: &CoreNotice) -> Notice {
    let type_field = match notice {
        CoreNotice::CityFallback { .. } => "cityFallback",
        CoreNotice::InterestFallback { .. } => "interestFallback",
    };

    Notice { type_field: type_field.to_string(), message: notice.to_string() }
}

/// Creates an error for a trip which cannot be planned with the given fallback policy.
pub fn create_planning_error(err: GenericError) -> FormatError {
    FormatError::new_with_details(
        "E1200".to_string(),
        "cannot plan trip".to_string(),
        "check requested city and interests or allow fallbacks".to_string(),
        err.to_string(),
    )
}

/// Deserializes itinerary in json format from `BufReader`.
pub fn deserialize_itinerary<R: Read>(reader: BufReader<R>) -> Result<Itinerary, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0003", "itinerary", err))
}

/// Serializes itinerary in json into `writer`.
pub fn serialize_itinerary<W: Write>(itinerary: &Itinerary, writer: &mut BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, itinerary).map_err(|err| format!("cannot write itinerary: '{err}'").into())
}
