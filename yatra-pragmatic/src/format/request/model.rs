use super::*;
use serde::Deserialize;
use std::io::{BufWriter, Write};

/// A trip duration which can be passed either as a number or as a text from an input field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// Amount of days as a number.
    Days(i64),
    /// Amount of days as a text.
    Text(String),
}

impl DurationValue {
    /// Returns amount of days if it can be parsed.
    pub fn to_days(&self) -> Option<i64> {
        match self {
            DurationValue::Days(days) => Some(*days),
            DurationValue::Text(text) => text.trim().parse::<i64>().ok(),
        }
    }
}

/// A trip request as collected from the planning form. Values are kept as they come, so
/// validation can report all of the problems at once.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// A destination city.
    #[serde(default)]
    pub city: String,
    /// A trip duration in days.
    #[serde(default)]
    pub duration: Option<DurationValue>,
    /// Selected interest tags, e.g. "Heritage & Culture".
    #[serde(default)]
    pub interests: Vec<String>,
    /// A budget tier: `budget`, `mid-range` or `luxury`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// A travel style: `relaxed`, `balanced` or `intensive`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_style: Option<String>,
    /// A group size: `solo`, `couple`, `family` or `group`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_size: Option<String>,
}

/// Deserializes trip request in json format from `BufReader`.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<Request, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0000", "request", err))
}

/// Serializes trip request in json into `writer`.
pub fn serialize_request<W: Write>(request: &Request, writer: &mut BufWriter<W>) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(writer, request).map_err(std::io::Error::from)
}
