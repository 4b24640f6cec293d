use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level field names a parameter key must never shadow.
pub const RESERVED_DOCUMENT_KEYS: [&str; 4] = ["_id", "stacion", "vendmostrimi", "data"];

/// A display name together with its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSlug {
    #[serde(rename = "emri")]
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

/// Station sub-object embedded in every document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    #[serde(rename = "kodi")]
    pub code: String,
    #[serde(rename = "emri")]
    pub name: String,
    pub slug: String,
    pub coordinates: Coordinates,
    pub river_basin: NamedSlug,
    pub river: NamedSlug,
    pub sea_region: NamedSlug,
    pub catchment_area: f64,
    pub population_density: f64,
    pub altitude: i32,
}

/// Measured value: numeric for quantitative parameters, verbatim text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            ParameterValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParameterValue::Number(_) => None,
            ParameterValue::Text(s) => Some(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: ParameterValue,
    #[serde(rename = "simboli")]
    pub symbol: String,
    #[serde(rename = "njesia")]
    pub unit: String,
}

/// One sampling event, i.e. one column of a measurement sheet.
///
/// Parameters are flattened next to the fixed fields when serialized, so a
/// parameter whose key equals `_id`, `stacion`, `vendmostrimi` or `data`
/// would overwrite one of them. The transformer rejects such sheets with
/// `ProcessingError::ReservedParameterKey` instead of dropping either value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "stacion")]
    pub station: StationInfo,
    #[serde(rename = "vendmostrimi")]
    pub sampling_site: NamedSlug,
    #[serde(rename = "data")]
    pub sampled_at: NaiveDateTime,
    #[serde(flatten)]
    pub parameters: BTreeMap<String, Parameter>,
}

impl MeasurementDocument {
    pub fn parameter(&self, key: &str) -> Option<&Parameter> {
        self.parameters.get(key)
    }

    pub fn station_code(&self) -> &str {
        &self.station.code
    }
}
