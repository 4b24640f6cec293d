//! Builders for the nested parts of a measurement document.

use crate::error::Result;
use crate::models::{Coordinates, NamedSlug, Parameter, ParameterValue, StationInfo, StationRecord};
use crate::utils::keys::{normalize_key, slugify_name};
use std::collections::HashSet;

/// Labels of parameters whose values are descriptive text rather than numbers.
///
/// Labels are compared by their normalized key, so spelling variants that
/// normalize alike ("Ngjyra", " ngjyra ") all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualitativeSet {
    keys: HashSet<String>,
}

impl QualitativeSet {
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = labels
            .into_iter()
            .map(|label| normalize_key(label.as_ref()))
            .collect::<Result<HashSet<_>>>()?;
        Ok(Self { keys })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

pub fn named_slug(name: &str) -> NamedSlug {
    NamedSlug {
        name: name.to_string(),
        slug: slugify_name(name),
    }
}

pub fn build_station_info(station: &StationRecord) -> StationInfo {
    StationInfo {
        code: station.code.clone(),
        name: station.name.clone(),
        slug: slugify_name(&station.name),
        coordinates: Coordinates {
            lon: station.longitude,
            lat: station.latitude,
        },
        river_basin: named_slug(&station.river_basin),
        river: named_slug(&station.river),
        sea_region: named_slug(&station.sea_region),
        catchment_area: station.catchment_area,
        population_density: station.population_density,
        altitude: station.altitude,
    }
}

/// Parse a lab value, accepting a decimal comma.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .ok()
        .or_else(|| raw.replace(',', ".").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Empty cells and zero readings are both "not reported" in the sheets.
pub fn is_unreported(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || parse_measurement(raw) == Some(0.0)
}

/// Build a parameter entry; `None` when a quantitative value is not a number.
pub fn build_parameter(raw: &str, symbol: &str, unit: &str, qualitative: bool) -> Option<Parameter> {
    let value = if qualitative {
        ParameterValue::Text(raw.to_string())
    } else {
        ParameterValue::Number(parse_measurement(raw)?)
    };

    Some(Parameter {
        value,
        symbol: symbol.to_string(),
        unit: unit.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_station_info() {
        let record = StationRecord::new(
            "D1".to_string(),
            "Ura e Fshejtë".to_string(),
            20.3928,
            42.2631,
            "Drini".to_string(),
            "Drini i Bardhë".to_string(),
            "Deti Adriatik".to_string(),
            4360.5,
            210.25,
            330,
        );

        let info = build_station_info(&record);

        assert_eq!(info.code, "D1");
        assert_eq!(info.slug, "ura-e-fshejte");
        assert_eq!(info.coordinates, Coordinates { lon: 20.3928, lat: 42.2631 });
        assert_eq!(info.river, named_slug("Drini i Bardhë"));
        assert_eq!(info.river.slug, "drini-i-bardhe");
        assert_eq!(info.sea_region.slug, "deti-adriatik");
        assert_eq!(info.catchment_area, 4360.5);
        assert_eq!(info.population_density, 210.25);
        assert_eq!(info.altitude, 330);
    }

    #[test]
    fn test_unreported_values() {
        assert!(is_unreported(""));
        assert!(is_unreported("  "));
        assert!(is_unreported("0"));
        assert!(is_unreported("0.0"));
        assert!(is_unreported("0,00"));
        assert!(!is_unreported("0.01"));
        assert!(!is_unreported("e kthjellët"));
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("7.2"), Some(7.2));
        assert_eq!(parse_measurement(" 7,2 "), Some(7.2));
        assert_eq!(parse_measurement("-1.5"), Some(-1.5));
        assert_eq!(parse_measurement("1,234.5"), None);
        assert_eq!(parse_measurement("<0.01"), None);
        assert_eq!(parse_measurement("NaN"), None);
    }

    #[test]
    fn test_build_quantitative_parameter() {
        let parameter = build_parameter("7.2", "pH", "-", false).unwrap();

        assert_eq!(parameter.value, ParameterValue::Number(7.2));
        assert_eq!(parameter.symbol, "pH");
        assert_eq!(parameter.unit, "-");
        assert!(build_parameter("shume", "pH", "-", false).is_none());
    }

    #[test]
    fn test_build_qualitative_parameter() {
        let parameter = build_parameter("e kthjellët", "", "", true).unwrap();
        assert_eq!(parameter.value, ParameterValue::Text("e kthjellët".to_string()));

        let numeric_text = build_parameter("12", "", "", true).unwrap();
        assert_eq!(numeric_text.value, ParameterValue::Text("12".to_string()));
    }

    #[test]
    fn test_qualitative_set_matches_normalized_keys() -> Result<()> {
        let set = QualitativeSet::from_labels(["Ngjyra", "Era", "Përshkrimi i motit"])?;

        assert_eq!(set.len(), 3);
        assert!(set.contains("ngjyra"));
        assert!(set.contains("pershkrimiMotit"));
        assert!(!set.contains("ph"));
        Ok(())
    }
}
