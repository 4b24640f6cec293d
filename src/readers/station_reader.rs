use crate::error::{ProcessingError, Result};
use crate::models::{StationIndex, StationRecord};
use crate::readers::text::read_source_text;
use crate::utils::constants::{DEFAULT_DELIMITER, STATION_COLUMN_COUNT};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

/// Reads the station reference file.
///
/// Columns: code, name, longitude, latitude, river basin, river, sea region,
/// catchment area, population density, altitude. The first row is a header
/// and is never inspected.
pub struct StationReader {
    delimiter: u8,
}

impl StationReader {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read station metadata in file order
    pub fn read_stations(&self, path: &Path) -> Result<Vec<StationRecord>> {
        let text = read_source_text(path)?;
        self.parse_stations(&text)
    }

    pub fn parse_stations(&self, text: &str) -> Result<Vec<StationRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let mut stations = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record?;
            // Row index within the file, header being row 0
            let row = record
                .position()
                .map_or(index + 1, |p| p.line().saturating_sub(1) as usize);

            let station = self.parse_station_record(&record, row)?;
            if let Err(e) = station.validate() {
                warn!("Station {} has out-of-range values: {}", station.code, e);
            }
            stations.push(station);
        }

        Ok(stations)
    }

    /// Read station metadata keyed by station code; a repeated code replaces
    /// the earlier row.
    pub fn read_station_index(&self, path: &Path) -> Result<StationIndex> {
        let stations = self.read_stations(path)?;
        let index = Self::index_stations(stations);

        info!("Loaded {} stations from {}", index.len(), path.display());
        Ok(index)
    }

    pub fn index_stations(stations: Vec<StationRecord>) -> StationIndex {
        let mut map = HashMap::with_capacity(stations.len());

        for station in stations {
            if let Some(previous) = map.insert(station.code.clone(), station) {
                warn!(
                    "Duplicate station code {}; keeping the later row",
                    previous.code
                );
            }
        }

        map
    }

    fn parse_station_record(&self, record: &StringRecord, row: usize) -> Result<StationRecord> {
        if record.len() < STATION_COLUMN_COUNT {
            return Err(ProcessingError::InvalidStationRow {
                row,
                reason: format!(
                    "expected at least {} columns, found {}",
                    STATION_COLUMN_COUNT,
                    record.len()
                ),
            });
        }

        let field = |i: usize| record.get(i).unwrap_or("");
        let invalid = |name: &str, value: &str| ProcessingError::InvalidStationRow {
            row,
            reason: format!("invalid {}: '{}'", name, value),
        };

        let code = field(0);
        if code.is_empty() {
            return Err(ProcessingError::InvalidStationRow {
                row,
                reason: "empty station code".to_string(),
            });
        }

        let longitude = field(2)
            .parse::<f64>()
            .map_err(|_| invalid("longitude", field(2)))?;
        let latitude = field(3)
            .parse::<f64>()
            .map_err(|_| invalid("latitude", field(3)))?;
        let catchment_area = field(7)
            .parse::<f64>()
            .map_err(|_| invalid("catchment area", field(7)))?;
        let population_density = field(8)
            .parse::<f64>()
            .map_err(|_| invalid("population density", field(8)))?;
        let altitude = field(9)
            .parse::<i32>()
            .map_err(|_| invalid("altitude", field(9)))?;

        Ok(StationRecord::new(
            code.to_string(),
            field(1).to_string(),
            longitude,
            latitude,
            field(4).to_string(),
            field(5).to_string(),
            field(6).to_string(),
            catchment_area,
            population_density,
            altitude,
        ))
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
