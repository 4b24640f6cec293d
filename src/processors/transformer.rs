use crate::error::{ProcessingError, Result};
use crate::models::{Grid, MeasurementDocument, StationIndex, RESERVED_DOCUMENT_KEYS};
use crate::processors::assembler::{
    build_parameter, build_station_info, is_unreported, named_slug, QualitativeSet,
};
use crate::processors::ids::{IdGenerator, UuidGenerator};
use crate::processors::layout::{event_columns, parameter_rows, MIN_GRID_ROWS};
use crate::utils::constants::{
    DEFAULT_QUALITATIVE_LABELS, LABEL_COLUMN, RIVER_ROW, SAMPLING_DATE_ROW, SAMPLING_SITE_ROW,
    SAMPLING_TIME_ROW, STATION_CODE_ROW, SYMBOL_COLUMN, TIMESTAMP_FORMAT, UNIT_COLUMN,
};
use crate::utils::keys::normalize_key;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One accepted sampling column, reported before its document is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplingEvent<'a> {
    pub river_name: &'a str,
    pub station_code: &'a str,
    pub site_name: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub column: usize,
}

/// Receives sampling events for progress display; never affects the output.
pub trait SamplingObserver: Sync {
    fn on_sampling_event(&self, event: &SamplingEvent<'_>);
}

/// Writes sampling events to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SamplingObserver for LogObserver {
    fn on_sampling_event(&self, event: &SamplingEvent<'_>) {
        debug!(
            "River '{}', station {} ({}): {} at {}",
            event.river_name, event.station_code, event.site_name, event.date, event.time
        );
    }
}

/// Values carried across columns: merged spreadsheet cells leave them blank
/// in every column but the first one they span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ScanState {
    river_name: String,
    station_code: String,
    site_name: String,
}

impl ScanState {
    fn advance(self, grid: &Grid, column: usize) -> Self {
        Self {
            river_name: carry(self.river_name, grid.trimmed(RIVER_ROW, column)),
            station_code: carry(self.station_code, grid.trimmed(STATION_CODE_ROW, column)),
            site_name: carry(self.site_name, grid.trimmed(SAMPLING_SITE_ROW, column)),
        }
    }
}

fn carry(previous: String, cell: &str) -> String {
    if cell.is_empty() {
        previous
    } else {
        cell.to_string()
    }
}

/// Turns a measurement sheet grid into one document per sampling column.
pub struct DocumentTransformer {
    qualitative: QualitativeSet,
    ids: Box<dyn IdGenerator>,
}

impl DocumentTransformer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            qualitative: QualitativeSet::from_labels(DEFAULT_QUALITATIVE_LABELS)?,
            ids: Box::new(UuidGenerator),
        })
    }

    pub fn with_qualitative(mut self, qualitative: QualitativeSet) -> Self {
        self.qualitative = qualitative;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn transform(&self, grid: &Grid, stations: &StationIndex) -> Result<Vec<MeasurementDocument>> {
        self.transform_observed(grid, stations, &LogObserver)
    }

    /// Transform a grid, reporting every accepted column to `observer`.
    ///
    /// Columns are visited left to right and documents keep that order. Any
    /// error aborts the whole grid.
    pub fn transform_observed(
        &self,
        grid: &Grid,
        stations: &StationIndex,
        observer: &dyn SamplingObserver,
    ) -> Result<Vec<MeasurementDocument>> {
        if grid.row_count() < MIN_GRID_ROWS {
            return Err(ProcessingError::GridTooShort {
                rows: grid.row_count(),
                required: MIN_GRID_ROWS,
            });
        }

        let (_, documents) = event_columns(grid).try_fold(
            (ScanState::default(), Vec::new()),
            |(state, mut documents), column| -> Result<(ScanState, Vec<MeasurementDocument>)> {
                // Unused sheet columns have no date and leave the carried state alone
                if grid.trimmed(SAMPLING_DATE_ROW, column).is_empty() {
                    debug!("Skipping column {} without sampling date", column);
                    return Ok((state, documents));
                }

                let state = state.advance(grid, column);
                observer.on_sampling_event(&SamplingEvent {
                    river_name: &state.river_name,
                    station_code: &state.station_code,
                    site_name: &state.site_name,
                    date: grid.trimmed(SAMPLING_DATE_ROW, column),
                    time: grid.trimmed(SAMPLING_TIME_ROW, column),
                    column,
                });

                documents.push(self.build_document(grid, stations, &state, column)?);
                Ok((state, documents))
            },
        )?;

        info!("Built {} documents from {} columns", documents.len(), event_columns(grid).len());
        Ok(documents)
    }

    fn build_document(
        &self,
        grid: &Grid,
        stations: &StationIndex,
        state: &ScanState,
        column: usize,
    ) -> Result<MeasurementDocument> {
        let station = stations
            .get(&state.station_code)
            .ok_or_else(|| ProcessingError::StationNotFound {
                station_code: state.station_code.clone(),
                column,
            })?;

        let sampled_at = parse_sampling_timestamp(grid, column)?;

        let mut parameters = BTreeMap::new();
        for row in parameter_rows(grid) {
            let raw = grid.trimmed(row, column);
            if is_unreported(raw) {
                continue;
            }

            let label = grid.cell(row, LABEL_COLUMN);
            let key = normalize_key(label).map_err(|_| ProcessingError::EmptyLabel {
                label: label.to_string(),
                row: Some(row),
            })?;
            if RESERVED_DOCUMENT_KEYS.contains(&key.as_str()) {
                return Err(ProcessingError::ReservedParameterKey { key, row });
            }

            let parameter = build_parameter(
                raw,
                grid.trimmed(row, SYMBOL_COLUMN),
                grid.trimmed(row, UNIT_COLUMN),
                self.qualitative.contains(&key),
            )
            .ok_or_else(|| ProcessingError::InvalidNumber {
                value: raw.to_string(),
                row,
                column,
            })?;

            if parameters.insert(key, parameter).is_some() {
                debug!("Row {} replaces an earlier parameter with the same key", row);
            }
        }

        Ok(MeasurementDocument {
            id: self.ids.next_id(),
            station: build_station_info(station),
            sampling_site: named_slug(&state.site_name),
            sampled_at,
            parameters,
        })
    }
}

/// Join the date (`dd.mm.yyyy`) and time (`HH:MM`) cells of a column.
pub fn parse_sampling_timestamp(grid: &Grid, column: usize) -> Result<NaiveDateTime> {
    let value = format!(
        "{}.{}",
        grid.trimmed(SAMPLING_DATE_ROW, column),
        grid.trimmed(SAMPLING_TIME_ROW, column)
    );

    NaiveDateTime::parse_from_str(&value, TIMESTAMP_FORMAT).map_err(|_| {
        ProcessingError::InvalidTimestamp {
            value,
            row: SAMPLING_DATE_ROW,
            column,
        }
    })
}
