use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

/// Coarse error classes reported to callers of the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Format,
    Lookup,
    EmptyLabel,
    Other,
}

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File '{}' contains no rows", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("Grid has {rows} rows, at least {required} are required")]
    GridTooShort { rows: usize, required: usize },

    #[error("Invalid sampling timestamp '{value}' at row {row}, column {column}")]
    InvalidTimestamp {
        value: String,
        row: usize,
        column: usize,
    },

    #[error("Invalid numeric value '{value}' at row {row}, column {column}")]
    InvalidNumber {
        value: String,
        row: usize,
        column: usize,
    },

    #[error("Invalid station row {row}: {reason}")]
    InvalidStationRow { row: usize, reason: String },

    #[error("Parameter key '{key}' at row {row} collides with a document field")]
    ReservedParameterKey { key: String, row: usize },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Station '{station_code}' not found (column {column})")]
    StationNotFound { station_code: String, column: usize },

    #[error("Parameter label '{label}'{} has no usable words", .row.map(|r| format!(" at row {}", r)).unwrap_or_default())]
    EmptyLabel { label: String, row: Option<usize> },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{failed} of {total} sheets failed to import")]
    ImportFailed { failed: usize, total: usize },

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ProcessingError>,
    },
}

impl ProcessingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProcessingError::Read { .. } => ErrorKind::Read,
            ProcessingError::EmptyFile { .. }
            | ProcessingError::GridTooShort { .. }
            | ProcessingError::InvalidTimestamp { .. }
            | ProcessingError::InvalidNumber { .. }
            | ProcessingError::InvalidStationRow { .. }
            | ProcessingError::ReservedParameterKey { .. }
            | ProcessingError::InvalidFormat(_) => ErrorKind::Format,
            ProcessingError::StationNotFound { .. } => ErrorKind::Lookup,
            ProcessingError::EmptyLabel { .. } => ErrorKind::EmptyLabel,
            ProcessingError::InFile { source, .. } => source.kind(),
            _ => ErrorKind::Other,
        }
    }

    /// Attach the originating file to an error, unless it already carries one.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            ProcessingError::InFile { .. } => self,
            other => ProcessingError::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}
