pub mod document;
pub mod grid;
pub mod station;

pub use document::{
    Coordinates, MeasurementDocument, NamedSlug, Parameter, ParameterValue, StationInfo,
    RESERVED_DOCUMENT_KEYS,
};
pub use grid::Grid;
pub use station::{StationIndex, StationRecord};
