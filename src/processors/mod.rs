pub mod assembler;
pub mod ids;
pub mod importer;
pub mod layout;
pub mod transformer;

pub use assembler::{build_parameter, build_station_info, QualitativeSet};
pub use ids::{IdGenerator, UuidGenerator};
pub use importer::{FileImport, FileSummary, ImportSummary, Importer};
pub use layout::{event_columns, parameter_rows, MIN_GRID_ROWS};
pub use transformer::{DocumentTransformer, LogObserver, SamplingEvent, SamplingObserver};
