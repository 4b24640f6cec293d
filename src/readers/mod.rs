pub mod grid_reader;
pub mod station_reader;
pub mod text;

pub use grid_reader::GridReader;
pub use station_reader::StationReader;
pub use text::read_source_text;
