pub mod constants;
pub mod filename;
pub mod keys;
pub mod progress;

pub use constants::*;
pub use filename::{discover_sample_files, river_name_from_path};
pub use keys::{normalize_key, slugify_name};
pub use progress::ProgressReporter;
