/// Measurement sheet layout (zero-based grid positions)
pub const LABEL_COLUMN: usize = 1;
pub const SYMBOL_COLUMN: usize = 2;
pub const UNIT_COLUMN: usize = 3;
pub const FIRST_EVENT_COLUMN: usize = 4;

pub const RIVER_ROW: usize = 3;
pub const STATION_CODE_ROW: usize = 4;
pub const SAMPLING_SITE_ROW: usize = 5;
pub const SAMPLING_DATE_ROW: usize = 7;
pub const SAMPLING_TIME_ROW: usize = 10;
pub const FIRST_PARAMETER_ROW: usize = 11;

/// Date and time cells are joined with a dot before parsing
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y.%H:%M";

/// Station reference file
pub const STATION_COLUMN_COUNT: usize = 10;

/// Parameters stored as verbatim text (weather, odor, color)
pub const DEFAULT_QUALITATIVE_LABELS: [&str; 4] = ["Moti", "Përshkrimi i motit", "Era", "Ngjyra"];

/// Defaults
pub const DEFAULT_DATA_DIR: &str = "data/2013";
pub const DEFAULT_STATIONS_FILE: &str = "data/stations.csv";
pub const DEFAULT_STORE_PATH: &str = "output/watersurfacequality.jsonl";
pub const DEFAULT_CONFIG_FILE: &str = "wsq.toml";
pub const DEFAULT_FILE_EXTENSION: &str = "csv";
pub const DEFAULT_DELIMITER: u8 = b',';

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "WSQ";
