//! Import settings.
//!
//! Layered from defaults, an optional TOML file and `WSQ_*` environment
//! variables (e.g. `WSQ_STORE_PATH`, `WSQ_QUALITATIVE_LABELS=Moti,Era`).

use crate::error::{ProcessingError, Result};
use crate::processors::QualitativeSet;
use crate::utils::constants::{
    DEFAULT_DATA_DIR, DEFAULT_FILE_EXTENSION, DEFAULT_QUALITATIVE_LABELS, DEFAULT_STATIONS_FILE,
    DEFAULT_STORE_PATH, ENV_PREFIX,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Directory scanned for measurement sheets
    pub data_dir: PathBuf,

    pub stations_file: PathBuf,

    /// JSON Lines document store
    pub store_path: PathBuf,

    /// Single-character field delimiter of the exported sheets
    pub delimiter: String,

    pub file_extension: String,

    /// Labels whose values are kept as text
    pub qualitative_labels: Vec<String>,

    /// Empty the store before importing
    pub clear_before_import: bool,

    pub max_workers: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            stations_file: PathBuf::from(DEFAULT_STATIONS_FILE),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            delimiter: ",".to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
            qualitative_labels: DEFAULT_QUALITATIVE_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            clear_before_import: true,
            max_workers: num_cpus::get(),
        }
    }
}

impl ImportConfig {
    /// Load settings from `path` (which must then exist) or from the optional
    /// default file, with environment overrides on top.
    pub fn load(path: Option<&Path>, default_path: &Path) -> Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(default_path).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("qualitative_labels"),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        debug!("Loaded configuration: {:?}", loaded);
        Ok(loaded)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(ProcessingError::InvalidFormat(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }

    pub fn qualitative_set(&self) -> Result<QualitativeSet> {
        QualitativeSet::from_labels(&self.qualitative_labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    #[test]
    fn test_defaults_without_file() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("wsq.toml");

        let config = ImportConfig::load(None, &missing)?;

        assert_eq!(config.data_dir, PathBuf::from("data/2013"));
        assert_eq!(config.delimiter_byte()?, b',');
        assert!(config.clear_before_import);
        assert!(config.qualitative_set()?.contains("ngjyra"));
        Ok(())
    }

    #[test]
    fn test_load_toml_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"sheets/2014\"")?;
        writeln!(file, "delimiter = \";\"")?;
        writeln!(file, "clear_before_import = false")?;
        writeln!(file, "qualitative_labels = [\"Ngjyra\", \"Turbullira\"]")?;

        let config = ImportConfig::load(Some(file.path()), Path::new("unused.toml"))?;

        assert_eq!(config.data_dir, PathBuf::from("sheets/2014"));
        assert_eq!(config.delimiter_byte()?, b';');
        assert!(!config.clear_before_import);
        assert_eq!(config.store_path, PathBuf::from("output/watersurfacequality.jsonl"));

        let qualitative = config.qualitative_set()?;
        assert!(qualitative.contains("turbullira"));
        assert!(!qualitative.contains("era"));
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let result = ImportConfig::load(Some(Path::new("/nonexistent/wsq.toml")), Path::new("x"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_delimiter() {
        let config = ImportConfig {
            delimiter: "||".to_string(),
            ..ImportConfig::default()
        };
        assert!(config.delimiter_byte().is_err());
    }
}
