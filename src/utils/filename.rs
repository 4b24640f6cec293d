use crate::error::{ProcessingError, Result};
use std::path::{Path, PathBuf};

/// River name of a measurement sheet, taken from its file stem (`Drini.csv` -> `Drini`)
pub fn river_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// List the measurement sheets in a directory, sorted by file name.
pub fn discover_sample_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ProcessingError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));

        if path.is_file() && matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
