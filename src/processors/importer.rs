use crate::error::{ProcessingError, Result};
use crate::models::{MeasurementDocument, StationIndex};
use crate::processors::transformer::{DocumentTransformer, LogObserver, SamplingObserver};
use crate::readers::GridReader;
use crate::utils::filename::river_name_from_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::DocumentStore;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Documents produced from one measurement sheet.
#[derive(Debug, Clone)]
pub struct FileImport {
    pub path: PathBuf,
    pub river_name: String,
    pub documents: Vec<MeasurementDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: PathBuf,
    pub river_name: String,
    pub document_count: usize,
}

#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: Vec<FileSummary>,
    pub failures: Vec<ProcessingError>,
}

impl ImportSummary {
    pub fn total_documents(&self) -> usize {
        self.imported.iter().map(|f| f.document_count).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut lines = vec!["IMPORT SUMMARY:".to_string()];
        for file in &self.imported {
            lines.push(format!(
                " - {} water surface quality monitoring documents created for '{}'.",
                file.document_count, file.river_name
            ));
        }
        for failure in &self.failures {
            lines.push(format!(" - FAILED {}", failure));
        }
        lines.join("\n")
    }
}

/// Loads, transforms and persists measurement sheets.
///
/// Sheets are transformed independently (in parallel when `max_workers > 1`)
/// and persisted in input order. A sheet that fails to transform contributes
/// no documents and is reported in the summary.
pub struct Importer<'a> {
    transformer: &'a DocumentTransformer,
    stations: &'a StationIndex,
    grid_reader: GridReader,
    max_workers: usize,
}

impl<'a> Importer<'a> {
    pub fn new(transformer: &'a DocumentTransformer, stations: &'a StationIndex) -> Self {
        Self {
            transformer,
            stations,
            grid_reader: GridReader::new(),
            max_workers: 1,
        }
    }

    pub fn with_grid_reader(mut self, grid_reader: GridReader) -> Self {
        self.grid_reader = grid_reader;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Load and transform a single sheet without persisting it
    pub fn transform_file(
        &self,
        path: &Path,
        observer: &dyn SamplingObserver,
    ) -> Result<FileImport> {
        let grid = self.grid_reader.read_grid(path).map_err(|e| e.in_file(path))?;
        let documents = self
            .transformer
            .transform_observed(&grid, self.stations, observer)
            .map_err(|e| e.in_file(path))?;

        Ok(FileImport {
            path: path.to_path_buf(),
            river_name: river_name_from_path(path),
            documents,
        })
    }

    /// Transform every sheet, keeping the input order of `paths`.
    pub fn transform_files(
        &self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Result<Vec<Result<FileImport>>> {
        let observer: &dyn SamplingObserver = match progress {
            Some(p) => p,
            None => &LogObserver,
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.max_workers)
            .build()?;

        let results: Vec<Result<FileImport>> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = self.transform_file(path, observer);
                    if let Some(p) = progress {
                        p.increment(1);
                    }
                    result
                })
                .collect()
        });

        Ok(results)
    }

    /// Transform and persist every sheet into `store`.
    ///
    /// Store failures abort the run; sheet failures are collected.
    pub fn import_files(
        &self,
        paths: &[PathBuf],
        store: &mut dyn DocumentStore,
        progress: Option<&ProgressReporter>,
    ) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for result in self.transform_files(paths, progress)? {
            match result {
                Ok(import) => {
                    let document_count = store.insert_all(&import.documents)?;
                    info!(
                        "Stored {} documents for '{}'",
                        document_count, import.river_name
                    );
                    summary.imported.push(FileSummary {
                        path: import.path,
                        river_name: import.river_name,
                        document_count,
                    });
                }
                Err(e) => {
                    error!("{}", e);
                    summary.failures.push(e);
                }
            }
        }

        store.flush()?;
        Ok(summary)
    }
}
