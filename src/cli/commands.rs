use crate::cli::args::{Cli, Commands};
use crate::config::ImportConfig;
use crate::error::{ProcessingError, Result};
use crate::processors::{DocumentTransformer, Importer, LogObserver};
use crate::readers::{GridReader, StationReader};
use crate::utils::constants::DEFAULT_CONFIG_FILE;
use crate::utils::filename::discover_sample_files;
use crate::utils::progress::ProgressReporter;
use crate::writers::{DocumentStore, JsonLinesStore};
use std::path::Path;
use tracing::Level;

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // A subscriber may already be installed (tests, embedding callers)
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let mut config = ImportConfig::load(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;

    match cli.command {
        Commands::Import {
            input_dir,
            stations,
            store,
            no_clear,
            max_workers,
        } => {
            if let Some(dir) = input_dir {
                config.data_dir = dir;
            }
            if let Some(path) = stations {
                config.stations_file = path;
            }
            if let Some(path) = store {
                config.store_path = path;
            }
            if no_clear {
                config.clear_before_import = false;
            }
            if let Some(workers) = max_workers {
                config.max_workers = workers;
            }

            import(&config)
        }

        Commands::Transform { input, stations } => {
            if let Some(path) = stations {
                config.stations_file = path;
            }

            transform(&config, &input)
        }
    }
}

fn import(config: &ImportConfig) -> Result<()> {
    let delimiter = config.delimiter_byte()?;
    let stations = StationReader::with_delimiter(delimiter).read_station_index(&config.stations_file)?;
    let transformer = DocumentTransformer::new()?.with_qualitative(config.qualitative_set()?);

    let files = discover_sample_files(&config.data_dir, &config.file_extension)?;
    println!(
        "Importing {} measurement sheets from {}",
        files.len(),
        config.data_dir.display()
    );

    let mut store = JsonLinesStore::open(&config.store_path)?;
    if config.clear_before_import {
        store.clear()?;
    }

    let progress = ProgressReporter::new(files.len() as u64, "Importing sheets...", false);
    let summary = Importer::new(&transformer, &stations)
        .with_grid_reader(GridReader::with_delimiter(delimiter))
        .with_max_workers(config.max_workers)
        .import_files(&files, &mut store, Some(&progress))?;
    progress.finish_with_message(&format!(
        "Stored {} documents in {}",
        summary.total_documents(),
        store.path().display()
    ));

    println!("\n{}\n", summary.summary());

    if summary.has_failures() {
        return Err(ProcessingError::ImportFailed {
            failed: summary.failures.len(),
            total: files.len(),
        });
    }

    Ok(())
}

fn transform(config: &ImportConfig, input: &Path) -> Result<()> {
    let delimiter = config.delimiter_byte()?;
    let stations = StationReader::with_delimiter(delimiter).read_station_index(&config.stations_file)?;
    let transformer = DocumentTransformer::new()?.with_qualitative(config.qualitative_set()?);

    let import = Importer::new(&transformer, &stations)
        .with_grid_reader(GridReader::with_delimiter(delimiter))
        .transform_file(input, &LogObserver)?;

    println!("{}", serde_json::to_string_pretty(&import.documents)?);
    Ok(())
}
