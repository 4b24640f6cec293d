use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wsq-importer")]
#[command(about = "Import water surface quality lab sheets as monitoring documents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Configuration file [default: wsq.toml if present]")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import every measurement sheet of a directory into the document store
    Import {
        #[arg(short, long, help = "Directory containing the CSV measurement sheets")]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Station reference file")]
        stations: Option<PathBuf>,

        #[arg(long, help = "JSON Lines document store")]
        store: Option<PathBuf>,

        #[arg(long, help = "Append to the store instead of clearing it first")]
        no_clear: bool,

        #[arg(long)]
        max_workers: Option<usize>,
    },

    /// Transform one measurement sheet and print the documents as JSON
    Transform {
        #[arg(short, long, help = "Measurement sheet file")]
        input: PathBuf,

        #[arg(short, long, help = "Station reference file")]
        stations: Option<PathBuf>,
    },
}
