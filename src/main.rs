use clap::Parser;
use wsq_importer::cli::{run, Cli};
use wsq_importer::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
