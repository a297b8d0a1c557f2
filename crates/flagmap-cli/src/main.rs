//! Flagmap CLI entry point.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use rhizome_flagmap_core::{DEFAULT_INPUT, FlagmapError, map_file, map_reader, write_table};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flagmap")]
#[command(about = "Generate name lookup table entries from C/C++ enum declarations")]
struct Cli {
    /// Input file (or - for stdin)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries only the table.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("flagmap=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let table = if cli.input == Path::new("-") {
        map_reader(std::io::stdin().lock(), &cli.input)?
    } else {
        map_file(&cli.input)?
    };

    match cli.out {
        Some(out_path) => {
            let file = File::create(&out_path).map_err(FlagmapError::Output)?;
            write_table(&table, file)?;
            info!(
                "Wrote {} entries to {}",
                table.stats.emitted(),
                out_path.display()
            );
        }
        None => write_table(&table, std::io::stdout().lock())?,
    }

    Ok(())
}
