use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use binviz_core::decoder::decode_with_options;
use binviz_core::decoder_options::{DecoderOptions, SortMethod};
use binviz_core::status::BinvizError;
use binviz_io::{write_cloud, ExportFormat};
use clap::Parser;
use thiserror::Error;

/// binviz - view any binary file as a 3-D point cloud
#[derive(Parser, Debug)]
#[command(name = "binviz", version, about)]
struct Cli {
    /// File to visualize
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Export the point cloud (format by extension: .ply or .obj)
    #[arg(short, long, value_name = "FILE", value_parser = parse_export_target)]
    output: Option<ExportTarget>,

    /// Sort keys on all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<u64>,
}

#[derive(Debug, Clone)]
struct ExportTarget {
    path: PathBuf,
    format: ExportFormat,
}

fn parse_export_target(s: &str) -> Result<ExportTarget, String> {
    let path = PathBuf::from(s);
    match ExportFormat::from_path(&path) {
        Some(format) => Ok(ExportTarget { path, format }),
        None => Err(format!("unsupported export format '{s}', expected .ply or .obj")),
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Decode(#[from] BinvizError),
    #[error("Unable to open file or file is empty.")]
    NothingToShow,
    #[error("Failed to write {}: {source}", .path.display())]
    Export { path: PathBuf, source: io::Error },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn decoder_options(cli: &Cli) -> DecoderOptions {
    let mut options = DecoderOptions::new();
    if cli.parallel {
        options.set_sort_method(SortMethod::Parallel);
    }
    if let Some(max) = cli.max_bytes {
        options.set_max_input_bytes(max);
    }
    options
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cloud = decode_with_options(&cli.input, &decoder_options(cli))?;
    let stats = cloud.stats();

    println!("Reading {} bytes", stats.bytes_read);
    println!("{} unique points", stats.unique_points);

    if cloud.is_empty() {
        return Err(CliError::NothingToShow);
    }

    log::info!(
        "{} keys, {} trailing bytes dropped, most repeated key seen {} times",
        stats.num_keys,
        stats.trailing_bytes,
        stats.max_count
    );

    if let Some(target) = &cli.output {
        write_cloud(&cloud, &target.path, target.format).map_err(|source| CliError::Export {
            path: target.path.clone(),
            source,
        })?;
        println!("Wrote {}", target.path.display());
    }

    Ok(())
}
