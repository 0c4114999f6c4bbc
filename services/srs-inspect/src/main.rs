//! SRS header inspection tool.
//!
//! Resolves the SRS header of GCP and coordinates files into a CRS:
//! - a single header given on the command line
//! - the header (and points) of a GCP file
//! - one header per line on stdin

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use projection::{EpsgRegistry, Proj4Builder};
use srs_header::{GcpFile, SrsHeaderParser};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use srs_inspect::{build_registry, is_registry_miss, load_registry_config, CrsReport, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "srs-inspect")]
#[command(about = "Resolve SRS headers of GCP and coordinates files")]
struct Args {
    /// SRS header to parse (reads one header per stdin line when omitted)
    header: Option<String>,

    /// GCP file whose header and points should be read
    #[arg(long, conflicts_with = "header")]
    gcp_file: Option<PathBuf>,

    /// YAML file with extra EPSG definitions
    #[arg(long, env = "SRS_REGISTRY")]
    registry: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    let registry = match &args.registry {
        Some(path) => build_registry(&load_registry_config(path)?)?,
        None => EpsgRegistry::new(),
    };
    info!(codes = registry.len(), "EPSG registry ready");

    let parser = SrsHeaderParser::new(Proj4Builder::with_registry(registry));

    if let Some(path) = &args.gcp_file {
        let file = GcpFile::from_path(path, &parser)
            .with_context(|| format!("Failed to load GCP file {:?}", path))?;
        info!(points = file.len(), "Read GCP file");
        println!("{}", CrsReport::from_gcp_file(&file).render(args.format)?);
        return Ok(());
    }

    let headers = match &args.header {
        Some(header) => vec![header.clone()],
        None => read_stdin_headers()?,
    };
    if headers.is_empty() {
        bail!("No SRS header given");
    }

    let mut failures = 0;
    for (i, header) in headers.iter().enumerate() {
        match parser.parse(header) {
            Ok(crs) => {
                if args.format == OutputFormat::Text && i > 0 {
                    println!();
                }
                println!("{}", CrsReport::new(header, &crs).render(args.format)?);
            }
            Err(e) => {
                warn!(header = %header, "Header rejected");
                eprintln!("error: {}", e);
                if is_registry_miss(&e) && args.registry.is_none() {
                    eprintln!("hint: extra EPSG codes can be loaded with --registry");
                }
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} headers could not be parsed", failures, headers.len());
    }
    Ok(())
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

/// Non-blank stdin lines.
fn read_stdin_headers() -> Result<Vec<String>> {
    let stdin = std::io::stdin();
    let mut headers = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            headers.push(line);
        }
    }
    Ok(headers)
}
