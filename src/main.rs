//! DBSCAN geo point clustering tool
//!
//! Reads geo-tagged points as JSON lines (or CSV), clusters them with DBSCAN
//! and prints one JSON array with the centroid and member ids of every cluster.
//! Points that belong to no cluster are left out of the output.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{Level, debug, info};

mod cluster;
mod error;
mod exit_code;
mod input;
mod output;


use cluster::{Params, RTreeIndex, ScanIndex, SpatialIndex, assemble, db_scan};
use exit_code::ExitCode;
use input::{InputFormat, read_points};
use output::write_clusters;

/// Spatial index backing the neighborhood queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IndexKind {
    /// Bulk-loaded R-tree
    Rtree,
    /// Linear scan over all points
    Scan,
}

#[derive(Parser)]
#[command(name = "geo_dbscan")]
#[command(about = "DBSCAN geo point clustering tool", long_about = None)]
struct Args {
    /// DBSCAN epsilon parameter (clustering radius, in input coordinate units)
    #[arg(short, long, default_value_t = 0.01, allow_negative_numbers = true)]
    eps: f64,

    /// DBSCAN minPoints parameter (minimum neighborhood size, the point itself included)
    #[arg(short = 'm', long = "minPts", visible_alias = "min-points", default_value_t = 5)]
    min_points: usize,

    /// Input file with one point record per line (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the JSON cluster array (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input record format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Jsonl)]
    format: InputFormat,

    /// Spatial index used for neighborhood queries
    #[arg(long, value_enum, default_value_t = IndexKind::Rtree)]
    index: IndexKind,

    /// Enable debug output (written to stderr)
    #[arg(short, long)]
    debug: bool,
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from_error(&e).into()
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let params = Params::new(args.eps, args.min_points)?;

    let reader: Box<dyn BufRead> = match &args.input {
        None => Box::new(io::stdin().lock()),
        Some(path) => {
            let file = File::open(path)
                .map_err(error::InputError::from)
                .with_context(|| format!("failed to open {:?}", path))?;
            Box::new(BufReader::new(file))
        }
    };

    // Nothing is written until clustering is done, so a failed run leaves no
    // partial output behind
    let mut buffer = Vec::new();
    cluster_stream(reader, &mut buffer, args.format, args.index, &params)?;

    match &args.output {
        None => io::stdout()
            .lock()
            .write_all(&buffer)
            .context("failed to write output")?,
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {:?}", path))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(&buffer).context("failed to write output")?;
            writer.flush().context("failed to write output")?;
            debug!("clusters written to {:?}", path);
        }
    }

    Ok(())
}

/// Reads points from `reader`, clusters them and writes the JSON result to `writer`
///
/// Returns the number of clusters found.
fn cluster_stream<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    format: InputFormat,
    index: IndexKind,
    params: &Params,
) -> Result<usize> {
    let points = read_points(reader, format).context("failed to read input")?;
    debug!(
        "read {} points, running DBSCAN with eps={}, minPts={}",
        points.len(),
        params.eps(),
        params.min_points()
    );

    let result = match index {
        IndexKind::Rtree => cluster_points::<RTreeIndex>(&points, params),
        IndexKind::Scan => cluster_points::<ScanIndex>(&points, params),
    };

    write_clusters(writer, &result).context("failed to write output")?;
    Ok(result.len())
}

fn cluster_points<I: SpatialIndex>(
    points: &[cluster::Point],
    params: &Params,
) -> Vec<cluster::ClusterOutput> {
    let (clusters, noise) = db_scan::<I>(points, params);
    info!(
        points = points.len(),
        clusters = clusters.len(),
        noise = noise.len(),
        "clustering finished"
    );
    assemble(points, &clusters)
}
