//! Parse, build, compute and write, strictly in sequence.

use anyhow::{Context, Result};
use complex::ComplexParser;
use config::Config;
use diagram::PairWriter;
use filtration::StreamBuilder;
use persistence::{PersistenceAlgorithm, StandardReduction};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// What one run did, for callers that want more than the printed lines.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub cells: usize,
    pub stream_len: usize,
    pub intervals: usize,
    pub pairs_written: usize,
    pub read_time: Duration,
    pub fill_time: Duration,
    pub compute_time: Duration,
}

/// Runs the whole conversion from `input` to `output`, printing progress
/// diagnostics to `out`.
///
/// # Errors
///
/// Any parse, validation, algorithm or output error, with the offending file
/// named in the context. Nothing is written to `output` unless the barcode
/// was computed successfully.
pub fn run<W: Write>(input: &Path, output: &Path, cfg: &Config, out: &mut W) -> Result<RunReport> {
    let algo = StandardReduction::new(cfg.max_dimension)
        .context("invalid TSC_MAX_DIM")?
        .keep_zero_persistence(cfg.keep_zero_persistence);

    let start = Instant::now();
    let cpx = ComplexParser::new()
        .strict(cfg.strict_header)
        .parse_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let read_time = start.elapsed();

    let header = cpx.header();
    writeln!(out, "Number of cells: {}", header.total_cells)?;
    writeln!(out, "Global dataset dimension: {}", header.global_dimension)?;
    for (dim, n) in cpx.cell_counts().iter().enumerate() {
        writeln!(out, "  {} cells of dimension {}", n, dim)?;
    }
    writeln!(out, "Number of entries in boundary matrix: {}", header.boundary_entries)?;
    writeln!(out, "Read TTK Simplicial Complex file: {:.3}s", read_time.as_secs_f64())?;

    let start = Instant::now();
    let stream = StreamBuilder::build(&cpx)
        .with_context(|| format!("invalid complex in {}", input.display()))?;
    let fill_time = start.elapsed();
    let cells = cpx.num_cells();
    drop(cpx);
    writeln!(out, "Filled filtration: {:.3}s", fill_time.as_secs_f64())?;

    let (barcodes, compute_time) = compute(&algo, &stream)?;
    writeln!(out, "Computed diagram in {:.3} seconds", compute_time.as_secs_f64())?;

    let pairs_written = PairWriter::write_file(output, &barcodes)?;
    writeln!(out, "Wrote {} pairs to {}", pairs_written, output.display())?;

    info!(
        input = %input.display(),
        output = %output.display(),
        cells,
        pairs = pairs_written,
        "diagram written"
    );

    Ok(RunReport {
        cells,
        stream_len: stream.len(),
        intervals: barcodes.len(),
        pairs_written,
        read_time,
        fill_time,
        compute_time,
    })
}

fn compute(
    algo: &dyn PersistenceAlgorithm,
    stream: &filtration::FinalizedStream,
) -> Result<(persistence::BarcodeCollection, Duration)> {
    let start = Instant::now();
    let barcodes = algo
        .compute_intervals(stream)
        .with_context(|| format!("{} persistence algorithm failed", algo.name()))?;
    Ok((barcodes, start.elapsed()))
}
