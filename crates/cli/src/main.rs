//! # tsc-persistence
//!
//! Computes the persistence diagram of a `TTKSimplicialComplex` file and
//! writes it as text.
//!
//! ```text
//! tsc-persistence <input.tsc> <output.diag>
//! ```
//!
//! Progress diagnostics (cell counts, timings) go to stdout; logs go to
//! stderr. With fewer than two arguments a usage message is printed and the
//! process exits successfully without doing anything.
//!
//! ## Configuration
//!
//! ```text
//! TSC_MAX_DIM        simplex dimension bound for the algorithm  (default: 3)
//! TSC_STRICT_HEADER  fail on inconsistent header fields         (default: "false")
//! TSC_KEEP_DIAGONAL  keep zero-persistence pairs                (default: "false")
//! TSC_LOG_FORMAT     "text" or "json" log lines                 (default: "text")
//! RUST_LOG           tracing filter                             (default: "warn,tsc_persistence=info")
//! ```
//!
//! ## Example
//!
//! ```text
//! $ tsc-persistence fuel.tsc fuel.diag
//! Number of cells: 2048383
//! Global dataset dimension: 3
//!   262144 cells of dimension 0
//!   ...
//! Computed diagram in 4.211 seconds
//! Wrote 18342 pairs to fuel.diag
//! ```

mod pipeline;

use clap::Parser;
use config::{Config, LogFormat};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Persistence diagram of a TTK simplicial complex.
#[derive(Parser, Debug)]
#[command(name = "tsc-persistence")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input `TTKSimplicialComplex` file
    input: Option<PathBuf>,

    /// Output diagram file (overwritten)
    output: Option<PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,tsc_persistence=info".into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() {
    let cfg = Config::from_env();
    init_tracing(cfg.log_format);

    let cli = Cli::parse();
    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        println!("Please provide input and output files");
        return;
    };

    tracing::debug!(?cfg, "configuration loaded");

    let mut stdout = io::stdout().lock();
    if let Err(e) = pipeline::run(&input, &output, &cfg, &mut stdout) {
        tracing::error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
