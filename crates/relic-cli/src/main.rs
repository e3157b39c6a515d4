//! relic: CI gate that fails the build when commented-out code is detected

use std::path::PathBuf;
use std::process;

use clap::Parser;
use relic_core::config::{DEFAULT_ROOT, DEFAULT_SUFFIXES};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "relic")]
#[command(author, version, about = "Detects commented-out code in source trees", long_about = None)]
struct Cli {
    /// Directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,

    /// File name suffix to scan (repeatable)
    #[arg(long = "suffix", default_values_t = default_suffixes())]
    suffixes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect()
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let found = relic_cli::commands::scan::run(&cli.path, &cli.suffixes)?;
    if found {
        process::exit(1);
    }

    Ok(())
}
