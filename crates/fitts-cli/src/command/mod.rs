use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::util;

use self::{accuracy::AccuracyArg, sequence::SequenceArg, throughput::ThroughputArg};

mod accuracy;
mod sequence;
mod throughput;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Analysis configuration (JSON); defaults are used when omitted
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,

    /// What analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute path accuracy measures for single trials
    Accuracy(#[clap(flatten)] AccuracyArg),
    /// Compute effective throughput for sequences of trials
    Throughput(#[clap(flatten)] ThroughputArg),
    /// Summarize complete sequences (accuracy and throughput) as JSON
    Sequence(#[clap(flatten)] SequenceArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    let config = util::load_config(args.config.as_deref())?;
    match &args.mode {
        Mode::Accuracy(arg) => accuracy::run(arg, &config)?,
        Mode::Throughput(arg) => throughput::run(arg, &config)?,
        Mode::Sequence(arg) => sequence::run(arg, &config)?,
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
