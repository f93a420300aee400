use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use fitts_analysis::{AnalysisError, config::AnalysisConfig, sequence::SequenceAggregator};

use crate::{
    command::throughput::warn_on_anomalies,
    schema::{
        report::{FailedSequence, SequenceEntry, SequenceReport},
        sequences::{RecordedSequence, SequenceCollection},
    },
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SequenceArg {
    /// Path to the sequences JSON file
    file: PathBuf,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SequenceArg, config: &AnalysisConfig) -> anyhow::Result<()> {
    let collection: SequenceCollection = util::read_json_file("sequences", &arg.file)?;
    tracing::info!(
        path = %arg.file.display(),
        sequences = collection.sequences.len(),
        trials = collection
            .sequences
            .iter()
            .map(|s| s.sequence.trials.len())
            .sum::<usize>(),
        "loaded sequences"
    );

    let report = summarize_all(&collection.sequences, config)?;
    if !report.failed.is_empty() {
        tracing::warn!(
            failed = report.failed.len(),
            "some sequences could not be analyzed"
        );
    }
    Output::save_json(&report, arg.output.clone())
}

fn summarize_all(
    sequences: &[RecordedSequence],
    config: &AnalysisConfig,
) -> Result<SequenceReport, AnalysisError> {
    let aggregator = SequenceAggregator::from_config(config)?;
    let mut entries = Vec::with_capacity(sequences.len());
    let mut failed = Vec::new();

    for recorded in sequences {
        let code = &recorded.code;
        match aggregator.summarize(&recorded.sequence) {
            Ok(summary) => {
                tracing::debug!(
                    %code,
                    trials = summary.trial_count(),
                    throughput = summary.throughput.throughput,
                    "summarized sequence"
                );
                warn_on_anomalies(code, &summary.throughput, config);
                entries.push(SequenceEntry::new(
                    code.clone(),
                    recorded.sequence.condition,
                    &summary,
                    config.error_threshold,
                ));
            }
            Err(err) => {
                tracing::warn!(%code, error = %err, "skipping sequence");
                failed.push(FailedSequence {
                    code: code.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(SequenceReport {
        generated_at: Utc::now(),
        config: *config,
        sequences: entries,
        failed,
    })
}
