use std::{
    fmt::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use fitts_analysis::{
    config::AnalysisConfig,
    throughput::{ThroughputAnalyzer, ThroughputResult},
};
use fitts_stats::{StatsError, descriptive::DescriptiveStats, normality::Lilliefors};

use crate::{
    input::{self, SequenceRecord},
    util::{self, Output},
};

const DATA_HEADER: &str =
    "Task,Response,A,W,ID,N,Skewness,Kurtosis,IsNormal,Ae,We,IDe,MT,Misses,Throughput";
const RULE: &str = "============================================================";

#[derive(Debug, Clone, Args)]
pub(crate) struct ThroughputArg {
    /// Sequence file to analyze
    file: PathBuf,

    /// Print a report per sequence instead of one delimited line per sequence
    #[arg(long)]
    table: bool,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ThroughputArg, config: &AnalysisConfig) -> anyhow::Result<()> {
    let normality = Lilliefors::try_with_alpha(config.normality_alpha).with_context(|| {
        format!(
            "normality_alpha must lie strictly between 0 and 1, got {}",
            config.normality_alpha
        )
    })?;
    let analyzer = ThroughputAnalyzer::with_normality_test(normality);
    let file = util::read_text_file("sequence", &arg.file, input::parse_sequence_file)?;
    tracing::info!(
        path = %arg.file.display(),
        sequences = file.sequences.len(),
        "loaded sequence file"
    );

    let mut text = String::new();
    if !arg.table {
        writeln!(text, "{},{DATA_HEADER}", file.code_header)?;
    }
    for record in &file.sequences {
        let result = match analyze(&analyzer, record, config) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(code = %record.code, error = %err, "skipping sequence");
                continue;
            }
        };
        if arg.table {
            text.push_str(&sequence_report(record, &result)?);
            text.push('\n');
        } else {
            writeln!(text, "{}", summary_line(&record.code, &result))?;
        }
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    output.write_text(&text)
}

fn analyze(
    analyzer: &ThroughputAnalyzer,
    record: &SequenceRecord,
    config: &AnalysisConfig,
) -> anyhow::Result<ThroughputResult> {
    let result = analyzer.analyze(
        &record.condition,
        &record.from,
        &record.to,
        &record.select,
        &record.movement_times,
    )?;
    tracing::debug!(
        code = %record.code,
        trials = result.trial_count(),
        throughput = result.throughput,
        "analyzed sequence"
    );
    warn_on_anomalies(&record.code, &result, config);
    Ok(result)
}

pub(super) fn warn_on_anomalies(code: &str, result: &ThroughputResult, config: &AnalysisConfig) {
    for mismatch in result.amplitude_mismatches() {
        tracing::warn!(
            code,
            trial = mismatch.index,
            expected = mismatch.expected,
            actual = mismatch.actual,
            "trial amplitude does not match the task layout"
        );
    }
    if let Some(threshold) = config.error_threshold
        && result.exceeds_error_threshold(threshold)
    {
        tracing::warn!(
            code,
            error_rate = result.error_rate,
            threshold,
            "error rate above threshold; sequence should be repeated"
        );
    }
    for (statistic, outcome) in [
        ("skewness", result.skewness.as_ref().err()),
        ("kurtosis", result.kurtosis.as_ref().err()),
        ("normality", result.is_normal.as_ref().err()),
    ] {
        if let Some(err) = outcome {
            tracing::debug!(code, statistic, error = %err, "statistic unavailable");
        }
    }
}

fn or_empty<T>(value: &Result<T, StatsError>, format: impl FnOnce(&T) -> String) -> String {
    value.as_ref().map(format).unwrap_or_default()
}

fn summary_line(code: &str, r: &ThroughputResult) -> String {
    let c = &r.condition;
    format!(
        "{code},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        c.task_type,
        c.response_type,
        util::fixed(c.amplitude),
        util::fixed(c.width),
        util::fixed(r.nominal_id()),
        r.trial_count(),
        or_empty(&r.skewness, |v| util::fixed(*v)),
        or_empty(&r.kurtosis, |v| util::fixed(*v)),
        or_empty(&r.is_normal, ToString::to_string),
        util::fixed(r.effective_amplitude),
        util::fixed(r.effective_width),
        util::fixed(r.effective_id),
        util::fixed(r.movement_time),
        r.miss_count,
        util::fixed(r.throughput),
    )
}

fn sequence_report(record: &SequenceRecord, r: &ThroughputResult) -> Result<String, fmt::Error> {
    let c = &r.condition;
    let mut out = String::new();
    writeln!(out, "Code = {}", record.code)?;
    writeln!(
        out,
        "A = {:.1}, W = {:.1} (ID = {:.2})",
        c.amplitude,
        c.width,
        c.nominal_id()
    )?;
    writeln!(
        out,
        "Task_type = {}, Response_type = {}",
        c.task_type, c.response_type
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "xFrom", "yFrom", "xTo", "yTo", "xSelect", "ySelect", "MT"
    )?;
    writeln!(out, "{}", "-".repeat(RULE.len()))?;
    for i in 0..record.trial_count() {
        let (from, to, select) = (record.from[i], record.to[i], record.select[i]);
        writeln!(
            out,
            "{:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.0}",
            from.x, from.y, to.x, to.y, select.x, select.y, record.movement_times[i]
        )?;
    }
    writeln!(out, "{RULE}")?;

    let delta_x = r
        .delta_x
        .iter()
        .map(|dx| format!("{dx:.1}"))
        .collect::<Vec<_>>();
    writeln!(out, "Number_of_trials = {}", r.trial_count())?;
    writeln!(out, "Select(x') = {}", delta_x.join(", "))?;
    writeln!(out, "-----")?;
    writeln!(out, "Mean(x') = {:.2}", r.mean_delta_x)?;
    writeln!(out, "SD(x') = {:.2}", r.sd_x)?;
    writeln!(
        out,
        "Skewness = {}",
        or_na(&r.skewness, |v| format!("{v:.2}"))
    )?;
    writeln!(
        out,
        "Kurtosis = {}",
        or_na(&r.kurtosis, |v| format!("{v:.2}"))
    )?;
    writeln!(out, "Is_normal? = {}", or_na(&r.is_normal, ToString::to_string))?;
    writeln!(out, "-----")?;
    writeln!(out, "Misses = {}", r.miss_count)?;
    writeln!(out, "Error_rate = {:.1}%", r.error_rate)?;
    writeln!(out, "-----")?;
    writeln!(out, "Ae = {:.1}", r.effective_amplitude)?;
    writeln!(out, "We = {:.1}", r.effective_width)?;
    writeln!(out, "IDe = {:.2}", r.effective_id)?;
    writeln!(out, "MT = {:.1}", r.movement_time)?;
    if let Ok(mt) = DescriptiveStats::new(record.movement_times.iter().copied()) {
        writeln!(
            out,
            "MT_range = {:.0} .. {:.0} (median {:.1}, SD {:.1})",
            mt.min, mt.max, mt.median, mt.std_dev
        )?;
    }
    writeln!(out, "Throughput = {:.2}", r.throughput)?;
    Ok(out)
}

fn or_na<T>(value: &Result<T, StatsError>, format: impl FnOnce(&T) -> String) -> String {
    value.as_ref().map_or_else(|err| format!("n/a ({err})"), format)
}
