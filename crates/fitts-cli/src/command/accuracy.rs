use std::{
    fmt::{self, Write as _},
    path::PathBuf,
};

use clap::Args;
use fitts_analysis::{
    Point,
    accuracy::{AccuracyAnalyzer, AccuracyMeasures, TrialAccuracy},
    config::AnalysisConfig,
    demo,
};

use crate::{
    input::{self, TrialRecord},
    util::{self, Output},
};

const DATA_HEADER: &str = "TRE,TAC,MDC,ODC,MV,ME,MO";
const POINTS_PER_LINE: usize = 8;

#[derive(Debug, Clone, Args)]
pub(crate) struct AccuracyArg {
    /// Trial file to analyze
    #[arg(required_unless_present = "demo")]
    file: Option<PathBuf>,

    /// Analyze the built-in demonstration trial instead of a file
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Print a report per trial instead of one delimited line per trial
    #[arg(long)]
    table: bool,

    /// Include the transformed path in reports
    #[arg(long)]
    verbose_path: bool,

    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AccuracyArg, config: &AnalysisConfig) -> anyhow::Result<()> {
    let analyzer = AccuracyAnalyzer::new(config.accuracy);
    let mut output = Output::from_output_path(arg.output.clone())?;

    if arg.demo {
        let record = TrialRecord {
            code: "demo".to_owned(),
            from: demo::FROM,
            to: demo::TO,
            width: demo::WIDTH,
            path: demo::path(),
        };
        let result = analyze(&analyzer, &record)?;
        let report = trial_report(&record, &result, arg.verbose_path)?;
        return output.write_text(&report);
    }

    let Some(path) = &arg.file else {
        anyhow::bail!("no trial file given");
    };
    let file = util::read_text_file("trial", path, input::parse_trial_file)?;
    tracing::info!(
        path = %path.display(),
        trials = file.trials.len(),
        "loaded trial file"
    );

    let mut text = String::new();
    if !arg.table {
        writeln!(text, "{},{DATA_HEADER}", file.code_header)?;
    }
    let mut failed = 0;
    for record in &file.trials {
        let result = match analyze(&analyzer, record) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(code = %record.code, error = %err, "skipping trial");
                failed += 1;
                continue;
            }
        };
        if arg.table {
            text.push_str(&trial_report(record, &result, arg.verbose_path)?);
            text.push('\n');
        } else {
            writeln!(text, "{}", summary_line(&record.code, &result.measures))?;
        }
    }
    if failed > 0 {
        tracing::warn!(failed, "some trials could not be analyzed");
    }

    output.write_text(&text)
}

fn analyze(analyzer: &AccuracyAnalyzer, record: &TrialRecord) -> anyhow::Result<TrialAccuracy> {
    let result = analyzer.analyze_detailed(record.from, record.to, record.width, &record.path)?;
    tracing::debug!(code = %record.code, measures = ?result.measures, "analyzed trial");
    Ok(result)
}

fn summary_line(code: &str, m: &AccuracyMeasures) -> String {
    format!(
        "{code},{},{},{},{},{},{},{}",
        m.tre,
        m.tac,
        m.mdc,
        m.odc,
        util::fixed(m.mv),
        util::fixed(m.me),
        util::fixed(m.mo),
    )
}

fn trial_report(
    record: &TrialRecord,
    result: &TrialAccuracy,
    verbose_path: bool,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = format!("Trial {}", record.code);
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.len()))?;
    writeln!(out, "From = {:.1}, {:.1}", record.from.x, record.from.y)?;
    writeln!(out, "To = {:.1}, {:.1}", record.to.x, record.to.y)?;
    writeln!(out, "Amplitude = {:.1}", result.path.amplitude())?;
    writeln!(out, "Width = {:.1}", record.width)?;
    writeln!(out, "Number of sample points = {}", record.path.len())?;
    writeln!(out, "Sample points...")?;
    write_points(&mut out, &record.path)?;

    if verbose_path {
        let from = result.path.from();
        let to = result.path.to();
        writeln!(out, "-----")?;
        writeln!(out, "Transformed sample points...")?;
        write_points(&mut out, result.path.points())?;
        writeln!(out, "Transformed from = ({:.1}, {:.1})", from.x, from.y)?;
        writeln!(out, "Transformed to = ({:.1}, {:.1})", to.x, to.y)?;
        writeln!(out, "-----")?;
    }

    let m = &result.measures;
    writeln!(out, "Accuracy measures...")?;
    writeln!(out, "TRE = {}", m.tre)?;
    writeln!(out, "TAC = {}", m.tac)?;
    writeln!(out, "MDC = {}", m.mdc)?;
    writeln!(out, "ODC = {}", m.odc)?;
    writeln!(out, "MV = {:.2}", m.mv)?;
    writeln!(out, "ME = {:.2}", m.me)?;
    writeln!(out, "MO = {:.2}", m.mo)?;
    Ok(out)
}

fn write_points(out: &mut String, points: &[Point]) -> fmt::Result {
    for line in points.chunks(POINTS_PER_LINE) {
        let line = line
            .iter()
            .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
            .collect::<Vec<_>>();
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_record() -> TrialRecord {
        TrialRecord {
            code: "demo".to_owned(),
            from: demo::FROM,
            to: demo::TO,
            width: demo::WIDTH,
            path: demo::path(),
        }
    }

    #[test]
    fn test_summary_line_matches_delimited_format() {
        let record = demo_record();
        let result = analyze(&AccuracyAnalyzer::default(), &record).unwrap();
        assert_eq!(
            summary_line("P01,1", &result.measures),
            "P01,1,1,4,4,5,24.530310,26.836838,20.525079"
        );
    }

    #[test]
    fn test_report_lists_measures() {
        let record = demo_record();
        let result = analyze(&AccuracyAnalyzer::default(), &record).unwrap();
        let report = trial_report(&record, &result, false).unwrap();
        assert!(report.starts_with("Trial demo\n==========\n"), "{report}");
        assert!(report.contains("Number of sample points = 149\n"));
        assert!(report.contains("TRE = 1\nTAC = 4\nMDC = 4\nODC = 5\n"));
        assert!(report.contains("MV = 24.53\nME = 26.84\nMO = 20.53\n"));
        assert!(!report.contains("Transformed"));
    }

    #[test]
    fn test_verbose_report_includes_canonical_path() {
        let record = demo_record();
        let result = analyze(&AccuracyAnalyzer::default(), &record).unwrap();
        let report = trial_report(&record, &result, true).unwrap();
        assert!(report.contains("Transformed from = (0.0, 0.0)\n"), "{report}");
        assert!(report.contains("Transformed sample points...\n"));
    }

    #[test]
    fn test_points_wrap_every_eight() {
        let points = (0..10)
            .map(|i| Point::new(f64::from(i), 0.0))
            .collect::<Vec<_>>();
        let mut out = String::new();
        write_points(&mut out, &points).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("(8.0, 0.0) (9.0, 0.0)\n"));
    }
}
