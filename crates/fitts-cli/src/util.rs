use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::{Context, ensure};
use fitts_analysis::config::AnalysisConfig;

#[derive(Debug)]
pub(crate) enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub(crate) fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub(crate) fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub(crate) fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub(crate) fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub(crate) fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub(crate) fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    /// Writes already formatted text.
    pub(crate) fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", self.display_path()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub(crate) fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a plain-text data file and parse it with `parse`.
///
/// Parse errors are reported together with the file path.
pub(crate) fn read_text_file<T, E, P>(
    file_kind: &str,
    path: P,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", file_kind, path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse {} file: {}", file_kind, path.display()))
}

/// Load the analysis configuration, falling back to defaults when no file is
/// given.
///
/// # Errors
///
/// Returns error if the file cannot be read or holds out-of-range values
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    let config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            read_json_file::<AnalysisConfig, _>("config", path)?
        }
        None => {
            tracing::debug!("using default configuration");
            AnalysisConfig::default()
        }
    };
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AnalysisConfig) -> anyhow::Result<()> {
    let alpha = config.normality_alpha;
    ensure!(
        alpha > 0.0 && alpha < 1.0,
        "normality_alpha must lie strictly between 0 and 1, got {alpha}"
    );
    if let Some(threshold) = config.error_threshold {
        ensure!(
            threshold.is_finite() && threshold >= 0.0,
            "error_threshold must be a non-negative percentage, got {threshold}"
        );
    }
    let thresholds = config.accuracy.thresholds;
    for (name, value) in [
        ("task_axis_crossing", thresholds.task_axis_crossing),
        ("movement_direction_change", thresholds.movement_direction_change),
        (
            "orthogonal_direction_change",
            thresholds.orthogonal_direction_change,
        ),
    ] {
        ensure!(
            value.is_finite() && value >= 0.0,
            "accuracy threshold {name} must be non-negative, got {value}"
        );
    }
    Ok(())
}

/// Format a value the way the delimited summaries expect.
pub(crate) fn fixed(value: f64) -> String {
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        validate_config(&AnalysisConfig::default()).unwrap();
    }

    #[test]
    fn test_alpha_out_of_range_is_rejected() {
        let config = AnalysisConfig {
            normality_alpha: 1.0,
            ..AnalysisConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("normality_alpha"), "{err}");
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let mut config = AnalysisConfig::default();
        config.accuracy.thresholds.movement_direction_change = -1.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_fixed_uses_six_decimals() {
        assert_eq!(fixed(2.0), "2.000000");
        assert_eq!(fixed(1.0 / 3.0), "0.333333");
    }
}
