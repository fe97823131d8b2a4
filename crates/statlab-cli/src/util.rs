use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use statlab_chart::{ChartDataset, PointColor};

/// Where a JSON report is written.
#[derive(Debug)]
pub enum Output {
    Stdout { writer: StdoutLock<'static> },
    File { writer: BufWriter<File> },
}

impl Output {
    /// Serializes `value` as pretty JSON to `output_path`, or stdout when no
    /// path is given.
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
        output.write_all(json.as_bytes())?;
        output.write_all(b"\n")?;
        Ok(())
    }

    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        match self {
            Output::Stdout { writer } => writer.write_all(bytes)?,
            Output::File { writer } => writer.write_all(bytes)?,
        }
        Ok(())
    }
}

/// Shared `--json` / `--output` flags for every subcommand.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArg {
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Write the JSON report to this file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl ReportArg {
    /// Whether the caller asked for JSON anywhere.
    pub fn wants_json(&self) -> bool {
        self.json || self.output.is_some()
    }

    /// Writes the JSON report to the requested destination.
    pub fn save<T>(&self, report: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        Output::save_json(report, self.output.as_deref())
    }
}

const BAR_WIDTH: usize = 40;

/// Renders a dataset as labeled text bars, accent points marked with `*`.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn print_chart(dataset: &ChartDataset) {
    let max = dataset
        .values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if !(max.is_finite() && max > 0.0) {
        return;
    }
    let label_width = dataset.labels.iter().map(String::len).max().unwrap_or(0);
    for ((label, &value), color) in dataset
        .labels
        .iter()
        .zip(&dataset.values)
        .zip(&dataset.colors)
    {
        let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
        let marker = if *color == PointColor::Accent { "*" } else { " " };
        println!("{label:>label_width$} {marker}|{}", "#".repeat(len));
    }
}
