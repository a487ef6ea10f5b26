//! Writing benchmark results to disk, as CSV, JSON or YAML.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use sortbench_core::orst::benchmark::BenchmarkResult;

const CSV_HEADER: &str = "Algorithm,Time (ms),Memory (bytes),Stable,Sorted";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Format {
    /// Comma separated values, one row per result
    Csv,

    /// A pretty printed json array
    Json,

    /// A yaml sequence
    Yaml,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

/// The serialized shape of a [`BenchmarkResult`].
#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    algorithm: &'a str,
    time_ms: f64,
    memory_bytes: u64,
    stable: bool,
    sorted: bool,
}

impl<'a> From<&'a BenchmarkResult> for ResultRow<'a> {
    fn from(result: &'a BenchmarkResult) -> Self {
        Self {
            algorithm: result.algorithm(),
            time_ms: result.time_ms(),
            memory_bytes: result.memory_bytes(),
            stable: result.is_stable(),
            sorted: result.is_sorted(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Quotes a field if it holds a separator, a quote or a line break. Annotated labels such as
/// `Heap Sort [Random, n=1000]` always need it.
fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Writes the header and one line per result. Times carry four decimals, flags read `Yes`/`No`.
pub fn write_csv<W: Write>(results: &[BenchmarkResult], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{CSV_HEADER}")?;
    for result in results {
        writeln!(
            writer,
            "{},{:.4},{},{},{}",
            csv_field(result.algorithm()),
            result.time_ms(),
            result.memory_bytes(),
            yes_no(result.is_stable()),
            yes_no(result.is_sorted())
        )?;
    }
    Ok(())
}

pub fn write_results<W: Write>(
    results: &[BenchmarkResult],
    format: Format,
    writer: W,
) -> anyhow::Result<()> {
    let rows = results.iter().map(ResultRow::from).collect::<Vec<_>>();
    match format {
        Format::Csv => write_csv(results, writer)?,
        Format::Json => serde_json::to_writer_pretty(writer, &rows)?,
        Format::Yaml => serde_yaml::to_writer(writer, &rows)?,
    }
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the results into it.
pub fn save(results: &[BenchmarkResult], path: &Path, format: Format) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open {} for writing", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_results(results, format, &mut writer)?;
    writer
        .flush()
        .with_context(|| format!("could not finish writing {}", path.display()))?;
    Ok(())
}

/// `<stem>.<extension>` in the current directory.
pub fn default_path(stem: &str, format: Format) -> PathBuf {
    PathBuf::from(format!("{stem}.{}", format.extension()))
}
