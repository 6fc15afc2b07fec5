// mod.rs - Result writers and diagnostic rendering

pub mod render;

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::Msd;
use crate::data::TrialPair;

/// Supported result file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, json", s)),
        }
    }
}

/// One scored trial, in the column order of the experiment log
/// (keystrokes, characters, time, speed, error rate, KSPC) followed by the
/// MSD details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: String,
    pub presented: String,
    pub transcribed: String,
    pub keystrokes: Option<u32>,
    pub characters: usize,
    pub time_s: Option<f64>,
    pub speed_wpm: Option<f64>,
    pub error_rate: f64,
    pub kspc: Option<f64>,
    pub msd: u32,
    pub alignments: usize,
    pub average_alignment_length: f64,
    /// Growth mitigation discarded alignments for this trial
    pub thinned: bool,
}

impl ResultRow {
    pub fn from_trial(trial: &TrialPair, msd: &Msd) -> Self {
        Self {
            id: trial.id.clone(),
            presented: trial.presented.clone(),
            transcribed: trial.transcribed.clone(),
            keystrokes: trial.keystrokes,
            characters: trial.characters(),
            time_s: trial.time_seconds(),
            speed_wpm: trial.speed_wpm(),
            error_rate: msd.error_rate(),
            kspc: trial.kspc(),
            msd: msd.msd(),
            alignments: msd.alignment_count(),
            average_alignment_length: msd.average_alignment_length(),
            thinned: msd.is_approximate(),
        }
    }
}

/// Aggregate statistics over a batch of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub trials: usize,
    pub mean_error_rate: f64,
    pub mean_speed_wpm: Option<f64>,
    pub mean_kspc: Option<f64>,
    pub thinned_trials: usize,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub fn summarize(rows: &[ResultRow]) -> BatchSummary {
    BatchSummary {
        trials: rows.len(),
        mean_error_rate: mean(rows.iter().map(|r| r.error_rate)).unwrap_or(0.0),
        mean_speed_wpm: mean(rows.iter().filter_map(|r| r.speed_wpm)),
        mean_kspc: mean(rows.iter().filter_map(|r| r.kspc)),
        thinned_trials: rows.iter().filter(|r| r.thinned).count(),
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    command: &'a str,
    generated: String,
    version: &'static str,
    summary: BatchSummary,
    results: &'a [ResultRow],
}

const COLUMNS: [&str; 13] = [
    "id",
    "presented",
    "transcribed",
    "keystrokes",
    "characters",
    "time_s",
    "speed_wpm",
    "error_rate",
    "kspc",
    "msd",
    "alignments",
    "avg_alignment_length",
    "thinned",
];

fn opt_u32(value: Option<u32>) -> String {
    value.map_or_else(|| "NA".to_string(), |v| v.to_string())
}

fn opt_f64(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "NA".to_string(), |v| format!("{:.*}", precision, v))
}

fn row_fields(row: &ResultRow) -> Vec<String> {
    vec![
        row.id.clone(),
        row.presented.clone(),
        row.transcribed.clone(),
        opt_u32(row.keystrokes),
        row.characters.to_string(),
        opt_f64(row.time_s, 2),
        opt_f64(row.speed_wpm, 2),
        format!("{:.2}", row.error_rate),
        opt_f64(row.kspc, 4),
        row.msd.to_string(),
        row.alignments.to_string(),
        format!("{:.2}", row.average_alignment_length),
        row.thinned.to_string(),
    ]
}

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

fn create_writer(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

fn write_header_comments<W: Write>(writer: &mut W, command_line: &str) -> Result<(), String> {
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# msdist v{}", env!("CARGO_PKG_VERSION")).map_err(|e| format!("Write error: {}", e))?;
    Ok(())
}

/// Write results as delimited text; fields containing the delimiter or
/// quotes are quoted by the csv writer
fn write_delimited(
    file_path: &str,
    delimiter: u8,
    rows: &[ResultRow],
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    write_header_comments(&mut writer, command_line)?;

    let mut records = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    records
        .write_record(COLUMNS)
        .map_err(|e| format!("Write error: {}", e))?;
    for row in rows {
        records
            .write_record(row_fields(row))
            .map_err(|e| format!("Write error: {}", e))?;
    }

    records.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write results as a JSON report with metadata and summary
pub fn write_json(file_path: &str, rows: &[ResultRow], command_line: &str) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    let report = JsonReport {
        command: command_line,
        generated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        version: env!("CARGO_PKG_VERSION"),
        summary: summarize(rows),
        results: rows,
    };

    serde_json::to_writer_pretty(&mut writer, &report)
        .map_err(|e| format!("Failed to serialize results: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write results in the specified format
pub fn write_results(
    file_path: &str,
    format: OutputFormat,
    rows: &[ResultRow],
    command_line: &str,
) -> Result<(), String> {
    match format {
        OutputFormat::Tsv => write_delimited(file_path, b'\t', rows, command_line)?,
        OutputFormat::Csv => write_delimited(file_path, b',', rows, command_line)?,
        OutputFormat::Json => write_json(file_path, rows, command_line)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_rows() -> Vec<ResultRow> {
        let mut slow = TrialPair::new("p1", "the cat", "the cot");
        slow.keystrokes = Some(14);
        slow.time_ms = Some(3500);
        let exact = TrialPair::new("p2", "hello, world", "hello, world");

        [slow, exact]
            .iter()
            .map(|t| {
                let m = Msd::from_strings(&t.presented, &t.transcribed, false).unwrap();
                ResultRow::from_trial(t, &m)
            })
            .collect()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TSV".parse::<OutputFormat>(), Ok(OutputFormat::Tsv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("phylip".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_result_row() {
        let rows = sample_rows();
        assert_eq!(rows[0].msd, 1);
        assert_eq!(rows[0].characters, 7);
        assert!((rows[0].error_rate - 100.0 / 7.0).abs() < 1e-9);
        assert!((rows[0].speed_wpm.unwrap() - 24.0).abs() < 1e-9);
        assert!((rows[0].kspc.unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(rows[1].error_rate, 0.0);
        assert_eq!(rows[1].speed_wpm, None);
        assert!(!rows[1].thinned);
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&sample_rows());
        assert_eq!(summary.trials, 2);
        assert!((summary.mean_error_rate - 50.0 / 7.0).abs() < 1e-9);
        assert_eq!(summary.mean_speed_wpm, Some(24.0));
        assert_eq!(summary.thinned_trials, 0);

        let empty = summarize(&[]);
        assert_eq!(empty.mean_error_rate, 0.0);
        assert_eq!(empty.mean_kspc, None);
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let dir = std::env::temp_dir().join(format!("msdist_out_{}", std::process::id()));
        let path = dir.join("results.csv");
        let path_str = path.to_string_lossy().to_string();

        write_results(&path_str, OutputFormat::Csv, &sample_rows(), "msdist --input x.csv").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        fs::remove_dir_all(&dir).ok();

        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# Command: msdist --input x.csv");
        assert!(lines[2].starts_with("# msdist v"));
        assert!(lines[3].starts_with("id,presented,transcribed,keystrokes"));
        assert_eq!(lines[4], "p1,the cat,the cot,14,7,3.50,24.00,14.29,2.0000,1,1,7.00,false");
        assert!(lines[5].starts_with("p2,\"hello, world\",\"hello, world\",NA,12"));
    }

    #[test]
    fn test_write_tsv_and_json() {
        let dir = std::env::temp_dir().join(format!("msdist_out2_{}", std::process::id()));
        let tsv = dir.join("results.tsv").to_string_lossy().to_string();
        let json = dir.join("nested").join("results.json").to_string_lossy().to_string();

        write_results(&tsv, OutputFormat::Tsv, &sample_rows(), "cmd").unwrap();
        write_results(&json, OutputFormat::Json, &sample_rows(), "cmd").unwrap();

        let tsv_content = fs::read_to_string(&tsv).unwrap();
        let json_content = fs::read_to_string(&json).unwrap();
        fs::remove_dir_all(&dir).ok();

        assert!(tsv_content.contains("p2\thello, world\thello, world\tNA"));

        let value: serde_json::Value = serde_json::from_str(&json_content).unwrap();
        assert_eq!(value["command"], "cmd");
        assert_eq!(value["summary"]["trials"], 2);
        assert_eq!(value["results"][0]["msd"], 1);
        assert_eq!(value["results"][1]["keystrokes"], serde_json::Value::Null);
    }
}
