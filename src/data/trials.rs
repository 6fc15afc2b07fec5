// trials.rs - Text-entry trials: presented/transcribed phrase pairs with timing

use std::path::Path;
use serde::{Deserialize, Serialize};

/// One trial of a text-entry experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialPair {
    pub id: String,
    pub presented: String,
    pub transcribed: String,
    /// Keystrokes spent entering the phrase, excluding the final ENTER
    pub keystrokes: Option<u32>,
    /// Time from first keystroke to end of phrase, in milliseconds
    pub time_ms: Option<u64>,
}

impl TrialPair {
    pub fn new(id: &str, presented: &str, transcribed: &str) -> Self {
        Self {
            id: id.to_string(),
            presented: presented.to_string(),
            transcribed: transcribed.to_string(),
            keystrokes: None,
            time_ms: None,
        }
    }

    /// Length of the transcribed text in characters
    pub fn characters(&self) -> usize {
        self.transcribed.chars().count()
    }

    pub fn time_seconds(&self) -> Option<f64> {
        self.time_ms.map(|ms| ms as f64 / 1000.0)
    }

    /// Entry speed in words per minute, a word being five characters
    pub fn speed_wpm(&self) -> Option<f64> {
        let seconds = self.time_seconds().filter(|s| *s > 0.0)?;
        Some(self.characters() as f64 / seconds * 12.0)
    }

    /// Keystrokes per character of transcribed text
    pub fn kspc(&self) -> Option<f64> {
        let keystrokes = self.keystrokes?;
        match self.characters() {
            0 => None,
            n => Some(keystrokes as f64 / n as f64),
        }
    }
}

/// Column positions resolved from a trial file header
#[derive(Debug, Clone, PartialEq)]
pub struct TrialColumns {
    pub id: Option<usize>,
    pub presented: usize,
    pub transcribed: usize,
    pub keystrokes: Option<usize>,
    pub time_ms: Option<usize>,
    pub width: usize,
}

impl TrialColumns {
    /// Resolve columns by name, case-insensitively
    pub fn from_header(header: &[&str]) -> Result<Self, String> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().trim_matches('"').eq_ignore_ascii_case(name))
        };

        let presented = find("presented").ok_or("Missing required column 'presented'")?;
        let transcribed = find("transcribed").ok_or("Missing required column 'transcribed'")?;

        Ok(Self {
            id: find("id"),
            presented,
            transcribed,
            keystrokes: find("keystrokes"),
            time_ms: find("time_ms"),
            width: header.len(),
        })
    }

    /// Build a trial from one data row; `line` is used in error messages
    pub fn parse_row(&self, fields: &[&str], line: usize) -> Result<TrialPair, String> {
        if fields.len() != self.width {
            return Err(format!(
                "Line {} has {} columns, expected {}",
                line,
                fields.len(),
                self.width
            ));
        }

        let id = match self.id.map(|i| fields[i].trim()) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("trial_{}", line),
        };

        let keystrokes = parse_optional::<u32>(self.keystrokes.map(|i| fields[i]), "keystrokes", line)?;
        let time_ms = parse_optional::<u64>(self.time_ms.map(|i| fields[i]), "time_ms", line)?;

        Ok(TrialPair {
            id,
            presented: fields[self.presented].to_string(),
            transcribed: fields[self.transcribed].to_string(),
            keystrokes,
            time_ms,
        })
    }
}

fn parse_optional<T: std::str::FromStr>(
    field: Option<&str>,
    column: &str,
    line: usize,
) -> Result<Option<T>, String> {
    match field.map(str::trim) {
        None | Some("") | Some("NA") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid {} '{}' at line {}", column, value, line)),
    }
}

/// Collection of trials loaded from one file
#[derive(Debug, Default)]
pub struct TrialSet {
    pub trials: Vec<TrialPair>,
}

impl TrialSet {
    pub fn new() -> Self {
        Self { trials: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Load trials, choosing the loader from the file extension
    /// (`.csv` → CSV, anything else → tab-separated)
    pub fn from_file(file_path: &Path) -> Result<Self, String> {
        let extension = file_path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("tsv")
            .to_lowercase();

        let set = match extension.as_str() {
            "csv" => Self::from_csv(file_path)?,
            _ => Self::from_tsv(file_path)?,
        };

        if set.is_empty() {
            return Err(format!("No trials found in '{}'", file_path.display()));
        }

        Ok(set)
    }
}
