// tsv.rs - TSV file loader for trial pairs

use crate::data::trials::{TrialColumns, TrialSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl TrialSet {
    /// Load a tab-separated trial file.
    /// Lines starting with '#' and blank lines are skipped. Phrase fields are
    /// kept verbatim, surrounding spaces included.
    pub fn from_tsv(file_path: &Path) -> Result<Self, String> {
        let file = File::open(file_path).map_err(|e| {
            format!("Failed to open TSV file '{}': {}", file_path.display(), e)
        })?;

        let reader = BufReader::new(file);
        let mut columns: Option<TrialColumns> = None;
        let mut set = TrialSet::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line_no = line_num + 1;
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_no, e))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('\t').collect();

            match &columns {
                None => columns = Some(TrialColumns::from_header(&parts)?),
                Some(cols) => set.trials.push(cols.parse_row(&parts, line_no)?),
            }
        }

        if columns.is_none() {
            return Err("Empty TSV file".to_string());
        }

        Ok(set)
    }
}
