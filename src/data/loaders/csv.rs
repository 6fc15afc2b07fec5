// csv.rs - CSV file loader for trial pairs

use crate::data::trials::{TrialColumns, TrialSet};
use std::path::Path;

impl TrialSet {
    /// Load a comma-separated trial file. Quoted fields may contain commas.
    pub fn from_csv(file_path: &Path) -> Result<Self, String> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .from_path(file_path)
            .map_err(|e| format!("Failed to open CSV file '{}': {}", file_path.display(), e))?;

        let header = reader
            .headers()
            .map_err(|e| format!("Failed to read CSV header: {}", e))?
            .clone();
        let header_fields: Vec<&str> = header.iter().collect();
        let columns = TrialColumns::from_header(&header_fields)?;

        let mut set = TrialSet::new();
        for (row_num, record) in reader.records().enumerate() {
            let record = record.map_err(|e| format!("Invalid CSV record {}: {}", row_num + 1, e))?;
            let line = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(row_num + 2);
            let fields: Vec<&str> = record.iter().collect();
            set.trials.push(columns.parse_row(&fields, line)?);
        }

        Ok(set)
    }
}
