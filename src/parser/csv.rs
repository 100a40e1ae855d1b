//! Delimited text parser (CSV/TSV)

use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::LoadConfig;
use crate::error::{LoadError, Result};
use crate::model::{RawCell, RawRow, RawTable};

use super::SourceParser;

/// Parser for CSV and TSV files
pub struct CsvParser;

impl CsvParser {
    /// Delimiter for a path: explicit override, tab for `.tsv`, comma otherwise
    fn delimiter(path: &Path, config: &LoadConfig) -> u8 {
        if let Some(delimiter) = config.delimiter {
            return delimiter;
        }
        let is_tsv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("tsv"));
        if is_tsv {
            b'\t'
        } else {
            b','
        }
    }
}

impl SourceParser for CsvParser {
    fn parse(&self, path: &Path, config: &LoadConfig) -> Result<RawTable> {
        let file = super::open(path)?;
        let csv_error = |source: csv::Error| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let delimiter = Self::delimiter(path, config);
        debug!(
            path = %path.display(),
            delimiter = %char::from(delimiter).escape_default(),
            "reading delimited source"
        );

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .from_reader(BufReader::new(file));

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut table = RawTable::new(columns);

        for (index, result) in csv_reader.records().enumerate() {
            let record = result.map_err(csv_error)?;
            // +2 for 1-indexing and header
            let line = record
                .position()
                .map_or(index + 2, |pos| pos.line() as usize);

            let mut row = RawRow::new(line);
            for (name, value) in table.columns.iter().zip(record.iter()) {
                row.insert(name.as_str(), RawCell::infer(value));
            }
            table.add_row(row);
        }

        Ok(table)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "tsv" | "txt")
    }
}
