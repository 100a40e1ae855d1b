//! Configuration handling for cohortcsv

use std::path::PathBuf;

use termcolor::ColorChoice;

/// Conventional location of the cohort dataset, relative to the working directory
pub const DEFAULT_SOURCE: &str = "data/journal.pone.0249231.s004.csv";

/// Output format for loaded records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Summary,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "summary" => Ok(OutputFormat::Summary),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for a load run
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Path to the source file
    pub source: PathBuf,
    /// Field delimiter override for delimited sources
    pub delimiter: Option<u8>,
    /// Emit a trace event for every raw row read
    pub trace_rows: bool,
    /// Output format
    pub output_format: OutputFormat,
    /// Single-line JSON output
    pub compact_json: bool,
    /// Colour choice for terminal output
    pub color: ColorChoice,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            delimiter: None,
            trace_rows: false,
            output_format: OutputFormat::default(),
            compact_json: false,
            color: ColorChoice::Auto,
        }
    }
}

impl LoadConfig {
    /// Create a new LoadConfig for a source file
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Override the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enable per-row trace events
    pub fn with_trace_rows(mut self, enabled: bool) -> Self {
        self.trace_rows = enabled;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_compact_json(mut self, compact: bool) -> Self {
        self.compact_json = compact;
        self
    }

    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Summary".parse::<OutputFormat>(), Ok(OutputFormat::Summary));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_builder() {
        let config = LoadConfig::new("cohort.tsv")
            .with_delimiter(b';')
            .with_trace_rows(true);
        assert_eq!(config.source, PathBuf::from("cohort.tsv"));
        assert_eq!(config.delimiter, Some(b';'));
        assert!(config.trace_rows);
        assert_eq!(config.output_format, OutputFormat::Json);
    }
}
