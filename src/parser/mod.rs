//! Parser layer for reading the cohort dataset into raw rows

mod csv;
mod json;

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::config::LoadConfig;
use crate::error::{LoadError, Result};
use crate::model::RawTable;

pub use self::csv::CsvParser;
pub use self::json::JsonParser;

/// Trait for parsing tabular source files
pub trait SourceParser: Send + Sync {
    /// Parse a file into its header and raw rows
    fn parse(&self, path: &Path, config: &LoadConfig) -> Result<RawTable>;

    /// Check if this parser can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for creating parsers based on file extension
pub struct ParserFactory {
    parsers: Vec<Box<dyn SourceParser>>,
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserFactory {
    /// Create a new parser factory with all supported parsers
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(CsvParser), Box::new(JsonParser)],
        }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> Result<&dyn SourceParser> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        for parser in &self.parsers {
            if parser.supports_extension(&ext) {
                debug!(path = %path.display(), ext = %ext, "selected parser by extension");
                return Ok(parser.as_ref());
            }
        }

        Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    /// Parse a file using the appropriate parser
    pub fn parse(&self, path: &Path, config: &LoadConfig) -> Result<RawTable> {
        let parser = self.get_parser(path)?;
        parser.parse(path, config)
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
