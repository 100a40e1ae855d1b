//! Output formatting for loaded records

mod json;
mod summary;
mod table;

use std::path::Path;

use anyhow::Result;
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::config::OutputFormat;
use crate::model::NormalizedRecord;

pub use json::JsonOutput;
pub use summary::SummaryOutput;
pub use table::TableOutput;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render records loaded from `source` to a writer
    fn render(
        &self,
        records: &[NormalizedRecord],
        source: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat, compact_json: bool) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Json if compact_json => Box::new(JsonOutput::compact()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Table => Box::new(TableOutput::new()),
            OutputFormat::Summary => Box::new(SummaryOutput::new()),
        }
    }
}

/// Render records to stdout
pub fn render_to_stdout(
    records: &[NormalizedRecord],
    source: &Path,
    format: OutputFormat,
    compact_json: bool,
    color: ColorChoice,
) -> Result<()> {
    let formatter = OutputFactory::create(format, compact_json);
    let mut stdout = StandardStream::stdout(color);
    formatter.render(records, source, &mut stdout)
}

/// Display form of an optional value, `NA` when absent
fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| crate::model::NA_TOKEN.to_string(), |v| v.to_string())
}
