//! JSON output format

use std::path::Path;

use anyhow::{Context, Result};
use termcolor::WriteColor;

use crate::model::NormalizedRecord;

use super::OutputFormatter;

/// JSON array of records, the form the visualization consumes
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        records: &[NormalizedRecord],
        _source: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, records)
        } else {
            serde_json::to_writer(&mut *writer, records)
        };
        written.context("Failed to serialize records")?;
        writeln!(writer)?;

        Ok(())
    }
}
