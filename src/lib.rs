//! cohortcsv - typed loader for a COVID-19 hospital cohort dataset
//!
//! Reads a delimited (or JSON) source of clinical cases, where missing values
//! are written as `NA`, and normalizes every row into a [`NormalizedRecord`]
//! with numbers, nullable fields and closed enumerations.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod summary;

use tracing::info;

pub use config::LoadConfig;
pub use error::{LoadError, Result};
pub use model::NormalizedRecord;
pub use normalize::RecordNormalizer;

use parser::ParserFactory;

/// Read the configured source and normalize every row, in source order.
///
/// Fails on the first unreadable file, missing header column or
/// out-of-contract cell.
pub fn load(config: &LoadConfig) -> Result<Vec<NormalizedRecord>> {
    let table = ParserFactory::new().parse(&config.source, config)?;
    info!(
        source = %config.source.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "read source"
    );

    let records = RecordNormalizer::new()
        .with_trace_rows(config.trace_rows)
        .normalize_table(&table)?;
    info!(records = records.len(), "normalized records");

    Ok(records)
}
