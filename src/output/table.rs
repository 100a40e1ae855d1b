//! Tabular terminal listing of records

use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::model::NormalizedRecord;

use super::{or_na, OutputFormatter};

const HEADERS: [&str; 8] = ["#", "age", "sex", "status", "bmi", "mews", "xray", "ftime"];

/// One line per record with the key clinical columns
pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_header(&self, writer: &mut dyn WriteColor, source: &Path, count: usize) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(writer, "{}", source.display())?;
        writer.reset()?;
        writeln!(writer, " ({} records)", count)?;
        Ok(())
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn render(
        &self,
        records: &[NormalizedRecord],
        source: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_header(writer, source, records.len())?;

        if records.is_empty() {
            writeln!(writer, "No records.")?;
            return Ok(());
        }

        let mut builder = Builder::default();
        builder.push_record(HEADERS);
        for (index, record) in records.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                record.age.to_string(),
                record.sex.to_string(),
                record.status.to_string(),
                or_na(record.bmi),
                or_na(record.mews),
                record.xray_new.to_string(),
                record.ftime.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, RawRow};
    use crate::normalize::RecordNormalizer;
    use termcolor::Buffer;

    #[test]
    fn test_renders_na_for_absent() {
        let mut row = RawRow::new(2);
        for column in Column::ALL {
            row.insert(column.name(), "NA");
        }
        let row = row
            .with("age", 67i64)
            .with("ftime", 4i64)
            .with("sex", "female")
            .with("status", 2i64)
            .with("xray_new", "Done, not susp");
        let record = RecordNormalizer::new().normalize(&row).unwrap();

        let mut buffer = Buffer::no_color();
        TableOutput::new()
            .render(&[record], Path::new("cohort.csv"), &mut buffer)
            .unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(out.starts_with("cohort.csv (1 records)"));
        assert!(out.contains("female"));
        assert!(out.contains("recovered"));
        assert!(out.contains("Done, not susp"));
        assert!(out.contains("NA"));
    }

    #[test]
    fn test_empty() {
        let mut buffer = Buffer::no_color();
        TableOutput::new()
            .render(&[], Path::new("empty.csv"), &mut buffer)
            .unwrap();
        let out = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(out.contains("No records."));
    }
}
