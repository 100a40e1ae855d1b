//! Cohort summary output

use std::path::Path;

use anyhow::Result;
use tabled::builder::Builder;
use tabled::settings::Style;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::model::{NormalizedRecord, Status};
use crate::summary::CohortSummary;

use super::{or_na, OutputFormatter};

/// Counts by outcome and sex, plus missing-value counts per column
pub struct SummaryOutput;

impl SummaryOutput {
    pub fn new() -> Self {
        Self
    }

    fn write_heading(&self, writer: &mut dyn WriteColor, text: &str) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(writer, "{}", text)?;
        writer.reset()?;
        Ok(())
    }

    fn write_overview(&self, summary: &CohortSummary, writer: &mut dyn WriteColor) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(["", "count", "%"]);
        for (status, count) in &summary.by_status {
            builder.push_record([
                status.to_string(),
                count.to_string(),
                or_na(summary.status_share(*status).map(|p| format!("{:.1}", p))),
            ]);
        }
        for (sex, count) in &summary.by_sex {
            builder.push_record([sex.to_string(), count.to_string(), String::new()]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        writeln!(writer, "{}", table)?;

        match summary.age {
            Some(age) => writeln!(
                writer,
                "Age: {:.0} to {:.0} (mean {:.1})",
                age.min, age.max, age.mean
            )?,
            None => writeln!(writer, "Age: NA")?,
        }
        writeln!(
            writer,
            "Median follow-up: {}",
            or_na(summary.median_ftime.map(|t| format!("{:.1} days", t)))
        )?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_missing(&self, summary: &CohortSummary, writer: &mut dyn WriteColor) -> Result<()> {
        let mut builder = Builder::default();
        builder.push_record(["column", "missing"]);
        let mut listed = 0;
        for (column, count) in summary.missing.iter().filter(|(_, count)| **count > 0) {
            builder.push_record([column.name().to_string(), count.to_string()]);
            listed += 1;
        }

        if listed == 0 {
            writeln!(writer, "No missing values.")?;
            return Ok(());
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        writeln!(writer, "{}", table)?;
        Ok(())
    }
}

impl Default for SummaryOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for SummaryOutput {
    fn render(
        &self,
        records: &[NormalizedRecord],
        source: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let summary = CohortSummary::from_records(records);

        self.write_heading(
            writer,
            &format!("{}: {} cases", source.display(), summary.total),
        )?;
        self.write_overview(&summary, writer)?;

        self.write_heading(writer, "Missing values")?;
        self.write_missing(&summary, writer)?;

        if summary.total > 0 && summary.by_status[&Status::Censored] == summary.total {
            writeln!(writer, "Note: every case is censored.")?;
        }

        writer.flush()?;
        Ok(())
    }
}
