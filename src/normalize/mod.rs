//! Normalization of raw rows into typed cohort records

pub mod field;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::error::{LoadError, Result};
use crate::model::{Column, NormalizedRecord, RawCell, RawRow, RawTable};

use field::Coerced;

static ABSENT: RawCell = RawCell::Empty;

/// Converts raw rows into [`NormalizedRecord`]s, failing fast on
/// out-of-contract cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer {
    trace_rows: bool,
}

impl RecordNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a trace event for every raw row before it is normalized
    pub fn with_trace_rows(mut self, enabled: bool) -> Self {
        self.trace_rows = enabled;
        self
    }

    /// Check that a header names every known column.
    ///
    /// A name may appear only once. All missing columns are reported in one
    /// error. Unknown columns are ignored.
    pub fn check_header<'a, I>(&self, header: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let header: Vec<&str> = header.into_iter().collect();

        let mut seen = IndexSet::new();
        let mut duplicates: IndexSet<&str> = IndexSet::new();
        for name in &header {
            if !seen.insert(*name) {
                duplicates.insert(*name);
            }
        }
        if !duplicates.is_empty() {
            return Err(LoadError::DuplicateColumns {
                columns: duplicates.into_iter().map(String::from).collect(),
            });
        }

        for name in header.iter().filter(|n| Column::from_name(n).is_none()) {
            debug!(column = %name, "ignoring unknown column");
        }

        let missing: Vec<String> = Column::ALL
            .iter()
            .map(|c| c.name())
            .filter(|name| !header.contains(name))
            .map(String::from)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(LoadError::MissingColumns { columns: missing })
        }
    }

    /// Normalize one row.
    pub fn normalize(&self, row: &RawRow) -> Result<NormalizedRecord> {
        let reader = RowReader { row };

        Ok(NormalizedRecord {
            adm_ace_arb: reader.read(Column::AdmAceArb, field::nullable_bool)?,
            adm_anticoag: reader.read(Column::AdmAnticoag, field::nullable_bool)?,
            adm_creat: reader.read(Column::AdmCreat, field::nullable_number)?,
            adm_crp: reader.read(Column::AdmCrp, field::nullable_number)?,
            adm_ddimer_new: reader.read(Column::AdmDdimerNew, field::nullable_number)?,
            adm_ferritin: reader.read(Column::AdmFerritin, field::nullable_number)?,
            adm_ldh: reader.read(Column::AdmLdh, field::nullable_number)?,
            adm_neutrotolymphorate: reader
                .read(Column::AdmNeutrotolymphorate, field::nullable_number)?,
            adm_procalcitonin: reader.read(Column::AdmProcalcitonin, field::text)?,
            age: reader.read(Column::Age, field::number)?,
            bmi: reader.read(Column::Bmi, field::nullable_number)?,
            comorb_cvd: reader.read(Column::ComorbCvd, field::nullable_bool)?,
            comorb_cvd_hypertension: reader
                .read(Column::ComorbCvdHypertension, field::nullable_bool)?,
            comorb_dm: reader.read(Column::ComorbDm, field::nullable_bool)?,
            comorb_pulm_dis: reader.read(Column::ComorbPulmDis, field::nullable_bool)?,
            ct_sevscore_total: reader.read(Column::CtSevscoreTotal, field::nullable_number)?,
            ftime: reader.read(Column::Ftime, field::number)?,
            immunocompromised: reader.read(Column::Immunocompromised, field::nullable_bool)?,
            mews: reader.read(Column::Mews, field::nullable_number)?,
            sex: reader.read(Column::Sex, field::sex)?,
            status: reader.read(Column::Status, field::status)?,
            sympt_duration: reader.read(Column::SymptDuration, field::nullable_number)?,
            sympt_dyspnea: reader.read(Column::SymptDyspnea, field::nullable_bool)?,
            sympt_fever: reader.read(Column::SymptFever, field::nullable_bool)?,
            sympt_sevscore_total: reader
                .read(Column::SymptSevscoreTotal, field::nullable_number)?,
            xray_new: reader.read(Column::XrayNew, field::xray)?,
        })
    }

    /// Check the header, then normalize every row in order.
    pub fn normalize_table(&self, table: &RawTable) -> Result<Vec<NormalizedRecord>> {
        self.check_header(table.columns.iter().map(String::as_str))?;
        self.normalize_rows(&table.rows)
    }

    /// Normalize rows in order, stopping at the first invalid cell.
    pub fn normalize_rows(&self, rows: &[RawRow]) -> Result<Vec<NormalizedRecord>> {
        rows.iter()
            .map(|row| {
                if self.trace_rows {
                    trace!(line = row.source_line, cells = ?row.cells, "raw row");
                }
                self.normalize(row)
            })
            .collect()
    }
}

/// Column-aware access to one row, attaching line and column to rejections.
struct RowReader<'a> {
    row: &'a RawRow,
}

impl RowReader<'_> {
    fn read<T>(&self, column: Column, convert: fn(&RawCell) -> Coerced<T>) -> Result<T> {
        // A column absent from the row reads as an empty cell
        let cell = self.row.get(column.name()).unwrap_or(&ABSENT);

        convert(cell).map_err(|_| LoadError::InvalidCell {
            line: self.row.source_line,
            column: column.name(),
            value: cell.to_string(),
            expected: column.class().expected(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sex, Status, XrayFinding};

    fn complete_row() -> RawRow {
        RawRow::new(2)
            .with("adm_ace_arb", 0i64)
            .with("adm_anticoag", "No")
            .with("adm_creat", 88i64)
            .with("adm_crp", 41.5)
            .with("adm_ddimer_new", "NA")
            .with("adm_ferritin", 512i64)
            .with("adm_ldh", 301i64)
            .with("adm_neutrotolymphorate", 4.2)
            .with("adm_procalcitonin", "0.08")
            .with("age", 54i64)
            .with("bmi", "NA")
            .with("comorb_cvd", "No")
            .with("comorb_cvd_hypertension", "Yes")
            .with("comorb_dm", "NA")
            .with("comorb_pulm_dis", "No")
            .with("ct_sevscore_total", 12i64)
            .with("ftime", 17i64)
            .with("immunocompromised", 1i64)
            .with("mews", 2i64)
            .with("sex", "male")
            .with("status", 1i64)
            .with("sympt_duration", 7i64)
            .with("sympt_dyspnea", 1i64)
            .with("sympt_fever", "NA")
            .with("sympt_sevscore_total", 3i64)
            .with("xray_new", "Done, susp")
    }

    #[test]
    fn test_normalize_complete_row() {
        let record = RecordNormalizer::new().normalize(&complete_row()).unwrap();

        assert_eq!(record.age, 54.0);
        assert_eq!(record.ftime, 17.0);
        assert_eq!(record.sex, Sex::Male);
        assert_eq!(record.status, Status::Died);
        assert_eq!(record.xray_new, XrayFinding::DoneSuspicious);
        assert_eq!(record.bmi, None);
        assert_eq!(record.adm_ddimer_new, None);
        assert_eq!(record.adm_crp, Some(41.5));
        assert_eq!(record.adm_anticoag, Some(false));
        assert_eq!(record.comorb_cvd_hypertension, Some(true));
        assert_eq!(record.comorb_dm, None);
        assert_eq!(record.adm_ace_arb, Some(false));
        assert_eq!(record.immunocompromised, Some(true));
        assert_eq!(record.sympt_fever, None);
        assert_eq!(record.adm_procalcitonin, "0.08");
    }

    #[test]
    fn test_invalid_cell_names_line_and_column() {
        let row = complete_row().with("sex", "unknown");
        let err = RecordNormalizer::new().normalize(&row).unwrap_err();

        match err {
            LoadError::InvalidCell {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "sex");
                assert_eq!(value, "\"unknown\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_plain_number_is_rejected() {
        let row = complete_row().with("age", "NA");
        let err = RecordNormalizer::new().normalize(&row).unwrap_err();
        assert!(matches!(err, LoadError::InvalidCell { column: "age", .. }));
    }

    #[test]
    fn test_absent_nullable_column_reads_as_missing() {
        let mut row = complete_row();
        row.cells.shift_remove("mews");
        let record = RecordNormalizer::new().normalize(&row).unwrap();
        assert_eq!(record.mews, None);
    }

    #[test]
    fn test_check_header_reports_all_missing() {
        let header: Vec<&str> = Column::ALL
            .iter()
            .map(|c| c.name())
            .filter(|n| *n != "bmi" && *n != "xray_new")
            .chain(["patient_id"])
            .collect();

        let err = RecordNormalizer::new().check_header(header).unwrap_err();
        match err {
            LoadError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["bmi".to_string(), "xray_new".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_header_rejects_repeated_names() {
        let header: Vec<&str> = Column::ALL
            .iter()
            .map(|c| c.name())
            .chain(["bmi", "patient_id", "patient_id"])
            .collect();

        let err = RecordNormalizer::new().check_header(header).unwrap_err();
        match err {
            LoadError::DuplicateColumns { columns } => {
                assert_eq!(columns, vec!["bmi".to_string(), "patient_id".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_rows_preserves_order() {
        let rows = vec![
            complete_row().with("age", 30i64),
            complete_row().with("age", 70i64),
            complete_row().with("age", 45i64),
        ];
        let records = RecordNormalizer::new().normalize_rows(&rows).unwrap();
        let ages: Vec<f64> = records.iter().map(|r| r.age).collect();
        assert_eq!(ages, vec![30.0, 70.0, 45.0]);
    }

    #[test]
    fn test_raw_equivalent_is_idempotent() {
        let normalizer = RecordNormalizer::new();
        let first = normalizer.normalize(&complete_row()).unwrap();
        let second = normalizer.normalize(&RawRow::from(&first)).unwrap();
        let third = normalizer.normalize(&RawRow::from(&second)).unwrap();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }
}
