//! Raw rows and tables produced by source parsers

use indexmap::IndexMap;

use super::cell::RawCell;
use super::record::NormalizedRecord;
use super::schema::{BoolCoding, Column, FieldClass};

/// One untyped input row, keyed by column name in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Cells by column name
    pub cells: IndexMap<String, RawCell>,
    /// Original line/row number in source file (1-indexed)
    pub source_line: usize,
}

impl RawRow {
    /// Create an empty row
    pub fn new(source_line: usize) -> Self {
        Self {
            cells: IndexMap::new(),
            source_line,
        }
    }

    /// Builder-style insert
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<RawCell>) -> Self {
        self.insert(column, cell);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<RawCell>) {
        self.cells.insert(column.into(), cell.into());
    }

    /// Get a cell by column name
    pub fn get(&self, column: &str) -> Option<&RawCell> {
        self.cells.get(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Raw equivalent of a normalized record, using each column's native coding.
impl From<&NormalizedRecord> for RawRow {
    fn from(record: &NormalizedRecord) -> Self {
        let mut row = RawRow::new(0);
        for column in Column::ALL {
            row.insert(column.name(), raw_cell(record, column));
        }
        row
    }
}

/// Render one field of a record as the cell the source would hold.
pub fn raw_cell(record: &NormalizedRecord, column: Column) -> RawCell {
    let coding = match column.class() {
        FieldClass::NullableBool(coding) => coding,
        _ => BoolCoding::ZeroOne,
    };
    let number = |v: Option<f64>| v.map_or(RawCell::Na, RawCell::Number);
    let flag = |v: Option<bool>| match (v, coding) {
        (None, _) => RawCell::Na,
        (Some(b), BoolCoding::YesNo) => RawCell::Text(if b { "Yes" } else { "No" }.into()),
        (Some(b), BoolCoding::ZeroOne) => RawCell::Number(if b { 1.0 } else { 0.0 }),
    };

    match column {
        Column::AdmAceArb => flag(record.adm_ace_arb),
        Column::AdmAnticoag => flag(record.adm_anticoag),
        Column::AdmCreat => number(record.adm_creat),
        Column::AdmCrp => number(record.adm_crp),
        Column::AdmDdimerNew => number(record.adm_ddimer_new),
        Column::AdmFerritin => number(record.adm_ferritin),
        Column::AdmLdh => number(record.adm_ldh),
        Column::AdmNeutrotolymphorate => number(record.adm_neutrotolymphorate),
        Column::AdmProcalcitonin => RawCell::infer(&record.adm_procalcitonin),
        Column::Age => RawCell::Number(record.age),
        Column::Bmi => number(record.bmi),
        Column::ComorbCvd => flag(record.comorb_cvd),
        Column::ComorbCvdHypertension => flag(record.comorb_cvd_hypertension),
        Column::ComorbDm => flag(record.comorb_dm),
        Column::ComorbPulmDis => flag(record.comorb_pulm_dis),
        Column::CtSevscoreTotal => number(record.ct_sevscore_total),
        Column::Ftime => RawCell::Number(record.ftime),
        Column::Immunocompromised => flag(record.immunocompromised),
        Column::Mews => number(record.mews),
        Column::Sex => RawCell::Text(record.sex.label().into()),
        Column::Status => RawCell::Number(f64::from(record.status.code())),
        Column::SymptDuration => number(record.sympt_duration),
        Column::SymptDyspnea => flag(record.sympt_dyspnea),
        Column::SymptFever => flag(record.sympt_fever),
        Column::SymptSevscoreTotal => number(record.sympt_sevscore_total),
        Column::XrayNew => RawCell::Text(record.xray_new.label().into()),
    }
}

/// Header plus rows read from one source.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Column names in header order
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
