//! Column set of the cohort dataset and the field class of each column

use std::fmt;

/// Token set a boolean column is written with in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolCoding {
    /// `Yes` / `No`
    YesNo,
    /// `1` / `0`
    ZeroOne,
}

/// Semantic type a column normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Always-present number
    Number,
    /// Number or `NA`
    NullableNumber,
    /// Boolean token or `NA`
    NullableBool(BoolCoding),
    Sex,
    Status,
    Xray,
    /// Untyped text, kept verbatim
    Text,
}

impl FieldClass {
    /// Whether `NA` is a valid value for this class
    pub fn is_nullable(self) -> bool {
        matches!(self, FieldClass::NullableNumber | FieldClass::NullableBool(_))
    }

    /// Description of accepted values, used in error messages.
    pub fn expected(self) -> &'static str {
        match self {
            FieldClass::Number => "a number",
            FieldClass::NullableNumber => "a number or NA",
            FieldClass::NullableBool(_) => "one of Yes, No, 1, 0, NA",
            FieldClass::Sex => "one of female, male",
            FieldClass::Status => "one of 0, 1, 2",
            FieldClass::Xray => "one of \"Done, susp\", \"Done, not susp\", \"Not done\"",
            FieldClass::Text => "text",
        }
    }
}

/// A column of the cohort dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    AdmAceArb,
    AdmAnticoag,
    AdmCreat,
    AdmCrp,
    AdmDdimerNew,
    AdmFerritin,
    AdmLdh,
    AdmNeutrotolymphorate,
    AdmProcalcitonin,
    Age,
    Bmi,
    ComorbCvd,
    ComorbCvdHypertension,
    ComorbDm,
    ComorbPulmDis,
    CtSevscoreTotal,
    Ftime,
    Immunocompromised,
    Mews,
    Sex,
    Status,
    SymptDuration,
    SymptDyspnea,
    SymptFever,
    SymptSevscoreTotal,
    XrayNew,
}

impl Column {
    /// Every column, in source header order
    pub const ALL: [Column; 26] = [
        Column::AdmAceArb,
        Column::AdmAnticoag,
        Column::AdmCreat,
        Column::AdmCrp,
        Column::AdmDdimerNew,
        Column::AdmFerritin,
        Column::AdmLdh,
        Column::AdmNeutrotolymphorate,
        Column::AdmProcalcitonin,
        Column::Age,
        Column::Bmi,
        Column::ComorbCvd,
        Column::ComorbCvdHypertension,
        Column::ComorbDm,
        Column::ComorbPulmDis,
        Column::CtSevscoreTotal,
        Column::Ftime,
        Column::Immunocompromised,
        Column::Mews,
        Column::Sex,
        Column::Status,
        Column::SymptDuration,
        Column::SymptDyspnea,
        Column::SymptFever,
        Column::SymptSevscoreTotal,
        Column::XrayNew,
    ];

    /// Header name of the column
    pub fn name(self) -> &'static str {
        match self {
            Column::AdmAceArb => "adm_ace_arb",
            Column::AdmAnticoag => "adm_anticoag",
            Column::AdmCreat => "adm_creat",
            Column::AdmCrp => "adm_crp",
            Column::AdmDdimerNew => "adm_ddimer_new",
            Column::AdmFerritin => "adm_ferritin",
            Column::AdmLdh => "adm_ldh",
            Column::AdmNeutrotolymphorate => "adm_neutrotolymphorate",
            Column::AdmProcalcitonin => "adm_procalcitonin",
            Column::Age => "age",
            Column::Bmi => "bmi",
            Column::ComorbCvd => "comorb_cvd",
            Column::ComorbCvdHypertension => "comorb_cvd_hypertension",
            Column::ComorbDm => "comorb_dm",
            Column::ComorbPulmDis => "comorb_pulm_dis",
            Column::CtSevscoreTotal => "ct_sevscore_total",
            Column::Ftime => "ftime",
            Column::Immunocompromised => "immunocompromised",
            Column::Mews => "mews",
            Column::Sex => "sex",
            Column::Status => "status",
            Column::SymptDuration => "sympt_duration",
            Column::SymptDyspnea => "sympt_dyspnea",
            Column::SymptFever => "sympt_fever",
            Column::SymptSevscoreTotal => "sympt_sevscore_total",
            Column::XrayNew => "xray_new",
        }
    }

    /// Field class the column normalizes to
    pub fn class(self) -> FieldClass {
        use BoolCoding::{YesNo, ZeroOne};

        match self {
            Column::Age | Column::Ftime => FieldClass::Number,
            Column::AdmCreat
            | Column::AdmCrp
            | Column::AdmDdimerNew
            | Column::AdmFerritin
            | Column::AdmLdh
            | Column::AdmNeutrotolymphorate
            | Column::Bmi
            | Column::CtSevscoreTotal
            | Column::Mews
            | Column::SymptDuration
            | Column::SymptSevscoreTotal => FieldClass::NullableNumber,
            Column::AdmAnticoag
            | Column::ComorbCvd
            | Column::ComorbCvdHypertension
            | Column::ComorbDm
            | Column::ComorbPulmDis => FieldClass::NullableBool(YesNo),
            Column::AdmAceArb
            | Column::Immunocompromised
            | Column::SymptDyspnea
            | Column::SymptFever => FieldClass::NullableBool(ZeroOne),
            Column::Sex => FieldClass::Sex,
            Column::Status => FieldClass::Status,
            Column::XrayNew => FieldClass::Xray,
            Column::AdmProcalcitonin => FieldClass::Text,
        }
    }

    /// Look up a column by header name (exact match)
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
