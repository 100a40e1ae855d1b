//! Typed cohort records and their closed enumerations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient sex as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    pub fn from_label(s: &str) -> Option<Sex> {
        match s {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome at the end of follow-up.
///
/// Serialized as its integer code, the form the visualization keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    Censored,
    Died,
    Recovered,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Censored, Status::Died, Status::Recovered];

    pub fn code(self) -> u8 {
        match self {
            Status::Censored => 0,
            Status::Died => 1,
            Status::Recovered => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Status> {
        match code {
            0 => Some(Status::Censored),
            1 => Some(Status::Died),
            2 => Some(Status::Recovered),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Censored => "censored",
            Status::Died => "died",
            Status::Recovered => "recovered",
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status.code()
    }
}

impl TryFrom<u8> for Status {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Status::from_code(code).ok_or_else(|| format!("invalid status code: {}", code))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chest X-ray at admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XrayFinding {
    #[serde(rename = "Done, susp")]
    DoneSuspicious,
    #[serde(rename = "Done, not susp")]
    DoneNotSuspicious,
    #[serde(rename = "Not done")]
    NotDone,
}

impl XrayFinding {
    pub fn label(self) -> &'static str {
        match self {
            XrayFinding::DoneSuspicious => "Done, susp",
            XrayFinding::DoneNotSuspicious => "Done, not susp",
            XrayFinding::NotDone => "Not done",
        }
    }

    pub fn from_label(s: &str) -> Option<XrayFinding> {
        match s {
            "Done, susp" => Some(XrayFinding::DoneSuspicious),
            "Done, not susp" => Some(XrayFinding::DoneNotSuspicious),
            "Not done" => Some(XrayFinding::NotDone),
            _ => None,
        }
    }
}

impl fmt::Display for XrayFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One clinical case, normalized.
///
/// `None` means the source cell was `NA` (or empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub adm_ace_arb: Option<bool>,
    pub adm_anticoag: Option<bool>,
    pub adm_creat: Option<f64>,
    pub adm_crp: Option<f64>,
    pub adm_ddimer_new: Option<f64>,
    pub adm_ferritin: Option<f64>,
    pub adm_ldh: Option<f64>,
    pub adm_neutrotolymphorate: Option<f64>,
    pub adm_procalcitonin: String,
    pub age: f64,
    pub bmi: Option<f64>,
    pub comorb_cvd: Option<bool>,
    pub comorb_cvd_hypertension: Option<bool>,
    pub comorb_dm: Option<bool>,
    pub comorb_pulm_dis: Option<bool>,
    pub ct_sevscore_total: Option<f64>,
    /// Follow-up time in days
    pub ftime: f64,
    pub immunocompromised: Option<bool>,
    pub mews: Option<f64>,
    pub sex: Sex,
    pub status: Status,
    pub sympt_duration: Option<f64>,
    pub sympt_dyspnea: Option<bool>,
    pub sympt_fever: Option<bool>,
    pub sympt_sevscore_total: Option<f64>,
    pub xray_new: XrayFinding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        for status in Status::ALL {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code(3), None);
        assert_eq!(Status::Died.code(), 1);
    }

    #[test]
    fn test_status_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Status::Recovered).unwrap(), "2");
        let status: Status = serde_json::from_str("0").unwrap();
        assert_eq!(status, Status::Censored);
        assert!(serde_json::from_str::<Status>("5").is_err());
    }

    #[test]
    fn test_sex_labels() {
        assert_eq!(Sex::from_label("female"), Some(Sex::Female));
        assert_eq!(Sex::from_label("Male"), None);
        assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"male\"");
    }

    #[test]
    fn test_xray_labels() {
        assert_eq!(
            XrayFinding::from_label("Done, not susp"),
            Some(XrayFinding::DoneNotSuspicious)
        );
        assert_eq!(XrayFinding::from_label("done, susp"), None);
        assert_eq!(
            serde_json::to_string(&XrayFinding::NotDone).unwrap(),
            "\"Not done\""
        );
    }
}
