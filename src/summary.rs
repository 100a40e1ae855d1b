//! Cohort-level statistics over normalized records

use indexmap::IndexMap;

use crate::model::{raw_cell, Column, NormalizedRecord, Sex, Status};

/// Age distribution of a non-empty cohort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Counts and simple statistics for a set of records
#[derive(Debug, Clone, PartialEq)]
pub struct CohortSummary {
    pub total: usize,
    /// Every status, including those with zero cases
    pub by_status: IndexMap<Status, usize>,
    /// Every sex, including those with zero cases
    pub by_sex: IndexMap<Sex, usize>,
    /// Absent values per nullable column, in column order
    pub missing: IndexMap<Column, usize>,
    pub age: Option<AgeStats>,
    pub median_ftime: Option<f64>,
}

impl CohortSummary {
    pub fn from_records(records: &[NormalizedRecord]) -> Self {
        let mut by_status: IndexMap<Status, usize> =
            Status::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut by_sex: IndexMap<Sex, usize> = Sex::ALL.into_iter().map(|s| (s, 0)).collect();
        let mut missing: IndexMap<Column, usize> = Column::ALL
            .into_iter()
            .filter(|c| c.class().is_nullable())
            .map(|c| (c, 0))
            .collect();

        for record in records {
            *by_status.entry(record.status).or_default() += 1;
            *by_sex.entry(record.sex).or_default() += 1;
            for (column, count) in missing.iter_mut() {
                if raw_cell(record, *column).is_missing() {
                    *count += 1;
                }
            }
        }

        Self {
            total: records.len(),
            by_status,
            by_sex,
            missing,
            age: age_stats(records),
            median_ftime: median(records.iter().map(|r| r.ftime).collect()),
        }
    }

    /// Share of cases with the given status, in percent
    pub fn status_share(&self, status: Status) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let count = self.by_status.get(&status).copied().unwrap_or(0);
        Some(count as f64 * 100.0 / self.total as f64)
    }
}

fn age_stats(records: &[NormalizedRecord]) -> Option<AgeStats> {
    let first = records.first()?;
    let (min, max, sum) = records.iter().fold(
        (first.age, first.age, 0.0),
        |(min, max, sum), r| (min.min(r.age), max.max(r.age), sum + r.age),
    );
    Some(AgeStats {
        min,
        max,
        mean: sum / records.len() as f64,
    })
}

fn median(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::XrayFinding;

    fn record(
        age: f64,
        ftime: f64,
        sex: Sex,
        status: Status,
        bmi: Option<f64>,
    ) -> NormalizedRecord {
        NormalizedRecord {
            adm_ace_arb: None,
            adm_anticoag: Some(true),
            adm_creat: Some(80.0),
            adm_crp: Some(12.0),
            adm_ddimer_new: Some(0.4),
            adm_ferritin: Some(300.0),
            adm_ldh: Some(250.0),
            adm_neutrotolymphorate: Some(3.1),
            adm_procalcitonin: "0.1".into(),
            age,
            bmi,
            comorb_cvd: Some(false),
            comorb_cvd_hypertension: Some(false),
            comorb_dm: Some(false),
            comorb_pulm_dis: Some(false),
            ct_sevscore_total: Some(10.0),
            ftime,
            immunocompromised: Some(false),
            mews: Some(1.0),
            sex,
            status,
            sympt_duration: Some(5.0),
            sympt_dyspnea: Some(true),
            sympt_fever: Some(true),
            sympt_sevscore_total: Some(2.0),
            xray_new: XrayFinding::NotDone,
        }
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record(40.0, 10.0, Sex::Male, Status::Recovered, Some(24.0)),
            record(70.0, 3.0, Sex::Female, Status::Died, None),
            record(58.0, 21.0, Sex::Male, Status::Recovered, None),
        ];
        let summary = CohortSummary::from_records(&records);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_status[&Status::Recovered], 2);
        assert_eq!(summary.by_status[&Status::Died], 1);
        assert_eq!(summary.by_status[&Status::Censored], 0);
        assert_eq!(summary.by_sex[&Sex::Male], 2);
        assert_eq!(summary.missing[&Column::Bmi], 2);
        assert_eq!(summary.missing[&Column::AdmAceArb], 3);
        assert_eq!(summary.missing[&Column::Mews], 0);
        assert!(!summary.missing.contains_key(&Column::Age));
        assert_eq!(summary.median_ftime, Some(10.0));

        let age = summary.age.unwrap();
        assert_eq!(age.min, 40.0);
        assert_eq!(age.max, 70.0);
        assert_eq!(age.mean, 56.0);
    }

    #[test]
    fn test_status_share() {
        let records = vec![
            record(40.0, 10.0, Sex::Male, Status::Died, None),
            record(50.0, 12.0, Sex::Male, Status::Recovered, None),
        ];
        let summary = CohortSummary::from_records(&records);
        assert_eq!(summary.status_share(Status::Died), Some(50.0));
    }

    #[test]
    fn test_empty_cohort() {
        let summary = CohortSummary::from_records(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.age, None);
        assert_eq!(summary.median_ftime, None);
        assert_eq!(summary.status_share(Status::Died), None);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }
}
