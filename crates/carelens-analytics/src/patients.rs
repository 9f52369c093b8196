//! Patient demographics and engagement aggregation.

use std::collections::HashMap;

use carelens_core::{Appointment, Patient, Visit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patient counts per fixed age band, inclusive upper bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "0-18")]
    pub years_0_18: u64,
    #[serde(rename = "19-35")]
    pub years_19_35: u64,
    #[serde(rename = "36-50")]
    pub years_36_50: u64,
    #[serde(rename = "51-65")]
    pub years_51_65: u64,
    #[serde(rename = "65+")]
    pub years_over_65: u64,
}

impl AgeDistribution {
    fn bucket(&mut self, age: u32) {
        match age {
            0..=18 => self.years_0_18 += 1,
            19..=35 => self.years_19_35 += 1,
            36..=50 => self.years_36_50 += 1,
            51..=65 => self.years_51_65 += 1,
            _ => self.years_over_65 += 1,
        }
    }

    fn bands(&self) -> [(&'static str, u64); 5] {
        [
            ("0-18", self.years_0_18),
            ("19-35", self.years_19_35),
            ("36-50", self.years_36_50),
            ("51-65", self.years_51_65),
            ("65+", self.years_over_65),
        ]
    }
}

/// Gender tally. Unrecognized or absent values fold into `other`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub male: u64,
    pub female: u64,
    pub other: u64,
}

/// Appointment-frequency tiers over patients with at least one appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementTiers {
    /// 1-2 appointments.
    pub low: u64,
    /// 3-5 appointments.
    pub medium: u64,
    /// 6 or more.
    pub high: u64,
}

/// Frequency of one diagnosis/reason string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConditionStat {
    pub condition: String,
    pub count: u64,
}

/// Patient behavior summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInsights {
    #[serde(rename = "ageDistribution")]
    pub age_distribution: AgeDistribution,
    #[serde(rename = "genderDistribution")]
    pub gender_distribution: GenderDistribution,
    pub engagement: EngagementTiers,
    /// Top 10 diagnosis/reason strings by visit frequency.
    #[serde(rename = "topConditions")]
    pub top_conditions: Vec<ConditionStat>,
    pub insights: Vec<String>,
}

/// Aggregate patient demographics, engagement, and visit conditions.
///
/// Age comes from `date_of_birth` (whole years at `now`), falling back to
/// the literal `age` field; patients with neither are not age-bucketed.
pub fn analyze_patient_behavior(
    patients: &[Patient],
    appointments: &[Appointment],
    visits: &[Visit],
    now: DateTime<Utc>,
) -> PatientInsights {
    let today = now.date_naive();

    let mut age_distribution = AgeDistribution::default();
    let mut gender_distribution = GenderDistribution::default();
    for patient in patients {
        let age = patient
            .date_of_birth
            .and_then(|dob| today.years_since(dob))
            .or(patient.age);
        if let Some(age) = age {
            age_distribution.bucket(age);
        }

        match patient.gender.as_deref() {
            Some(g) if g.eq_ignore_ascii_case("male") => gender_distribution.male += 1,
            Some(g) if g.eq_ignore_ascii_case("female") => gender_distribution.female += 1,
            _ => gender_distribution.other += 1,
        }
    }

    let mut appointments_per_patient: HashMap<&str, u64> = HashMap::new();
    for appointment in appointments {
        *appointments_per_patient
            .entry(appointment.patient.as_str())
            .or_insert(0) += 1;
    }
    let mut engagement = EngagementTiers::default();
    for &count in appointments_per_patient.values() {
        if count <= 2 {
            engagement.low += 1;
        } else if count <= 5 {
            engagement.medium += 1;
        } else {
            engagement.high += 1;
        }
    }

    let mut by_condition: HashMap<&str, u64> = HashMap::new();
    for visit in visits {
        let condition = visit
            .diagnosis
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .or_else(|| visit.reason.as_deref().map(str::trim).filter(|r| !r.is_empty()));
        if let Some(condition) = condition {
            *by_condition.entry(condition).or_insert(0) += 1;
        }
    }
    let mut top_conditions: Vec<ConditionStat> = by_condition
        .into_iter()
        .map(|(condition, count)| ConditionStat {
            condition: condition.to_string(),
            count,
        })
        .collect();
    top_conditions.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.condition.cmp(&b.condition))
    });
    top_conditions.truncate(10);

    let mut insights = Vec::new();
    // First band wins ties, matching the fixed band order.
    let top_band = age_distribution
        .bands()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .fold(None, |best: Option<(&str, u64)>, current| match best {
            Some(b) if b.1 >= current.1 => Some(b),
            _ => Some(current),
        });
    if let Some((band, _)) = top_band {
        insights.push(format!("Most patients fall in the {} age band.", band));
    }
    if let Some(top) = top_conditions.first() {
        insights.push(format!(
            "{} is the most common reason for visits.",
            top.condition
        ));
    }

    PatientInsights {
        age_distribution,
        gender_distribution,
        engagement,
        top_conditions,
        insights,
    }
}
